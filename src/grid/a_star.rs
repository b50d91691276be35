use super::{step_cost, walkable_neighbors};
use crate::{neighbors::Neighborhood, Path, Point, SearchConfig};

/// Searches a Grid for the cheapest Path from `start` to `goal` using A*.
///
/// The Heuristic is the one of the `neighborhood`, which assumes that walking off a Tile
/// costs at least `1`.
///
/// ## Examples
/// Basic usage:
/// ```
/// use generic_pathfinding::{grid, prelude::*, Point};
///
/// // create and initialize Grid
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid = [
///     [0, 2, 0, 0, 0],
///     [0, 2, 2, 2, 2],
///     [0, 1, 0, 0, 0],
///     [0, 1, 0, 2, 0],
///     [0, 0, 0, 2, 0],
/// ];
/// let (width, height) = (grid[0].len(), grid.len());
///
/// const COST_MAP: [isize; 3] = [1, 10, -1];
///
/// fn cost_fn<'a>(grid: &'a [[usize; 5]; 5]) -> impl 'a + Fn(Point) -> isize {
///     move |(x, y)| COST_MAP[grid[y][x]]
/// }
///
/// let path = grid::a_star_search(
///     &ManhattanNeighborhood::new(width, height),
///     cost_fn(&grid),
///     (0, 0), // start
///     (4, 4), // goal
///     SearchConfig::default(),
/// );
///
/// assert_eq!(path.map(|path| path.cost()), Some(12));
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable or the `start` is solid.
pub fn a_star_search<N: Neighborhood>(
    neighborhood: &N,
    get_cost: impl Fn(Point) -> isize,
    start: Point,
    goal: Point,
    config: SearchConfig<usize>,
) -> Option<Path<Point, usize>> {
    if get_cost(start) < 0 {
        return None;
    }
    crate::a_star_search(
        start,
        goal,
        |&point, _| step_cost(&get_cost, point),
        |&point, &goal| neighborhood.heuristic(point, goal),
        |&point| walkable_neighbors(neighborhood, &get_cost, point, &[goal]),
        config,
    )
}
