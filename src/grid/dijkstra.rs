use super::{step_cost, walkable_neighbors};
use crate::{neighbors::Neighborhood, Path, Point, SearchConfig};

/// Searches a Grid for the cheapest Path from `start` to the closest of several `goals`
/// using Dijkstra's Algorithm.
///
/// ## Examples
/// Basic usage:
/// ```
/// use generic_pathfinding::{grid, prelude::*, Point};
///
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid = [
///     [0, 2, 0, 0, 0],
///     [0, 2, 2, 2, 2],
///     [0, 1, 0, 0, 0],
///     [0, 1, 0, 2, 0],
///     [0, 0, 0, 2, 0],
/// ];
/// let cost_fn = |(x, y): Point| [1, 10, -1][grid[y][x]];
///
/// let path = grid::dijkstra_search(
///     &ManhattanNeighborhood::new(5, 5),
///     cost_fn,
///     (0, 0),
///     &[(4, 4), (2, 0), (0, 4)],
///     SearchConfig::default(),
/// );
///
/// assert_eq!(path.unwrap().goal(), Some(&(0, 4)));
/// ```
///
/// ## Returns
/// the Path to the closest reachable goal, or None if no goal can be reached or the `start` is solid.
pub fn dijkstra_search<N: Neighborhood>(
    neighborhood: &N,
    get_cost: impl Fn(Point) -> isize,
    start: Point,
    goals: &[Point],
    config: SearchConfig<usize>,
) -> Option<Path<Point, usize>> {
    if get_cost(start) < 0 {
        return None;
    }
    crate::dijkstra_search(
        start,
        |&point, _| step_cost(&get_cost, point),
        |visit| walkable_neighbors(neighborhood, &get_cost, *visit.node(), goals),
        |visit| goals.contains(visit.node()),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::test_grid::{cost_fn, GRID};
    use crate::neighbors::ManhattanNeighborhood;

    #[test]
    fn basic() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);

        // (2, 0) is not reachable
        let path = dijkstra_search(
            &neighborhood,
            cost_fn(&GRID),
            (0, 0),
            &[(4, 4), (2, 0)],
            SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.goal(), Some(&(4, 4)));
        assert_eq!(path.cost(), 12);
    }

    #[test]
    fn nothing_reachable() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);

        let path = dijkstra_search(
            &neighborhood,
            cost_fn(&GRID),
            (0, 0),
            &[(2, 0), (4, 0)],
            SearchConfig::default(),
        );

        assert!(path.is_none());
    }

    #[test]
    fn swamp_is_avoided_within_budget() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);

        // walking through the swamp at (1, 2) would cost 11, going around costs 6
        let path = dijkstra_search(
            &neighborhood,
            cost_fn(&GRID),
            (0, 2),
            &[(2, 2)],
            SearchConfig::with_max_cost(6),
        )
        .unwrap();

        assert_eq!(path.cost(), 6);
        assert!(!path.contains(&(1, 2)));

        let path = dijkstra_search(
            &neighborhood,
            cost_fn(&GRID),
            (0, 2),
            &[(2, 2)],
            SearchConfig::with_max_cost(5),
        );
        assert!(path.is_none());
    }
}
