//! Searches on a Grid of Tiles with a walking Cost each.
//!
//! The Grid is described by a [`Neighborhood`] and a Function `get_cost(point) -> isize`
//! that returns how expensive it is to walk off the Tile at `point`. A negative Cost marks a
//! solid Tile, which is treated as an obstacle.
//!
//! ## Solid Goals
//! It is possible to calculate the shortest Path to for example a Wall or other solid Tiles.
//! A solid Tile is never walked over, but it can be the last step of a Path if it is one of
//! the goals.

use crate::neighbors::Neighborhood;
use crate::Point;

mod a_star;
pub use a_star::a_star_search;

mod dijkstra;
pub use dijkstra::dijkstra_search;

/// the Neighbors of `point`, with solid Tiles replaced by `None` unless they are a goal
fn walkable_neighbors<N: Neighborhood>(
    neighborhood: &N,
    get_cost: &impl Fn(Point) -> isize,
    point: Point,
    goals: &[Point],
) -> Vec<Option<Point>> {
    neighborhood
        .neighbors(point)
        .into_iter()
        .map(|other| (get_cost(other) >= 0 || goals.contains(&other)).then_some(other))
        .collect()
}

/// the Cost of walking off a Tile. Solid Tiles are never expanded, so this never wraps.
fn step_cost(get_cost: &impl Fn(Point) -> isize, point: Point) -> usize {
    get_cost(point).max(0) as usize
}

#[cfg(test)]
pub(crate) mod test_grid {
    use crate::Point;

    // 0 = empty, 1 = swamp, 2 = wall
    pub const GRID: [[usize; 5]; 5] = [
        [0, 2, 0, 0, 0],
        [0, 2, 2, 2, 2],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 2, 0],
        [0, 0, 0, 2, 0],
    ];

    const COST_MAP: [isize; 3] = [1, 10, -1];

    pub fn cost_fn(grid: &[[usize; 5]; 5]) -> impl '_ + Fn(Point) -> isize {
        move |(x, y)| COST_MAP[grid[y][x]]
    }
}
