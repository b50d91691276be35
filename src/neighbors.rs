//! A module with the most common Neighborhoods

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait is a generalized solution to that problem. It provides a function to query all
/// neighboring Points of an existing Point and a Heuristic for how long it might take to reach
/// a goal from a Point.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
/// - [`HexNeighborhood`] for Agents on a Grid of hexagonal Tiles
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point
	///
	/// Note that it is not necessary to check weather the Tile at a Point is solid or not.
	/// That check is done later.
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// Gives a Heuristic for how long it takes to reach `goal` from `point`.
	///
	/// This is usually the Distance between the two Points in the Metric of your Neighborhood.
	///
	/// If there is no proper way of calculation how long it takes, simply return 0. This will
	/// increase the time it takes to calculate the Path, but at least it will always be correct.
	fn heuristic(&self, point: Point, goal: Point) -> usize;

	/// Collects the Neighbors of a Point into a new `Vec`.
	///
	/// Useful as the `get_all_neighbors` argument of the generic searches.
	fn neighbors(&self, point: Point) -> Vec<Point> {
		let mut all = Vec::new();
		self.get_all_neighbors(point, &mut all);
		all
	}
}

fn offset_neighbors(
	(width, height): (usize, usize),
	point: Point,
	offsets: &[(isize, isize)],
	target: &mut Vec<Point>,
) {
	target.extend(
		offsets
			.iter()
			.map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
			.filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height)
			.map(|(x, y)| (x as usize, y as usize)),
	);
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		const OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
		offset_neighbors((self.width, self.height), point, &OFFSETS, target);
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		const OFFSETS: [(isize, isize); 8] = [
			(0, -1),
			(1, -1),
			(1, 0),
			(1, 1),
			(0, 1),
			(-1, 1),
			(-1, 0),
			(-1, -1),
		];
		offset_neighbors((self.width, self.height), point, &OFFSETS, target);
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		point.0.abs_diff(goal.0).max(point.1.abs_diff(goal.1))
	}
}

/// A Neighborhood for Agents on a Grid of pointy-top hexagons, where every odd row is
/// shifted right by half a Tile ("odd-r" offset coordinates).
///
/// The six Neighbors are listed starting to the right and rotating counter-clockwise,
/// with `y` pointing up:
///
/// ```no_code
/// even row y:        odd row y:
///  (x-1,y+1) (x,y+1)      (x,y+1) (x+1,y+1)
/// (x-1,y)  A  (x+1,y)   (x-1,y)  A  (x+1,y)
///  (x-1,y-1) (x,y-1)      (x,y-1) (x+1,y-1)
/// ```
///
/// The Heuristic is the number of Tiles between two Points. See
/// [Red Blob Games](https://www.redblobgames.com/grids/hexagons/) for the math behind it.
#[derive(Clone, Copy, Debug)]
pub struct HexNeighborhood {
	width: usize,
	height: usize,
	tile_size: f32,
}

impl HexNeighborhood {
	/// Right, TopRight, TopLeft, Left, BottomLeft, BottomRight for even rows
	pub const EVEN_OFFSETS: [(isize, isize); 6] =
		[(1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];
	/// Right, TopRight, TopLeft, Left, BottomLeft, BottomRight for odd rows
	pub const ODD_OFFSETS: [(isize, isize); 6] =
		[(1, 0), (1, 1), (0, 1), (-1, 0), (0, -1), (1, -1)];

	/// Creates a new HexNeighborhood with a `tile_size` of `1.0`.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> HexNeighborhood {
		HexNeighborhood {
			width,
			height,
			tile_size: 1.0,
		}
	}

	/// Changes the size of a single Tile. Only affects the world-space functions.
	pub fn with_tile_size(self, tile_size: f32) -> HexNeighborhood {
		HexNeighborhood { tile_size, ..self }
	}

	/// The offsets to the Neighbors of a Tile in row `y`
	pub fn offsets(y: usize) -> &'static [(isize, isize); 6] {
		if y % 2 == 0 {
			&Self::EVEN_OFFSETS
		} else {
			&Self::ODD_OFFSETS
		}
	}

	/// The number of Tiles on the shortest walk between `a` and `b`, ignoring obstacles
	///
	/// ## Examples
	/// ```
	/// # use generic_pathfinding::neighbors::HexNeighborhood;
	/// assert_eq!(HexNeighborhood::tile_distance((2, 2), (1, 3)), 1);
	/// assert_eq!(HexNeighborhood::tile_distance((0, 0), (3, 0)), 3);
	/// assert_eq!(HexNeighborhood::tile_distance((0, 0), (1, 2)), 2);
	/// ```
	pub fn tile_distance(a: Point, b: Point) -> usize {
		let (aq, ar) = Self::offset_to_axial(a);
		let (bq, br) = Self::offset_to_axial(b);
		let (dq, dr) = (bq - aq, br - ar);
		((dq.abs() + (dq + dr).abs() + dr.abs()) / 2) as usize
	}

	fn offset_to_axial((x, y): Point) -> (isize, isize) {
		let (x, y) = (x as isize, y as isize);
		(x - (y - (y & 1)) / 2, y)
	}

	/// Distance between the centers of two horizontally adjacent Tiles.
	///
	/// All six Neighbors of a Tile are this far away from it.
	pub fn spacing(&self) -> f32 {
		self.tile_size * 3f32.sqrt() / 2.0
	}

	/// The center of a Tile on the (x, z) plane
	pub fn world_position(&self, (x, y): Point) -> (f32, f32) {
		let spacing = self.spacing();
		let shift = if y % 2 == 0 { 0.0 } else { spacing / 2.0 };
		(x as f32 * spacing + shift, y as f32 * self.tile_size * 0.75)
	}

	/// Euclidean distance between the centers of two Tiles.
	///
	/// This is the Cost of walking from one Tile to its Neighbor in world space.
	pub fn world_distance(&self, a: Point, b: Point) -> f32 {
		let (ax, az) = self.world_position(a);
		let (bx, bz) = self.world_position(b);
		((bx - ax).powi(2) + (bz - az).powi(2)).sqrt()
	}

	/// An admissible Heuristic for Paths that use [`world_distance`](Self::world_distance) as their Cost
	pub fn world_heuristic(&self, a: Point, b: Point) -> f32 {
		Self::tile_distance(a, b) as f32 * self.spacing()
	}
}

impl Neighborhood for HexNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		offset_neighbors(
			(self.width, self.height),
			point,
			HexNeighborhood::offsets(point.1),
			target,
		);
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		HexNeighborhood::tile_distance(point, goal)
	}
}
