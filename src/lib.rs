#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths in any Graph, using Dijkstra's Algorithm or A*.
//!
//! ## Introduction
//! Games and simulations store their worlds in all kinds of shapes: square Grids, hexagonal
//! Tilemaps, rooms connected by doors, navigation meshes, ... Most of them still need the same
//! thing from a pathfinding library: "how do I get from here to there".
//!
//! This crate never looks at the world itself. A Graph is described entirely through
//! Functions the caller provides:
//! - `get_all_neighbors` - which Nodes can be reached in one step from a Node.
//! 	Blocked directions may be returned as `None` and are skipped.
//! - `get_cost` - how expensive it is to step from one Node to an adjacent one
//! - `get_heuristic` (A* only) - an estimate of the remaining Cost to a goal
//! - `is_goal` (Dijkstra only) - whether a Node is what the search is looking for
//!
//! Nodes can be any type that is `Clone + Eq + Hash`, Costs can be any integer or float
//! (see [`Cost`]).
//!
//! ## Examples
//! Finding the closest Node satisfying some condition with Dijkstra:
//! ```
//! use generic_pathfinding::{dijkstra_search, SearchConfig};
//!
//! // a 3x3 Grid where every step costs 1
//! let neighbors = |&(x, y): &(i32, i32)| {
//!     [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
//!         .into_iter()
//!         .filter(|&(x, y)| (0..3).contains(&x) && (0..3).contains(&y))
//!         .collect::<Vec<_>>()
//! };
//!
//! let path = dijkstra_search(
//!     (0, 0),
//!     |_, _| 1.0, // get_cost
//!     |visit| neighbors(visit.node()), // get_all_neighbors
//!     |visit| *visit.node() == (2, 2), // is_goal
//!     SearchConfig::default(),
//! );
//!
//! let path = path.unwrap();
//! assert_eq!(path.cost(), 4.0);
//! assert_eq!(path.len(), 5);
//! ```
//!
//! Finding the Path to a specific Node with A*:
//! ```
//! use generic_pathfinding::{a_star_search, SearchConfig};
//! # let neighbors = |&(x, y): &(i32, i32)| {
//! #     [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
//! #         .into_iter()
//! #         .filter(|&(x, y)| (0..3).contains(&x) && (0..3).contains(&y))
//! #         .collect::<Vec<_>>()
//! # };
//!
//! let path = a_star_search(
//!     (0, 0), // start
//!     (2, 2), // goal
//!     |_, _| 1, // get_cost
//!     |a, b| a.0.abs_diff(b.0) + a.1.abs_diff(b.1), // get_heuristic
//!     neighbors,
//!     SearchConfig::default(),
//! );
//!
//! assert_eq!(path.map(|path| path.cost()), Some(4));
//! ```
//!
//! If the goal cannot be reached, or could only be reached with a Cost above
//! [`SearchConfig::max_cost`], the searches return `None`.
//!
//! ### Grids
//! For the common case of a Grid of Tiles, the [`grid`] module provides searches that only
//! need a [`Neighborhood`](neighbors::Neighborhood) and the walking Cost of each Tile.
//! ```
//! use generic_pathfinding::{grid, prelude::*};
//!
//! // 0 = empty, 1 = wall
//! let tiles = [
//!     [0, 0, 0],
//!     [1, 1, 0],
//!     [0, 0, 0],
//! ];
//!
//! let path = grid::a_star_search(
//!     &HexNeighborhood::new(3, 3),
//!     |(x, y)| if tiles[y][x] == 1 { -1 } else { 1 },
//!     (0, 0),
//!     (0, 2),
//!     SearchConfig::default(),
//! );
//!
//! assert!(path.is_some());
//! ```
//!
//! ## Features
//! - `parallel` (default): enables [`batch::a_star_search_many_parallel`] using `rayon`
//! - `log`: traces the outcome of every search through the `log` crate

#[cfg(feature = "log")]
macro_rules! re_trace {
	($($arg:tt)*) => {
		log::trace!($($arg)*)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

mod cost;
pub use self::cost::Cost;

mod config;
pub use self::config::SearchConfig;

mod path;
pub use self::path::Path;

mod search_node;
pub use self::search_node::Visit;

mod frontier;

mod dijkstra;
pub use self::dijkstra::dijkstra_search;

mod a_star;
pub use self::a_star::{a_star_search, a_star_search_any};

pub mod batch;

pub mod grid;

pub mod neighbors;

/// The most commonly used Types and Functions
pub mod prelude {
	pub use crate::neighbors::{
		HexNeighborhood, ManhattanNeighborhood, MooreNeighborhood, Neighborhood,
	};
	pub use crate::{
		a_star_search, a_star_search_any, dijkstra_search, Cost, Path, SearchConfig, Visit,
	};
}
