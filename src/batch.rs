//! Running many independent searches on the same Graph.
//!
//! Every search owns its own bookkeeping, so nothing mutable is shared between them.
//! With the `parallel` feature the searches are spread over the [`rayon`] thread pool.

use crate::{a_star_search, Cost, Path, SearchConfig};

use std::hash::Hash;

/// Runs [`a_star_search`] once for every `(start, goal)` pair in `queries`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use generic_pathfinding::{batch::a_star_search_many, SearchConfig};
/// // a line of Nodes 0 - 1 - 2 - ... - 9
/// let paths = a_star_search_many(
/// 	&[(0, 3), (5, 2), (4, 12)],
/// 	|_, _| 1,
/// 	|a: &i32, b: &i32| (a - b).abs(),
/// 	|&n| [n - 1, n + 1].into_iter().filter(|n| (0..10).contains(n)).collect::<Vec<_>>(),
/// 	SearchConfig::default(),
/// );
///
/// assert_eq!(paths[0].as_ref().map(|p| p.cost()), Some(3));
/// assert_eq!(paths[1].as_ref().map(|p| p.cost()), Some(3));
/// assert!(paths[2].is_none());
/// ```
///
/// ## Returns
/// one result per query, in the same order as `queries`
pub fn a_star_search_many<N, C, I>(
	queries: &[(N, N)],
	get_cost: impl Fn(&N, &N) -> C,
	get_heuristic: impl Fn(&N, &N) -> C,
	get_all_neighbors: impl Fn(&N) -> I,
	config: SearchConfig<C>,
) -> Vec<Option<Path<N, C>>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator,
	I::Item: Into<Option<N>>,
{
	queries
		.iter()
		.map(|(start, goal)| {
			a_star_search(
				start.clone(),
				goal.clone(),
				&get_cost,
				&get_heuristic,
				&get_all_neighbors,
				config,
			)
		})
		.collect()
}

/// Same as [`a_star_search_many`], but runs the searches in parallel.
///
/// The callbacks are shared between threads and therefore have to be `Sync`.
#[cfg(feature = "parallel")]
pub fn a_star_search_many_parallel<N, C, I>(
	queries: &[(N, N)],
	get_cost: impl Fn(&N, &N) -> C + Sync,
	get_heuristic: impl Fn(&N, &N) -> C + Sync,
	get_all_neighbors: impl Fn(&N) -> I + Sync,
	config: SearchConfig<C>,
) -> Vec<Option<Path<N, C>>>
where
	N: Clone + Eq + Hash + Send + Sync,
	C: Cost + Send + Sync,
	I: IntoIterator,
	I::Item: Into<Option<N>>,
{
	use rayon::prelude::*;

	re_trace!("batch: running {} searches in parallel", queries.len());

	queries
		.par_iter()
		.map(|(start, goal)| {
			a_star_search(
				start.clone(),
				goal.clone(),
				&get_cost,
				&get_heuristic,
				&get_all_neighbors,
				config,
			)
		})
		.collect()
}
