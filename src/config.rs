use crate::Cost;

/// Options for configuring a single search.
///
/// Default options:
/// ```
/// # use generic_pathfinding::SearchConfig;
/// assert_eq!(
/// 	SearchConfig::<f32> {
/// 		max_cost: None,
/// 		size_hint: 64,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig<C> {
	/// The maximum Cost a Path may have (defaults to `None`, meaning no limit).
	///
	/// Nodes that could only be reached with a higher Cost are never added to the frontier.
	/// This is the main tool for bounding the time a search takes on large Graphs.
	pub max_cost: Option<C>,
	/// How many Nodes the search expects to visit (defaults to `64`).
	///
	/// Only used to pre-allocate the internal bookkeeping, it has no effect on the result.
	pub size_hint: usize,
}

impl<C: Cost> SearchConfig<C> {
	/// Creates a SearchConfig with the default options, but `max_cost` set to `max_cost`
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use generic_pathfinding::SearchConfig;
	/// let config = SearchConfig::with_max_cost(10.0);
	///
	/// assert_eq!(config.max_cost, Some(10.0));
	/// assert_eq!(config.size_hint, 64);
	/// ```
	pub fn with_max_cost(max_cost: C) -> SearchConfig<C> {
		SearchConfig {
			max_cost: Some(max_cost),
			..Default::default()
		}
	}

	/// Returns `true` if `cost` lies beyond `max_cost`
	pub fn exceeds(&self, cost: C) -> bool {
		match self.max_cost {
			Some(max) => cost.cost_cmp(&max).is_gt(),
			None => false,
		}
	}
}

impl<C> Default for SearchConfig<C> {
	fn default() -> SearchConfig<C> {
		SearchConfig {
			max_cost: None,
			size_hint: 64,
		}
	}
}

#[test]
fn exceeds() {
	let config = SearchConfig::with_max_cost(4);
	assert!(!config.exceeds(3));
	assert!(!config.exceeds(4));
	assert!(config.exceeds(5));

	let unlimited = SearchConfig::<f32>::default();
	assert!(!unlimited.exceeds(f32::MAX));
}
