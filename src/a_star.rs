use crate::frontier::HeuristicElement;
use crate::search_node::NodeArena;
use crate::{Cost, Path, SearchConfig};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Generic type Parameter `N` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, String, a Grid position, ... as long as it can be compared, hashed and cloned.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use generic_pathfinding::{a_star_search, SearchConfig};
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[i32; 5]; 5] = [
/// //    A,  B,  C,  D,  E
/// 	[-1, -1,  1,  9, -1], // A
/// 	[-1, -1, -1, -1,  2], // B
/// 	[ 1, -1, -1,  6, -1], // C
/// 	[ 9, -1,  6, -1, -1], // D
/// 	[-1,  2, -1, -1, -1], // E
/// ];
/// # fn euclid_distance(a: usize, b: usize) -> usize {
/// # 	  [[0, 1, 1, 2, 2], [1, 0, 2, 1, 1], [1, 2, 0, 1, 3], [2, 1, 1, 0, 2], [2, 1, 3, 2, 0]][a][b]
/// # }
///
/// let result = a_star_search(
/// 	A, // start
/// 	D, // goal
/// 	|&a, &b| cost_matrix[a][b] as usize, // get_cost
/// 	|&a, &b| euclid_distance(a, b), // get_heuristic
/// 	|&point| { // get_all_neighbors
/// 		cost_matrix[point]
/// 			.iter()
/// 			.enumerate()
/// 			.filter(|&(_, cost)| *cost != -1)
/// 			.map(|(id, _)| id)
/// 			.collect::<Vec<_>>()
/// 	},
/// 	SearchConfig::default(),
/// );
///
/// let path = result.unwrap();
/// assert_eq!(path, vec![A, C, D]);
/// assert_eq!(path.cost(), 7);
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `goal` - the Goal that this function is supposed to search for
/// - `get_cost` - a Function that takes two adjacent Nodes (a, b) and returns the Cost to go from a to b.
/// 	Must never be negative.
/// - `get_heuristic` - a Function that takes a Node and the `goal` and estimates the Cost between them.
/// 	The Path is only guaranteed to be the cheapest one if this never overestimates.
/// - `get_all_neighbors` - a Function that takes a Node and returns all Nodes reachable from it.
/// 	`None` entries are treated as obstacles and skipped.
/// - `config` - see [`SearchConfig`]
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable (or only reachable beyond `max_cost`).
/// The first Node in the Path is always the `start` and the last is the `goal`.
pub fn a_star_search<N, C, I>(
	start: N,
	goal: N,
	get_cost: impl FnMut(&N, &N) -> C,
	mut get_heuristic: impl FnMut(&N, &N) -> C,
	get_all_neighbors: impl FnMut(&N) -> I,
	config: SearchConfig<C>,
) -> Option<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator,
	I::Item: Into<Option<N>>,
{
	let heuristic = |node: &N| get_heuristic(node, &goal);
	search(
		start,
		|node| *node == goal,
		get_cost,
		heuristic,
		get_all_neighbors,
		config,
	)
}

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// for the cheapest Path to any one of several goals.
///
/// The Heuristic of a Node is the smallest Heuristic towards any of the `goals`, which keeps it
/// admissible as long as `get_heuristic` is.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use generic_pathfinding::{a_star_search_any, SearchConfig};
/// // a line of Nodes 0 - 1 - 2 - ... - 9
/// let path = a_star_search_any(
/// 	4,
/// 	&[0, 6, 9], // goals
/// 	|_, _| 1, // get_cost
/// 	|a: &i32, b: &i32| (a - b).abs(), // get_heuristic
/// 	|&n| [n - 1, n + 1].into_iter().filter(|n| (0..10).contains(n)).collect::<Vec<_>>(),
/// 	SearchConfig::default(),
/// );
///
/// let path = path.unwrap();
/// assert_eq!(path, vec![4, 5, 6]);
/// assert_eq!(path.cost(), 2);
/// ```
///
/// ## Returns
/// the Path to whichever goal is the cheapest to reach, or None if none of them can be reached.
/// An empty list of `goals` always returns None.
pub fn a_star_search_any<N, C, I>(
	start: N,
	goals: &[N],
	get_cost: impl FnMut(&N, &N) -> C,
	mut get_heuristic: impl FnMut(&N, &N) -> C,
	get_all_neighbors: impl FnMut(&N) -> I,
	config: SearchConfig<C>,
) -> Option<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator,
	I::Item: Into<Option<N>>,
{
	if goals.is_empty() {
		re_trace!("a_star: no goals given");
		return None;
	}
	let heuristic = |node: &N| {
		goals
			.iter()
			.map(|goal| get_heuristic(node, goal))
			.reduce(|a, b| a.min_cost(b))
			.unwrap_or(C::ZERO)
	};
	search(
		start,
		|node| goals.contains(node),
		get_cost,
		heuristic,
		get_all_neighbors,
		config,
	)
}

fn search<N, C, I>(
	start: N,
	mut is_goal: impl FnMut(&N) -> bool,
	mut get_cost: impl FnMut(&N, &N) -> C,
	mut heuristic: impl FnMut(&N) -> C,
	mut get_all_neighbors: impl FnMut(&N) -> I,
	config: SearchConfig<C>,
) -> Option<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator,
	I::Item: Into<Option<N>>,
{
	let mut visited = NodeArena::with_capacity(config.size_hint);
	let mut next = BinaryHeap::with_capacity(config.size_hint / 2);

	let start_heuristic = heuristic(&start);
	let start_key = visited.insert(start, None, C::ZERO, start_heuristic);
	next.push(HeuristicElement(start_key, C::ZERO, start_heuristic));

	let mut expanded = 0usize;

	while let Some(HeuristicElement(current_key, current_cost, _)) = next.pop() {
		match current_cost.cost_cmp(&visited[current_key].cost()) {
			Ordering::Greater => continue,
			Ordering::Equal => {}
			Ordering::Less => panic!("Binary Heap failed"),
		}

		if is_goal(visited[current_key].node()) {
			re_trace!(
				"a_star: reached goal with cost {} after expanding {} of {} discovered nodes",
				current_cost,
				expanded,
				visited.len()
			);
			return Some(Path::new(visited.path_to(current_key), current_cost));
		}
		expanded += 1;

		for other in get_all_neighbors(visited[current_key].node()) {
			let Some(other) = other.into() else {
				continue;
			};
			let step = get_cost(visited[current_key].node(), &other);
			let Some(other_cost) = current_cost.add_cost(step) else {
				continue;
			};
			if config.exceeds(other_cost) {
				continue;
			}

			match visited.key_of(&other) {
				Some(other_key) => {
					let other_node = &visited[other_key];
					if !other_cost.cost_cmp(&other_node.cost()).is_lt() {
						continue;
					}
					let Some(estimate) = other_cost.add_cost(other_node.heuristic()) else {
						continue;
					};
					visited.relax(other_key, current_key, other_cost);
					next.push(HeuristicElement(other_key, other_cost, estimate));
				}
				None => {
					let other_heuristic = heuristic(&other);
					let Some(estimate) = other_cost.add_cost(other_heuristic) else {
						continue;
					};
					let other_key =
						visited.insert(other, Some(current_key), other_cost, other_heuristic);
					next.push(HeuristicElement(other_key, other_cost, estimate));
				}
			}
		}
	}

	re_trace!(
		"a_star: no goal reachable, expanded {} of {} discovered nodes",
		expanded,
		visited.len()
	);
	None
}
