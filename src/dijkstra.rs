use crate::frontier::Element;
use crate::search_node::{NodeArena, Visit};
use crate::{Cost, Path, SearchConfig};

use std::collections::BinaryHeap;
use std::hash::Hash;

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// until a Node is found that satisfies `is_goal`.
///
/// The Generic type Parameter `N` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, String, a Grid position, ... as long as it can be compared, hashed and cloned.
/// Note that it is advised to choose a short representation for `N`, since it will be cloned several times.
///
/// Since the goal is a predicate and not a Node, this can be used to find the closest Node
/// with a certain property ("the nearest exit", "any Tile within reach of an enemy", ...).
///
/// ## Examples
/// Basic usage:
/// ```
/// # use generic_pathfinding::{dijkstra_search, SearchConfig};
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
///
/// let result = dijkstra_search(
/// 	A, // start
/// 	|&a, &b| cost_matrix[a][b] as usize, // get_cost
/// 	|visit| { // get_all_neighbors
/// 		cost_matrix[*visit.node()]
/// 			.iter()
/// 			.enumerate()
/// 			.filter(|&(_, cost)| *cost != -1)
/// 			.map(|(id, _)| id)
/// 			.collect::<Vec<_>>()
/// 	},
/// 	|visit| *visit.node() == D, // is_goal
/// 	SearchConfig::default(),
/// );
///
/// let path = result.unwrap();
/// assert_eq!(path, vec![A, C, D]);
/// assert_eq!(path.cost(), 7);
/// ```
///
/// If no reachable Node satisfies `is_goal`, None is returned:
/// ```
/// # use generic_pathfinding::{dijkstra_search, SearchConfig};
/// # let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// # let cost_matrix: [[i32; 5]; 5] = [
/// # 	[-1, -1,  1,  9, -1],
/// # 	[-1, -1, -1, -1,  2],
/// # 	[ 1, -1, -1,  6, -1],
/// # 	[ 9, -1,  6, -1, -1],
/// # 	[-1,  2, -1, -1, -1],
/// # ];
/// let result = dijkstra_search(
/// 	A,
/// 	|&a, &b| cost_matrix[a][b] as usize,
/// 	|visit| {
/// 		cost_matrix[*visit.node()]
/// 			.iter()
/// 			.enumerate()
/// 			.filter(|&(_, cost)| *cost != -1)
/// 			.map(|(id, _)| id)
/// 			.collect::<Vec<_>>()
/// 	},
/// 	|visit| *visit.node() == E,
/// 	SearchConfig::default(),
/// );
///
/// assert_eq!(result, None);
/// ```
///
/// ## Obstacles
/// `get_all_neighbors` may return either plain Nodes or `Option`s of Nodes. `None` entries
/// stand for a direction that is blocked and are skipped.
///
/// ## Arguments
/// - `start` - the starting Node
/// - `get_cost` - a Function that takes two adjacent Nodes (a, b) and returns the Cost to go from a to b.
/// 	Must never be negative.
/// - `get_all_neighbors` - a Function that takes the [`Visit`] of a Node and returns all Nodes reachable from it
/// - `is_goal` - a Function that decides if the [`Visit`]ed Node is a goal
/// - `config` - see [`SearchConfig`]. Nodes beyond `max_cost` are never visited.
///
/// ## Returns
/// the cheapest Path to the first Node satisfying `is_goal`, or None if no such Node can be reached.
/// The first Node in the Path is always the `start`. If the `start` itself satisfies `is_goal`,
/// the Path consists only of the `start`.
pub fn dijkstra_search<N, C, I>(
	start: N,
	mut get_cost: impl FnMut(&N, &N) -> C,
	mut get_all_neighbors: impl FnMut(Visit<'_, N, C>) -> I,
	mut is_goal: impl FnMut(Visit<'_, N, C>) -> bool,
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
	let start_key = visited.insert(start, None, C::ZERO, C::ZERO);
	next.push(Element(start_key, C::ZERO));

	while let Some(Element(current_key, current_cost)) = next.pop() {
		if visited.is_closed(current_key) {
			// already expanded through a cheaper entry
			continue;
		}
		visited.close(current_key);

		if is_goal(visited.visit(current_key)) {
			re_trace!(
				"dijkstra: reached goal with cost {} after discovering {} nodes",
				current_cost,
				visited.len()
			);
			return Some(Path::new(visited.path_to(current_key), current_cost));
		}

		for other in get_all_neighbors(visited.visit(current_key)) {
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
					if visited.is_closed(other_key)
						|| !other_cost.cost_cmp(&visited[other_key].cost()).is_lt()
					{
						continue;
					}
					visited.relax(other_key, current_key, other_cost);
					next.push(Element(other_key, other_cost));
				}
				None => {
					let other_key = visited.insert(other, Some(current_key), other_cost, C::ZERO);
					next.push(Element(other_key, other_cost));
				}
			}
		}
	}

	re_trace!(
		"dijkstra: frontier exhausted after discovering {} nodes",
		visited.len()
	);
	None
}
