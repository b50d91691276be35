use crate::Cost;

use hashbrown::HashMap;
use std::hash::Hash;

/// The bookkeeping a search keeps for every Node it discovered.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode<N, C> {
	node: N,
	parent: Option<usize>,
	cost: C,
	heuristic: C,
	closed: bool,
}

impl<N, C: Cost> SearchNode<N, C> {
	/// the Node in the Graph
	pub fn node(&self) -> &N {
		&self.node
	}
	/// the Cost of the cheapest known Path from the start to this Node
	pub fn cost(&self) -> C {
		self.cost
	}
	/// the Heuristic computed when the Node was discovered (`ZERO` for Dijkstra)
	pub fn heuristic(&self) -> C {
		self.heuristic
	}
}

/// All SearchNodes of a single search.
///
/// The records live in a Slab, and parent links are Slab keys. The HashMap only resolves
/// a Graph Node to its key.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<N, C> {
	nodes: slab::Slab<SearchNode<N, C>>,
	keys: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash, C: Cost> NodeArena<N, C> {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
			keys: HashMap::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn insert(&mut self, node: N, parent: Option<usize>, cost: C, heuristic: C) -> usize {
		let key = self.nodes.insert(SearchNode {
			node: node.clone(),
			parent,
			cost,
			heuristic,
			closed: false,
		});
		self.keys.insert(node, key);
		key
	}

	pub fn key_of(&self, node: &N) -> Option<usize> {
		self.keys.get(node).copied()
	}

	/// Records a cheaper way of reaching `key` through `parent`
	pub fn relax(&mut self, key: usize, parent: usize, cost: C) {
		let node = &mut self.nodes[key];
		node.cost = cost;
		node.parent = Some(parent);
	}

	pub fn close(&mut self, key: usize) {
		self.nodes[key].closed = true;
	}

	pub fn is_closed(&self, key: usize) -> bool {
		self.nodes[key].closed
	}

	/// Collects the Nodes from the root of the search to `key`
	pub fn path_to(&self, key: usize) -> Vec<N> {
		let mut steps = vec![];
		let mut current = Some(key);

		while let Some(key) = current {
			let node = &self.nodes[key];
			steps.push(node.node.clone());
			current = node.parent;
		}
		steps.reverse();
		steps
	}

	pub fn visit(&self, key: usize) -> Visit<'_, N, C> {
		Visit { arena: self, key }
	}
}

use std::ops::Index;
impl<N, C> Index<usize> for NodeArena<N, C> {
	type Output = SearchNode<N, C>;
	#[track_caller]
	fn index(&self, key: usize) -> &SearchNode<N, C> {
		&self.nodes[key]
	}
}

/// A read-only view of a Node during a search, handed to the callbacks of
/// [`dijkstra_search`](crate::dijkstra_search).
///
/// Besides the Node itself it gives access to the Cost it took to get there and the
/// chain of Nodes it was reached through.
#[derive(Debug)]
pub struct Visit<'a, N, C> {
	arena: &'a NodeArena<N, C>,
	key: usize,
}

impl<N, C> Clone for Visit<'_, N, C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<N, C> Copy for Visit<'_, N, C> {}

impl<'a, N: Clone + Eq + Hash, C: Cost> Visit<'a, N, C> {
	/// the visited Node
	pub fn node(&self) -> &'a N {
		&self.arena.nodes[self.key].node
	}

	/// the Cost of the cheapest Path from the start to this Node
	pub fn cost(&self) -> C {
		self.arena.nodes[self.key].cost
	}

	/// the Node this Node was reached from, or `None` for the start
	pub fn parent(&self) -> Option<Visit<'a, N, C>> {
		self.arena.nodes[self.key].parent.map(|key| Visit {
			arena: self.arena,
			key,
		})
	}

	/// the number of steps between the start and this Node
	pub fn depth(&self) -> usize {
		let mut depth = 0;
		let mut current = self.parent();
		while let Some(visit) = current {
			depth += 1;
			current = visit.parent();
		}
		depth
	}

	/// the Path from the start to this Node
	pub fn path(&self) -> Vec<N> {
		self.arena.path_to(self.key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_to() {
		let mut arena = NodeArena::with_capacity(4);
		let a = arena.insert('a', None, 0, 0);
		let b = arena.insert('b', Some(a), 2, 0);
		let c = arena.insert('c', Some(b), 3, 0);
		let d = arena.insert('d', Some(a), 1, 0);

		assert_eq!(arena.path_to(c), vec!['a', 'b', 'c']);
		assert_eq!(arena.path_to(a), vec!['a']);

		arena.relax(c, d, 2);
		assert_eq!(arena.path_to(c), vec!['a', 'd', 'c']);
		assert_eq!(arena[c].cost(), 2);
		assert_eq!(arena.key_of(&'c'), Some(c));
		assert_eq!(arena.key_of(&'x'), None);
	}

	#[test]
	fn visit() {
		let mut arena = NodeArena::with_capacity(4);
		let a = arena.insert("start", None, 0.0, 0.0);
		let b = arena.insert("middle", Some(a), 1.5, 0.0);
		let c = arena.insert("end", Some(b), 2.5, 0.0);

		let visit = arena.visit(c);
		assert_eq!(*visit.node(), "end");
		assert_eq!(visit.cost(), 2.5);
		assert_eq!(visit.depth(), 2);
		assert_eq!(visit.parent().map(|p| *p.node()), Some("middle"));
		assert_eq!(visit.path(), vec!["start", "middle", "end"]);
		assert!(arena.visit(a).parent().is_none());
	}

	#[test]
	fn close() {
		let mut arena = NodeArena::with_capacity(1);
		let a = arena.insert((0, 0), None, 3, 4);
		assert_eq!(arena[a].heuristic(), 4);
		assert!(!arena.is_closed(a));
		arena.close(a);
		assert!(arena.is_closed(a));
	}
}
