use crate::Cost;

use std::cmp::Ordering;

/// Entry of the Dijkstra frontier: (key of the SearchNode, cost from start)
pub(crate) struct Element<C>(pub usize, pub C);

impl<C: Cost> PartialEq for Element<C> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl<C: Cost> Eq for Element<C> {}
impl<C: Cost> PartialOrd for Element<C> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<C: Cost> Ord for Element<C> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		// BinaryHeap is a max-heap, so the lowest cost has to compare as the greatest
		rhs.1.cost_cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
	}
}

/// Entry of the A* frontier: (key of the SearchNode, cost from start, estimated total cost)
pub(crate) struct HeuristicElement<C>(pub usize, pub C, pub C);

impl<C: Cost> PartialEq for HeuristicElement<C> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl<C: Cost> Eq for HeuristicElement<C> {}
impl<C: Cost> PartialOrd for HeuristicElement<C> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<C: Cost> Ord for HeuristicElement<C> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		// equal estimates: prefer the Node that is further along
		rhs.2
			.cost_cmp(&self.2)
			.then_with(|| self.1.cost_cmp(&rhs.1))
			.then_with(|| rhs.0.cmp(&self.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BinaryHeap;

	#[test]
	fn pops_lowest_cost_first() {
		let mut heap = BinaryHeap::new();
		heap.push(Element(0, 3.0));
		heap.push(Element(1, 1.0));
		heap.push(Element(2, 2.0));

		let order: Vec<usize> =
			std::iter::from_fn(|| heap.pop().map(|Element(key, _)| key)).collect();
		assert_eq!(order, vec![1, 2, 0]);
	}

	#[test]
	fn heuristic_ties_prefer_progress() {
		let mut heap = BinaryHeap::new();
		heap.push(HeuristicElement(0, 1, 5));
		heap.push(HeuristicElement(1, 4, 5));
		heap.push(HeuristicElement(2, 0, 6));

		assert_eq!(heap.pop().map(|e| e.0), Some(1));
		assert_eq!(heap.pop().map(|e| e.0), Some(0));
		assert_eq!(heap.pop().map(|e| e.0), Some(2));
	}
}
