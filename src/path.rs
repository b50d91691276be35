use crate::Cost;

/// A Path found by one of the searches
///
/// Stores the sequence of Nodes from the start to the goal (both inclusive) and the total
/// Cost of traversing them.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, C> {
	path: Vec<N>,
	cost: C,
}

impl<N, C: Cost> Path<N, C> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use generic_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path.cost(), 42);
	/// ```
	pub fn new(path: Vec<N>, cost: C) -> Path<N, C> {
		Path { path, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> C {
		self.cost
	}

	/// the number of Nodes in the Path, including start and goal
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path contains no Nodes at all
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// The first Node of the Path
	pub fn start(&self) -> Option<&N> {
		self.path.first()
	}

	/// The last Node of the Path, which is the goal that was reached
	pub fn goal(&self) -> Option<&N> {
		self.path.last()
	}

	/// Returns an Iterator over the Nodes of the Path, from start to goal
	pub fn iter(&self) -> std::slice::Iter<'_, N> {
		self.path.iter()
	}

	/// Consumes the Path and returns the Nodes as a `Vec`
	pub fn into_vec(self) -> Vec<N> {
		self.path
	}
}

impl<N, C> IntoIterator for Path<N, C> {
	type Item = N;
	type IntoIter = std::vec::IntoIter<N>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl<'a, N, C> IntoIterator for &'a Path<N, C> {
	type Item = &'a N;
	type IntoIter = std::slice::Iter<'a, N>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

use std::ops::{Deref, Index};

impl<N, C> Index<usize> for Path<N, C> {
	type Output = N;
	fn index(&self, index: usize) -> &N {
		&self.path[index]
	}
}

impl<N, C> Deref for Path<N, C> {
	type Target = [N];
	fn deref(&self) -> &[N] {
		&self.path
	}
}

impl<N: PartialEq, C: PartialEq> PartialEq<Vec<N>> for Path<N, C> {
	fn eq(&self, rhs: &Vec<N>) -> bool {
		&self.path == rhs
	}
}

use std::cmp::Ordering;

impl<N: PartialEq, C: Cost> PartialOrd for Path<N, C> {
	fn partial_cmp(&self, other: &Path<N, C>) -> Option<Ordering> {
		Some(self.cost.cost_cmp(&other.cost))
	}
}

use std::fmt;
impl<N: fmt::Display, C: fmt::Display> fmt::Display for Path<N, C> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn index() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
		assert_eq!(path.start(), Some(&4));
		assert_eq!(path.goal(), Some(&0));
	}

	#[test]
	fn display() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::<i32>::new(), 0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn ordered_by_cost() {
		let short = Path::new(vec!['a', 'b'], 1.5);
		let long = Path::new(vec!['a'], 3.0);

		assert!(short < long);
	}
}
