//! The numeric Types that can be used as Costs of a Path

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::Add;

/// A Type that can represent the Cost of traversing an Edge in the Graph.
///
/// Implemented for all primitive integer Types as well as `f32` and `f64`.
///
/// Costs are expected to be non-negative. Negative Costs are not detected, but the searches
/// are no longer guaranteed to return the cheapest Path (or to terminate quickly) if they occur.
///
/// Costs are summed with [`add_cost`](Cost::add_cost). For integer Types, any Path whose total
/// Cost does not fit into the Type is treated as unreachable.
pub trait Cost: Copy + Add<Output = Self> + PartialOrd + Debug + Display {
	/// The Cost of not moving at all
	const ZERO: Self;

	/// A total ordering between two Costs.
	///
	/// For integers this is just [`Ord::cmp`]. Floats use `total_cmp`, which sorts NaN after
	/// every other value.
	fn cost_cmp(&self, other: &Self) -> Ordering;

	/// Adds two Costs, returning `None` if the result is not representable
	fn add_cost(self, other: Self) -> Option<Self>;

	/// Returns the smaller of two Costs according to [`cost_cmp`](Cost::cost_cmp)
	fn min_cost(self, other: Self) -> Self {
		match self.cost_cmp(&other) {
			Ordering::Greater => other,
			_ => self,
		}
	}
}

macro_rules! impl_cost_int {
	($($type:ty),+) => {$(
		impl Cost for $type {
			const ZERO: $type = 0;
			fn cost_cmp(&self, other: &$type) -> Ordering {
				Ord::cmp(self, other)
			}
			fn add_cost(self, other: $type) -> Option<$type> {
				self.checked_add(other)
			}
		}
	)+}
}

macro_rules! impl_cost_float {
	($($type:ty),+) => {$(
		impl Cost for $type {
			const ZERO: $type = 0.0;
			fn cost_cmp(&self, other: &$type) -> Ordering {
				<$type>::total_cmp(self, other)
			}
			fn add_cost(self, other: $type) -> Option<$type> {
				Some(self + other)
			}
		}
	)+}
}

impl_cost_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_cost_float!(f32, f64);
