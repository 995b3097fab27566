/// Iteration order guaranteed by a container type.
///
/// Every [`Sequence`](crate::Sequence) and [`Map`](crate::Map) implementation
/// reports its order through the associated `ORDER` constant. The adapter's
/// order predicates are defined over this report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
	/// Iteration order is arbitrary and may change between runs.
	Unordered,

	/// Elements are iterated in insertion order.
	Ordered,

	/// Elements are iterated in a total order over items or keys.
	Sorted,
}

impl Order {
	/// Returns `true` if iteration order is deterministic and meaningful,
	/// that is if the container is either ordered or sorted.
	///
	/// # Example
	///
	/// ```
	/// use any_container::Order;
	///
	/// assert!(Order::Ordered.is_indexed());
	/// assert!(Order::Sorted.is_indexed());
	/// assert!(!Order::Unordered.is_indexed());
	/// ```
	#[inline]
	pub fn is_indexed(self) -> bool {
		!matches!(self, Order::Unordered)
	}

	/// Returns `true` for insertion-order containers.
	#[inline]
	pub fn is_ordered(self) -> bool {
		matches!(self, Order::Ordered)
	}

	/// Returns `true` for containers maintaining a total order.
	#[inline]
	pub fn is_sorted(self) -> bool {
		matches!(self, Order::Sorted)
	}
}
