//! Sequence container capability.
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use crate::Order;

/// A container of individually addressable elements, ordered or not.
///
/// This is one of the two capabilities unified by
/// [`Value`](crate::Value), the other being [`Map`](crate::Map).
/// Implementations are provided for the standard library collections.
pub trait Sequence {
	/// Element type.
	type Item;

	/// Iteration order guaranteed by this container type.
	const ORDER: Order;

	/// Returns the number of elements in the container.
	fn len(&self) -> usize;

	/// Returns `true` if the container holds no element.
	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Removes every element in place.
	fn clear(&mut self);

	/// Inserts `item` at the container's native insertion point.
	///
	/// Returns `true` if the container changed. Positional containers
	/// always change; uniqueness-enforcing containers return `false` when
	/// the item was already present.
	fn add(&mut self, item: Self::Item) -> bool;

	/// Copies the elements out, in the container's native order.
	fn items(&self) -> Vec<Self::Item>
	where
		Self::Item: Clone;
}

impl<T> Sequence for Vec<T> {
	type Item = T;

	const ORDER: Order = Order::Ordered;

	#[inline]
	fn len(&self) -> usize {
		self.len()
	}

	#[inline]
	fn clear(&mut self) {
		self.clear()
	}

	#[inline]
	fn add(&mut self, item: T) -> bool {
		self.push(item);
		true
	}

	#[inline]
	fn items(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.clone()
	}
}

impl<T> Sequence for VecDeque<T> {
	type Item = T;

	const ORDER: Order = Order::Ordered;

	#[inline]
	fn len(&self) -> usize {
		self.len()
	}

	#[inline]
	fn clear(&mut self) {
		self.clear()
	}

	#[inline]
	fn add(&mut self, item: T) -> bool {
		self.push_back(item);
		true
	}

	#[inline]
	fn items(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}
}

impl<T> Sequence for LinkedList<T> {
	type Item = T;

	const ORDER: Order = Order::Ordered;

	#[inline]
	fn len(&self) -> usize {
		self.len()
	}

	#[inline]
	fn clear(&mut self) {
		self.clear()
	}

	#[inline]
	fn add(&mut self, item: T) -> bool {
		self.push_back(item);
		true
	}

	#[inline]
	fn items(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}
}

impl<T: Hash + Eq> Sequence for HashSet<T> {
	type Item = T;

	const ORDER: Order = Order::Unordered;

	#[inline]
	fn len(&self) -> usize {
		self.len()
	}

	#[inline]
	fn clear(&mut self) {
		self.clear()
	}

	#[inline]
	fn add(&mut self, item: T) -> bool {
		self.insert(item)
	}

	#[inline]
	fn items(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}
}

impl<T: Ord> Sequence for BTreeSet<T> {
	type Item = T;

	const ORDER: Order = Order::Sorted;

	#[inline]
	fn len(&self) -> usize {
		self.len()
	}

	#[inline]
	fn clear(&mut self) {
		self.clear()
	}

	#[inline]
	fn add(&mut self, item: T) -> bool {
		self.insert(item)
	}

	#[inline]
	fn items(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}
}

/// The null sequence: always empty, ignores insertions.
///
/// Serves as the default type parameter of [`Value`](crate::Value) for the
/// shapes a caller does not use.
impl Sequence for () {
	type Item = ();

	const ORDER: Order = Order::Unordered;

	#[inline]
	fn len(&self) -> usize {
		0
	}

	#[inline]
	fn clear(&mut self) {}

	#[inline]
	fn add(&mut self, _item: ()) -> bool {
		false
	}

	#[inline]
	fn items(&self) -> Vec<()> {
		Vec::new()
	}
}
