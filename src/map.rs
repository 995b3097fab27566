//! Map container capability.
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

#[cfg(feature = "indexmap")]
use indexmap::IndexMap;

use crate::Order;

/// A container of key/value entries with unique keys.
///
/// The adapter views a map as a collection of entries, so the operations
/// here mirror [`Sequence`](crate::Sequence) with entries in place of
/// items. Implementations are provided for [`HashMap`], [`BTreeMap`] and,
/// behind the `indexmap` feature, [`IndexMap`] (the insertion-order
/// preserving map).
pub trait Map {
	/// Key type.
	type Key;

	/// Value type.
	type Value;

	/// Iteration order guaranteed by this container type.
	const ORDER: Order;

	/// Returns the number of entries in the map.
	fn len(&self) -> usize;

	/// Returns `true` if the map holds no entry.
	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Removes every entry in place.
	fn clear(&mut self);

	/// Returns the value currently stored under `key`.
	fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

	/// Stores `value` under `key`, returning the replaced value if the key
	/// was present.
	fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

	/// Copies the entries out, in the map's native iteration order.
	fn entries(&self) -> Vec<(Self::Key, Self::Value)>
	where
		Self::Key: Clone,
		Self::Value: Clone;
}

impl<K: Hash + Eq, V> Map for HashMap<K, V> {
	type Key = K;
	type Value = V;

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
	fn get(&self, key: &K) -> Option<&V> {
		self.get(key)
	}

	#[inline]
	fn put(&mut self, key: K, value: V) -> Option<V> {
		self.insert(key, value)
	}

	#[inline]
	fn entries(&self) -> Vec<(K, V)>
	where
		K: Clone,
		V: Clone,
	{
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}

impl<K: Ord, V> Map for BTreeMap<K, V> {
	type Key = K;
	type Value = V;

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
	fn get(&self, key: &K) -> Option<&V> {
		self.get(key)
	}

	#[inline]
	fn put(&mut self, key: K, value: V) -> Option<V> {
		self.insert(key, value)
	}

	#[inline]
	fn entries(&self) -> Vec<(K, V)>
	where
		K: Clone,
		V: Clone,
	{
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}

#[cfg(feature = "indexmap")]
impl<K: Hash + Eq, V> Map for IndexMap<K, V> {
	type Key = K;
	type Value = V;

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
	fn get(&self, key: &K) -> Option<&V> {
		self.get(key)
	}

	#[inline]
	fn put(&mut self, key: K, value: V) -> Option<V> {
		self.insert(key, value)
	}

	#[inline]
	fn entries(&self) -> Vec<(K, V)>
	where
		K: Clone,
		V: Clone,
	{
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}

/// The null map: always empty, ignores insertions.
impl Map for () {
	type Key = ();
	type Value = ();

	const ORDER: Order = Order::Unordered;

	#[inline]
	fn len(&self) -> usize {
		0
	}

	#[inline]
	fn clear(&mut self) {}

	#[inline]
	fn get(&self, _key: &()) -> Option<&()> {
		None
	}

	#[inline]
	fn put(&mut self, _key: (), _value: ()) -> Option<()> {
		None
	}

	#[inline]
	fn entries(&self) -> Vec<((), ())> {
		Vec::new()
	}
}
