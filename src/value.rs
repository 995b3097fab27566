//! The unified container surface.
use std::any::Any;

use crate::{ContainerError, Map, Order, Result, Sequence};

/// Shape of a container value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
	/// Sequence container: elements, possibly ordered.
	Sequence,

	/// Map container: key/value entries with unique keys.
	Map,
}

/// One element of a container, in the shared vocabulary of both shapes.
///
/// Sequences hold [`Item`](Element::Item)s; maps hold
/// [`Entry`](Element::Entry)s. A sequence of pairs is an `Item((k, v))`,
/// not an `Entry(k, v)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element<T, K, V> {
	/// A plain sequence element.
	Item(T),

	/// A key/value entry of a map.
	Entry(K, V),
}

/// A borrowed runtime value, classified once at this boundary as a
/// sequence container, a map container, or neither.
///
/// `Value` is the imaginary common super type of sequences and maps: the
/// two shapes share no trait in the standard library, yet most of their
/// operations coincide. Wrapping a container here gives one API for both,
/// with a map seen as a collection of its entries.
///
/// The unused shape parameter defaults to the null container `()`, so a
/// caller holding only one shape names only that one.
///
/// # Example
///
/// ```
/// use any_container::{Element, Value};
///
/// let mut numbers = vec![1, 2];
/// let mut value: Value<Vec<i32>> = Value::sequence(&mut numbers);
///
/// assert!(value.is_sequence());
/// assert_eq!(value.len()?, 2);
/// value.add_element(Element::Item(3))?;
/// assert_eq!(numbers, vec![1, 2, 3]);
/// # Ok::<(), any_container::ContainerError>(())
/// ```
///
/// Operations requiring a container fail on anything else:
///
/// ```
/// use any_container::{ContainerError, Value};
///
/// let value: Value = Value::opaque(&12);
/// assert!(!value.is_container());
/// assert_eq!(value.len(), Err(ContainerError::InvalidArgument));
/// ```
pub enum Value<'a, S = (), M = ()> {
	/// A borrowed sequence container.
	Sequence(&'a mut S),

	/// A borrowed map container.
	Map(&'a mut M),

	/// Any other runtime value; not a container.
	Opaque(&'a dyn Any),
}

impl<'a, S, M> Value<'a, S, M> {
	/// Wraps a sequence container.
	#[inline]
	pub fn sequence(container: &'a mut S) -> Self {
		Value::Sequence(container)
	}

	/// Wraps a map container.
	#[inline]
	pub fn map(container: &'a mut M) -> Self {
		Value::Map(container)
	}

	/// Wraps a value that is not a container.
	#[inline]
	pub fn opaque(value: &'a dyn Any) -> Self {
		Value::Opaque(value)
	}

	/// Returns the borrowed sequence, or `None` for any other shape.
	#[inline]
	pub fn as_sequence(&mut self) -> Option<&mut S> {
		match self {
			Value::Sequence(seq) => Some(&mut **seq),
			_ => None,
		}
	}

	/// Returns the borrowed map, or `None` for any other shape.
	#[inline]
	pub fn as_map(&mut self) -> Option<&mut M> {
		match self {
			Value::Map(map) => Some(&mut **map),
			_ => None,
		}
	}
}

impl<'a, S: Sequence, M: Map> Value<'a, S, M> {
	/// Returns the shape of the value, or `None` if it is not a container.
	#[inline]
	pub fn shape(&self) -> Option<Shape> {
		match self {
			Value::Sequence(_) => Some(Shape::Sequence),
			Value::Map(_) => Some(Shape::Map),
			Value::Opaque(_) => None,
		}
	}

	/// Returns the iteration order guaranteed by the container's type, or
	/// `None` if the value is not a container.
	#[inline]
	pub fn order(&self) -> Option<Order> {
		match self {
			Value::Sequence(_) => Some(S::ORDER),
			Value::Map(_) => Some(M::ORDER),
			Value::Opaque(_) => None,
		}
	}

	/// Returns `true` if the value is a container of either shape.
	#[inline]
	pub fn is_container(&self) -> bool {
		self.shape().is_some()
	}

	/// Returns `true` if the value is a sequence container.
	#[inline]
	pub fn is_sequence(&self) -> bool {
		self.shape() == Some(Shape::Sequence)
	}

	/// Returns `true` if the value is a map container.
	#[inline]
	pub fn is_map(&self) -> bool {
		self.shape() == Some(Shape::Map)
	}

	/// Returns `true` if iteration order is deterministic and meaningful,
	/// either insertion order or a total order.
	///
	/// # Example
	///
	/// ```
	/// use std::collections::{BTreeSet, HashSet};
	/// use any_container::Value;
	///
	/// let mut sorted = BTreeSet::from([1, 2, 3]);
	/// let value: Value<BTreeSet<i32>> = Value::sequence(&mut sorted);
	/// assert!(value.is_indexed());
	///
	/// let mut hashed = HashSet::from([1, 2, 3]);
	/// let value: Value<HashSet<i32>> = Value::sequence(&mut hashed);
	/// assert!(!value.is_indexed());
	/// ```
	#[inline]
	pub fn is_indexed(&self) -> bool {
		self.order().is_some_and(Order::is_indexed)
	}

	/// Returns `true` if the container preserves insertion order.
	#[inline]
	pub fn is_ordered(&self) -> bool {
		self.order().is_some_and(Order::is_ordered)
	}

	/// Returns `true` if the container maintains its elements or keys in a
	/// total order.
	#[inline]
	pub fn is_sorted(&self) -> bool {
		self.order().is_some_and(Order::is_sorted)
	}

	/// Returns `true` if the container holds no element.
	///
	/// Fails with [`ContainerError::InvalidArgument`] if the value is not
	/// a container.
	#[inline]
	pub fn is_empty(&self) -> Result<bool> {
		match self {
			Value::Sequence(seq) => Ok(seq.is_empty()),
			Value::Map(map) => Ok(map.is_empty()),
			Value::Opaque(_) => Err(ContainerError::InvalidArgument),
		}
	}

	/// Returns the number of elements in the container; for a map, the
	/// number of key/value entries.
	///
	/// Fails with [`ContainerError::InvalidArgument`] if the value is not
	/// a container.
	///
	/// # Example
	///
	/// ```
	/// use std::collections::HashMap;
	/// use any_container::Value;
	///
	/// let mut scores = HashMap::from([("a", 1), ("b", 2)]);
	/// let value: Value<(), HashMap<&str, i32>> = Value::map(&mut scores);
	/// assert_eq!(value.len()?, 2);
	/// # Ok::<(), any_container::ContainerError>(())
	/// ```
	#[inline]
	pub fn len(&self) -> Result<usize> {
		match self {
			Value::Sequence(seq) => Ok(seq.len()),
			Value::Map(map) => Ok(map.len()),
			Value::Opaque(_) => Err(ContainerError::InvalidArgument),
		}
	}

	/// Copies the elements out, in the container's native order.
	///
	/// A sequence yields its items as [`Element::Item`]; a map yields its
	/// entries as [`Element::Entry`] in its native iteration order. The
	/// returned vector is a copy: mutating it never affects the source
	/// container.
	///
	/// Fails with [`ContainerError::InvalidArgument`] if the value is not
	/// a container.
	pub fn elements(&self) -> Result<Vec<Element<S::Item, M::Key, M::Value>>>
	where
		S::Item: Clone,
		M::Key: Clone,
		M::Value: Clone,
	{
		match self {
			Value::Sequence(seq) => Ok(seq.items().into_iter().map(Element::Item).collect()),
			Value::Map(map) => Ok(map
				.entries()
				.into_iter()
				.map(|(k, v)| Element::Entry(k, v))
				.collect()),
			Value::Opaque(_) => Err(ContainerError::InvalidArgument),
		}
	}

	/// Removes every element or entry in place.
	///
	/// Fails with [`ContainerError::InvalidArgument`] if the value is not
	/// a container.
	#[inline]
	pub fn clear(&mut self) -> Result<()> {
		match self {
			Value::Sequence(seq) => {
				seq.clear();
				Ok(())
			}
			Value::Map(map) => {
				map.clear();
				Ok(())
			}
			Value::Opaque(_) => Err(ContainerError::InvalidArgument),
		}
	}

	/// Inserts one element, returning `true` if the container changed.
	///
	/// On a sequence, [`Element::Item`] is inserted at the container's
	/// native insertion point and the container's own changed report is
	/// returned (always `true` for positional containers, `false` for a
	/// set that already held the item).
	///
	/// On a map, [`Element::Entry`] stores the value under the key,
	/// replacing any prior value. The call returns `true` iff the stored
	/// value differs from what the key held before: a fresh key always
	/// reports `true`, re-storing an equal value reports `false`.
	///
	/// Fails with [`ContainerError::InvalidArgument`] if the value is not
	/// a container, and with [`ContainerError::TypeMismatch`] if the
	/// element kind does not match the container shape.
	///
	/// # Example
	///
	/// ```
	/// use std::collections::HashMap;
	/// use any_container::{Element, Value};
	///
	/// let mut scores: HashMap<&str, i32> = HashMap::new();
	/// let mut value: Value<(), HashMap<&str, i32>> = Value::map(&mut scores);
	///
	/// assert!(value.add_element(Element::Entry("a", 1))?);
	/// assert!(!value.add_element(Element::Entry("a", 1))?);
	/// assert!(value.add_element(Element::Entry("a", 2))?);
	/// # Ok::<(), any_container::ContainerError>(())
	/// ```
	pub fn add_element(&mut self, element: Element<S::Item, M::Key, M::Value>) -> Result<bool>
	where
		M::Value: PartialEq,
	{
		match self {
			Value::Sequence(seq) => match element {
				Element::Item(item) => Ok(seq.add(item)),
				Element::Entry(..) => Err(ContainerError::TypeMismatch),
			},
			Value::Map(map) => match element {
				Element::Entry(key, value) => {
					let changed = map.get(&key) != Some(&value);
					map.put(key, value);
					Ok(changed)
				}
				Element::Item(_) => Err(ContainerError::TypeMismatch),
			},
			Value::Opaque(_) => Err(ContainerError::InvalidArgument),
		}
	}

	/// Inserts every element of `elements` in iteration order.
	///
	/// A `false` changed report does not stop the iteration; only a failed
	/// insertion does, and its error is returned.
	pub fn add_elements<I>(&mut self, elements: I) -> Result<()>
	where
		I: IntoIterator<Item = Element<S::Item, M::Key, M::Value>>,
		M::Value: PartialEq,
	{
		for element in elements {
			self.add_element(element)?;
		}

		Ok(())
	}

	/// Replaces the container's contents with `elements`.
	///
	/// Equivalent to [`clear`](Value::clear) followed by
	/// [`add_elements`](Value::add_elements). Not atomic: if an insertion
	/// fails partway, the container is left cleared with the preceding
	/// elements inserted.
	///
	/// # Example
	///
	/// ```
	/// use any_container::{Element, Value};
	///
	/// let mut numbers = vec![9, 9];
	/// let mut value: Value<Vec<i32>> = Value::sequence(&mut numbers);
	/// value.set_elements([1, 2, 3].map(Element::Item))?;
	/// assert_eq!(numbers, vec![1, 2, 3]);
	/// # Ok::<(), any_container::ContainerError>(())
	/// ```
	pub fn set_elements<I>(&mut self, elements: I) -> Result<()>
	where
		I: IntoIterator<Item = Element<S::Item, M::Key, M::Value>>,
		M::Value: PartialEq,
	{
		self.clear()?;
		self.add_elements(elements)
	}
}
