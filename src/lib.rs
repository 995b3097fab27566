//! One adapter API over sequence and map containers.
//!
//! The standard library gives sequences and maps no common super trait,
//! yet emptiness, size, iteration, clearing and insertion exist on both.
//! This crate unifies the two shapes behind [`Value`], a tagged union
//! resolved once at the call boundary, with a map seen as a collection of
//! its [`Element::Entry`] entries.
//!
//! ```
//! use std::collections::BTreeMap;
//! use any_container::{Element, Value};
//!
//! let mut scores: BTreeMap<&str, u32> = BTreeMap::new();
//! let mut value: Value<(), BTreeMap<&str, u32>> = Value::map(&mut scores);
//!
//! value.add_element(Element::Entry("a", 1))?;
//! assert_eq!(value.len()?, 1);
//! assert!(value.is_sorted());
//! # Ok::<(), any_container::ContainerError>(())
//! ```
pub mod error;
pub mod map;
pub mod order;
pub mod sequence;
pub mod value;

pub use error::{ContainerError, Result};
pub use map::Map;
pub use order::Order;
pub use sequence::Sequence;
pub use value::{Element, Shape, Value};
