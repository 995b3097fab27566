use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use any_container::{ContainerError, Order, Shape, Value};
use indexmap::IndexMap;

#[test]
pub fn sequence_shape() {
	let mut numbers = vec![1, 2, 3];
	let value: Value<Vec<i32>> = Value::sequence(&mut numbers);

	assert!(value.is_container());
	assert!(value.is_sequence());
	assert!(!value.is_map());
	assert_eq!(value.shape(), Some(Shape::Sequence));
}

#[test]
pub fn map_shape() {
	let mut scores: HashMap<&str, i32> = HashMap::from([("a", 1)]);
	let value: Value<(), HashMap<&str, i32>> = Value::map(&mut scores);

	assert!(value.is_container());
	assert!(value.is_map());
	assert!(!value.is_sequence());
	assert_eq!(value.shape(), Some(Shape::Map));
}

#[test]
pub fn opaque_is_not_a_container() {
	let mut value: Value = Value::opaque(&12);

	assert!(!value.is_container());
	assert!(!value.is_sequence());
	assert!(!value.is_map());
	assert!(!value.is_indexed());
	assert!(!value.is_ordered());
	assert!(!value.is_sorted());
	assert_eq!(value.shape(), None);
	assert_eq!(value.order(), None);

	assert_eq!(value.len(), Err(ContainerError::InvalidArgument));
	assert_eq!(value.is_empty(), Err(ContainerError::InvalidArgument));
	assert_eq!(value.elements(), Err(ContainerError::InvalidArgument));
	assert_eq!(value.clear(), Err(ContainerError::InvalidArgument));
}

#[test]
pub fn sequence_order_reports() {
	let mut positional = vec![1];
	let value: Value<Vec<i32>> = Value::sequence(&mut positional);
	assert!(value.is_ordered());
	assert!(value.is_indexed());
	assert!(!value.is_sorted());

	let mut deque: VecDeque<i32> = VecDeque::new();
	let value: Value<VecDeque<i32>> = Value::sequence(&mut deque);
	assert_eq!(value.order(), Some(Order::Ordered));

	let mut list: LinkedList<i32> = LinkedList::new();
	let value: Value<LinkedList<i32>> = Value::sequence(&mut list);
	assert_eq!(value.order(), Some(Order::Ordered));

	let mut sorted = BTreeSet::from([1, 2, 3]);
	let value: Value<BTreeSet<i32>> = Value::sequence(&mut sorted);
	assert!(value.is_sorted());
	assert!(value.is_indexed());
	assert!(!value.is_ordered());

	let mut hashed = HashSet::from([1, 2, 3]);
	let value: Value<HashSet<i32>> = Value::sequence(&mut hashed);
	assert!(!value.is_sorted());
	assert!(!value.is_indexed());
	assert!(!value.is_ordered());
}

#[test]
pub fn map_order_reports() {
	let mut sorted: BTreeMap<i32, i32> = BTreeMap::new();
	let value: Value<(), BTreeMap<i32, i32>> = Value::map(&mut sorted);
	assert!(value.is_sorted());
	assert!(value.is_indexed());

	let mut hashed: HashMap<i32, i32> = HashMap::new();
	let value: Value<(), HashMap<i32, i32>> = Value::map(&mut hashed);
	assert!(!value.is_indexed());

	let mut insertion: IndexMap<i32, i32> = IndexMap::new();
	let value: Value<(), IndexMap<i32, i32>> = Value::map(&mut insertion);
	assert!(value.is_ordered());
	assert!(value.is_indexed());
	assert!(!value.is_sorted());
}

#[test]
pub fn len_and_is_empty() {
	let mut numbers = vec![1, 2, 3];
	let value: Value<Vec<i32>> = Value::sequence(&mut numbers);
	assert_eq!(value.len(), Ok(3));
	assert_eq!(value.is_empty(), Ok(false));

	let mut scores: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
	let value: Value<(), HashMap<&str, i32>> = Value::map(&mut scores);
	assert_eq!(value.len(), Ok(2));
	assert_eq!(value.is_empty(), Ok(false));

	let mut empty: Vec<i32> = Vec::new();
	let value: Value<Vec<i32>> = Value::sequence(&mut empty);
	assert_eq!(value.is_empty(), Ok(true));
}

#[test]
pub fn clear_is_idempotent() {
	let mut numbers = vec![1, 2, 3];
	let mut value: Value<Vec<i32>> = Value::sequence(&mut numbers);

	value.clear().unwrap();
	assert_eq!(value.len(), Ok(0));
	assert_eq!(value.is_empty(), Ok(true));

	value.clear().unwrap();
	assert_eq!(value.len(), Ok(0));
	assert_eq!(value.is_empty(), Ok(true));
}

#[test]
pub fn shape_accessors() {
	let mut numbers = vec![1, 2];
	let mut value: Value<Vec<i32>> = Value::sequence(&mut numbers);
	assert!(value.as_map().is_none());
	value.as_sequence().unwrap().push(3);
	assert_eq!(numbers, vec![1, 2, 3]);

	let mut scores: HashMap<&str, i32> = HashMap::new();
	let mut value: Value<(), HashMap<&str, i32>> = Value::map(&mut scores);
	assert!(value.as_sequence().is_none());
	value.as_map().unwrap().insert("a", 1);
	assert_eq!(scores.get("a"), Some(&1));
}
