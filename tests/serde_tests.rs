#![cfg(all(feature = "serde", feature = "collections"))]

//! Integration tests for serde support.
//!
//! Ordered collections serialize in canonical order and restore that order
//! on deserialization.

use orderly::collections::{Counter, KeyValue, OrderedMap, OrderedSet, Set, Stack};
use rstest::rstest;

// =============================================================================
// OrderedSet
// =============================================================================

#[rstest]
fn test_ordered_set_serializes_in_order() {
    let set = OrderedSet::from([3, 1, 2]);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");
}

#[rstest]
fn test_ordered_set_deserialization_drops_duplicates() {
    let set: OrderedSet<String> = serde_json::from_str(r#"["b","a","b","c"]"#).unwrap();
    assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
}

#[rstest]
fn test_ordered_set_json_roundtrip() {
    let set = OrderedSet::from(["z".to_string(), "y".to_string()]);
    let json = serde_json::to_string(&set).unwrap();
    let restored: OrderedSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_ordered_set_rejects_non_sequence() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}

// =============================================================================
// OrderedMap
// =============================================================================

#[rstest]
fn test_ordered_map_serializes_in_key_order() {
    let map = OrderedMap::from([("zeta", 1), ("alpha", 2)]);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"zeta":1,"alpha":2}"#);
}

#[rstest]
fn test_ordered_map_deserialization_keeps_document_order() {
    let map: OrderedMap<String, i32> = serde_json::from_str(r#"{"c":3,"a":1,"b":2}"#).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[rstest]
fn test_key_value_json_shape() {
    let pair = KeyValue::new("k".to_string(), 1);
    assert_eq!(serde_json::to_string(&pair).unwrap(), r#"{"key":"k","value":1}"#);
}

// =============================================================================
// Unordered Collections
// =============================================================================

#[rstest]
fn test_set_json_roundtrip() {
    let set = Set::from([1, 2, 3]);
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_counter_json_roundtrip() {
    let counter = Counter::from(["a".to_string(), "a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&counter).unwrap();
    let restored: Counter<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get("a"), 2);
    assert_eq!(counter, restored);
}

#[rstest]
fn test_stack_serializes_bottom_first() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(serde_json::to_string(&stack).unwrap(), "[1,2]");

    let mut restored: Stack<i32> = serde_json::from_str("[1,2]").unwrap();
    assert_eq!(restored.pop(), Some(2));
}
