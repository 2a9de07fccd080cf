#![cfg(feature = "collections")]
//! Unit tests for OrderedMap.

use orderly::collections::{KeyValue, OrderedMap};
use orderly::ordered_map;
use rstest::rstest;

fn keys_of<K: Clone, V>(map: &OrderedMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.iter().next(), None);
}

#[rstest]
fn test_from_array_keeps_first_position_and_last_value() {
    let map = OrderedMap::from([("a", 1), ("b", 2), ("a", 3)]);
    assert_eq!(keys_of(&map), vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&3));
}

#[rstest]
fn test_collect_and_extend() {
    let mut map: OrderedMap<i32, char> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
    map.extend([(3, 'c'), (2, 'B')]);
    assert_eq!(keys_of(&map), vec![2, 1, 3]);
    assert_eq!(map.get(&2), Some(&'B'));
}

// =============================================================================
// Insert, Get, Remove
// =============================================================================

#[rstest]
fn test_update_keeps_position() {
    let mut map = OrderedMap::new();
    map.insert("one", 1);
    map.insert("two", 2);
    map.insert("three", 3);

    assert_eq!(map.insert("one", 100), Some(1));
    assert_eq!(keys_of(&map), vec!["one", "two", "three"]);
    assert_eq!(map.position("one"), Some(0));
    assert_eq!(map.len(), 3);
}

#[rstest]
fn test_get_absent_key_is_none() {
    let map = OrderedMap::from([("a", 1)]);
    assert_eq!(map.get("z"), None);
    assert!(!map.contains_key("z"));
    assert_eq!(map.get_or_default("z"), 0);
    assert_eq!(map.get_or_default("a"), 1);
}

#[rstest]
fn test_get_mut_updates_in_place() {
    let mut map = OrderedMap::from([("hits".to_string(), 1)]);
    if let Some(hits) = map.get_mut("hits") {
        *hits += 1;
    }
    assert_eq!(map.get("hits"), Some(&2));
}

#[rstest]
fn test_remove_preserves_relative_order() {
    let mut map = ordered_map! { 'a' => 1, 'b' => 2, 'c' => 3, 'd' => 4 };
    assert_eq!(map.remove(&'b'), Some(2));
    assert_eq!(keys_of(&map), vec!['a', 'c', 'd']);
    assert_eq!(map.position(&'d'), Some(2));
    assert_eq!(map.remove(&'b'), None);
}

#[rstest]
fn test_remove_entry_returns_stored_key() {
    let mut map = OrderedMap::from([("key".to_string(), 7)]);
    assert_eq!(map.remove_entry("key"), Some(("key".to_string(), 7)));
    assert!(map.is_empty());
}

#[rstest]
fn test_reinserted_key_moves_to_end() {
    let mut map = ordered_map! { 1 => "a", 2 => "b", 3 => "c" };
    map.remove(&1);
    map.insert(1, "A");
    assert_eq!(keys_of(&map), vec![2, 3, 1]);
}

#[rstest]
fn test_retain() {
    let mut map: OrderedMap<i32, i32> = (1..=6).map(|key| (key, key * 10)).collect();
    map.retain(|key, value| {
        *value += 1;
        key % 2 == 0
    });
    let entries: Vec<(i32, i32)> = map.into_iter().collect();
    assert_eq!(entries, vec![(2, 21), (4, 41), (6, 61)]);
}

#[rstest]
fn test_clear() {
    let mut map = ordered_map! { "a" => 1 };
    map.clear();
    assert!(map.is_empty());
    map.insert("b", 2);
    assert_eq!(keys_of(&map), vec!["b"]);
}

// =============================================================================
// Enumeration
// =============================================================================

#[rstest]
fn test_keys_values_and_entries_share_order() {
    let map = ordered_map! { "z" => 26, "a" => 1, "m" => 13 };

    assert_eq!(keys_of(&map), vec!["z", "a", "m"]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![26, 1, 13]);
    assert_eq!(
        map.to_entries(),
        vec![
            KeyValue::new("z", 26),
            KeyValue::new("a", 1),
            KeyValue::new("m", 13),
        ]
    );
}

#[rstest]
fn test_get_index() {
    let map = ordered_map! { "first" => 1, "second" => 2 };
    assert_eq!(map.get_index(1), Some((&"second", &2)));
    assert_eq!(map.get_index(2), None);
}

#[rstest]
fn test_iteration_is_reversible() {
    let map = ordered_map! { 1 => 'a', 2 => 'b', 3 => 'c' };
    let reversed: Vec<(&i32, &char)> = map.iter().rev().collect();
    assert_eq!(reversed, vec![(&3, &'c'), (&2, &'b'), (&1, &'a')]);

    let owned_reversed: Vec<(i32, char)> = map.into_iter().rev().collect();
    assert_eq!(owned_reversed, vec![(3, 'c'), (2, 'b'), (1, 'a')]);
}

#[rstest]
fn test_sort_keys_by() {
    let mut map = ordered_map! { "b" => 2, "c" => 3, "a" => 1 };
    map.sort_keys_by(|left, right| left.cmp(right));
    assert_eq!(keys_of(&map), vec!["a", "b", "c"]);
    assert_eq!(map.get("c"), Some(&3));
}

// =============================================================================
// Equality and Formatting
// =============================================================================

#[rstest]
fn test_equality_is_order_sensitive() {
    let forward = ordered_map! { 1 => "a", 2 => "b" };
    let backward = ordered_map! { 2 => "b", 1 => "a" };
    assert_ne!(forward, backward);
    assert_eq!(forward, ordered_map! { 1 => "a", 2 => "b" });
}

