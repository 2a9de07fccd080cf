#![cfg(feature = "collections")]
//! Unit tests for Counter.

use orderly::collections::Counter;
use rstest::rstest;

#[rstest]
fn test_new_counter_is_empty() {
    let counter: Counter<i32> = Counter::new();
    assert!(counter.is_empty());
    assert_eq!(counter.total(), 0);
    assert_eq!(counter.get(&1), 0);
}

#[rstest]
#[case("hello", 'l', 2)]
#[case("hello", 'h', 1)]
#[case("hello", 'z', 0)]
#[case("", 'a', 0)]
fn test_from_chars_counts(#[case] text: &str, #[case] character: char, #[case] expected: u64) {
    let counter = Counter::from_chars(text);
    assert_eq!(counter.get(&character), expected);
}

#[rstest]
fn test_add_and_add_all() {
    let mut counter = Counter::new();
    counter.add("apple");
    counter.add_all(["apple", "pear", "apple"]);

    assert_eq!(counter.get("apple"), 3);
    assert_eq!(counter.get("pear"), 1);
    assert_eq!(counter.len(), 2);
    assert_eq!(counter.total(), 4);
}

#[rstest]
fn test_remove_forgets_element() {
    let mut counter = Counter::from_chars("banana");
    assert_eq!(counter.remove(&'a'), 3);
    assert_eq!(counter.get(&'a'), 0);
    assert!(!counter.contains(&'a'));
    assert_eq!(counter.remove(&'q'), 0);
    assert_eq!(counter.len(), 2);
}

#[rstest]
fn test_contains_all() {
    let counter = Counter::from(["x", "y"]);
    assert!(counter.contains_all(&["x", "y"]));
    assert!(!counter.contains_all(&["x", "w"]));
}

#[rstest]
fn test_most_common_orders_by_count() {
    let counter = Counter::from_chars("mississippi");
    let top = counter.most_common(2);
    let counts: Vec<u64> = top.iter().map(|(_, count)| *count).collect();
    assert_eq!(counts, vec![4, 4]);

    let mut characters: Vec<char> = top.iter().map(|(character, _)| **character).collect();
    characters.sort_unstable();
    assert_eq!(characters, vec!['i', 's']);

    assert_eq!(counter.most_common(4)[2..], [(&'p', 2), (&'m', 1)]);
}

#[rstest]
fn test_to_vec_lists_distinct_elements() {
    let counter = Counter::from([3, 1, 3, 2]);
    let mut elements = counter.to_vec();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_equality_compares_counts() {
    assert_eq!(Counter::from_chars("abca"), Counter::from_chars("aacb"));
    assert_ne!(Counter::from_chars("ab"), Counter::from_chars("abb"));
}

#[rstest]
fn test_clear() {
    let mut counter = Counter::from_chars("abc");
    counter.clear();
    assert!(counter.is_empty());
}

#[rstest]
fn test_iter_yields_counts() {
    let counter = Counter::from(['a', 'a', 'b']);
    let mut entries: Vec<(char, u64)> = counter.iter().map(|(key, count)| (*key, *count)).collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![('a', 2), ('b', 1)]);
}
