//! Hash-indexed collections.
//!
//! This module provides:
//!
//! - [`OrderedSet`]: A set that remembers insertion order
//! - [`Set`]: A set with no defined order
//! - [`OrderedMap`]: A map that remembers key insertion order
//! - [`Counter`]: Occurrence counts of elements
//! - [`Stack`]: A LIFO stack
//!
//! `OrderedSet` and `OrderedMap` share one representation: a hash index
//! for membership next to a sequence recording order. Every mutating
//! operation keeps the two describing exactly the same keys, so lookups are
//! O(1) on average while iteration follows the sequence.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{ordered_map, ordered_set};
//!
//! let mut languages = ordered_set!["rust", "go", "rust", "zig"];
//! assert_eq!(languages.as_slice(), &["rust", "go", "zig"]);
//!
//! languages.remove("go");
//! assert_eq!(languages.to_string(), "{rust, zig}");
//!
//! let ports = ordered_map! { "http" => 80, "https" => 443 };
//! assert_eq!(ports.keys().collect::<Vec<_>>(), vec![&"http", &"https"]);
//! ```

mod counter;
mod index_sequence;
mod ordered_map;
mod ordered_set;
mod set;
mod stack;

pub use counter::Counter;
pub use ordered_map::{KeyValue, OrderedMap, OrderedMapIntoIterator};
pub use ordered_set::{OrderedSet, OrderedSetIntoIterator, OrderedSetIterator};
pub use set::{Set, SetIntoIterator, SetIterator};
pub use stack::Stack;

static_assertions::assert_impl_all!(OrderedSet<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(OrderedMap<String, i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Counter<char>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Stack<i32>: Clone, Default, Send, Sync);

/// Creates an [`OrderedSet`] containing the given elements.
///
/// Duplicates are dropped; the first occurrence fixes the position.
///
/// # Examples
///
/// ```rust
/// use orderly::ordered_set;
///
/// let set = ordered_set![3, 1, 3, 2];
/// assert_eq!(set.as_slice(), &[3, 1, 2]);
///
/// let empty: orderly::collections::OrderedSet<i32> = ordered_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! ordered_set {
    () => {
        $crate::collections::OrderedSet::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::collections::OrderedSet::new();
        $(
            set.insert($element);
        )+
        set
    }};
}

/// Creates a [`Set`] containing the given elements.
///
/// # Examples
///
/// ```rust
/// use orderly::set;
///
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::Set::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::collections::Set::new();
        $(
            set.insert($element);
        )+
        set
    }};
}

/// Creates an [`OrderedMap`] from `key => value` pairs.
///
/// A repeated key keeps its first position and takes the last value.
///
/// # Examples
///
/// ```rust
/// use orderly::ordered_map;
///
/// let map = ordered_map! { "a" => 1, "b" => 2, "a" => 3 };
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.position("b"), Some(1));
/// ```
#[macro_export]
macro_rules! ordered_map {
    () => {
        $crate::collections::OrderedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::collections::OrderedMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
