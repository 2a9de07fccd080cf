//! Insertion-ordered hash map.
//!
//! This module provides [`OrderedMap`], a mutable map whose keys, values and
//! entries are always enumerated in first-insertion key order.
//!
//! # Overview
//!
//! `OrderedMap` shares its storage layout with
//! [`OrderedSet`](super::OrderedSet): a hash index from key to value plus a
//! key sequence. Updating an existing key replaces its value in place and
//! never moves it; removing a key closes the gap it leaves.
//!
//! # Examples
//!
//! ```rust
//! use orderly::collections::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("one", 1);
//! map.insert("two", 2);
//! map.insert("three", 3);
//!
//! // Updating keeps the position
//! map.insert("one", 100);
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);
//! assert_eq!(map.get("one"), Some(&100));
//!
//! // Removing preserves the relative order of the rest
//! map.remove("two");
//! assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![100, 3]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use super::index_sequence::IndexSequence;

/// A key-value pair produced by [`OrderedMap::to_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValue<K, V> {
    /// The entry's key.
    pub key: K,
    /// The entry's value.
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// A hash map that remembers the order in which keys were first inserted.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Clone`, `Eq`, and `Hash`.
/// * `V` - The value type.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    inner: IndexSequence<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSequence::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSequence::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the keys in canonical order.
    #[inline]
    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.inner.keys().iter()
    }

    /// Removes every entry. The map stays usable.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    /// Inserts or updates `key`.
    ///
    /// A new key is appended to the key order and `None` is returned. For an
    /// existing key only the value changes; the previous value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(2, "two"), None);
    /// assert_eq!(map.insert(1, "uno"), Some("one"));
    ///
    /// let entries: Vec<(&i32, &&str)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"uno"), (&2, &"two")]);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns the value for `key`, or `None` when the key is absent.
    ///
    /// Absence is a normal negative result, not an error.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// Returns the value for `key`, or `V::default()` when absent.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Returns the entry at `index` in the canonical order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        let key = self.inner.key_at(index)?;
        self.inner.get(key).map(|value| (key, value))
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Returns the position of `key` in the canonical order.
    #[inline]
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.position(key)
    }

    /// Removes `key` and returns its value.
    ///
    /// The remaining keys keep their relative order. Removing an absent key
    /// does nothing and returns `None`.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key with its value.
    #[inline]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Sorts the entries by key with `comparator`; the sorted order becomes
    /// the canonical order.
    pub fn sort_keys_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&K, &K) -> std::cmp::Ordering,
    {
        self.inner.sort_by(comparator);
    }

    /// Returns an iterator over the values in canonical key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.inner.entries().map(|(_, value)| value)
    }

    /// Returns an iterator over the entries in canonical key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.inner.entries()
    }

    /// Copies the entries into a `Vec` of [`KeyValue`] pairs, in canonical
    /// key order.
    pub fn to_entries(&self) -> Vec<KeyValue<K, V>>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K: Clone + Eq + Hash, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Clone + Eq + Hash, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Clone + Eq + Hash, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let (membership, sequence) = self.inner.into_parts();
        OrderedMapIntoIterator {
            membership,
            sequence: sequence.into_iter(),
        }
    }
}

/// Owning iterator over an [`OrderedMap`], in canonical key order.
pub struct OrderedMapIntoIterator<K, V> {
    membership: HashMap<K, V>,
    sequence: std::vec::IntoIter<K>,
}

impl<K: Eq + Hash, V> OrderedMapIntoIterator<K, V> {
    fn take_entry(&mut self, key: K) -> (K, V) {
        let value = self
            .membership
            .remove(&key)
            .expect("OrderedMap invariant violated: key missing from the index");
        (key, value)
    }
}

impl<K: Eq + Hash, V> Iterator for OrderedMapIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.sequence.next()?;
        Some(self.take_entry(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for OrderedMapIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.sequence.next_back()?;
        Some(self.take_entry(key))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for OrderedMapIntoIterator<K, V> {}

impl<K: Clone + Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Ordered equality: same entries in the same key order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Clone + Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedMap<K, V>
where
    K: serde::Serialize + Clone + Eq + Hash,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
