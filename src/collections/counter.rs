//! Multiset counting occurrences of hashable elements.
//!
//! [`Counter`] maps each distinct element to the number of times it was
//! added. It keeps no order. The element type is a single generic parameter,
//! so mixing element types in one counter is a compile-time error.
//!
//! # Examples
//!
//! ```rust
//! use orderly::collections::Counter;
//!
//! let mut counter = Counter::from_chars("hello");
//! assert_eq!(counter.get(&'l'), 2);
//! assert_eq!(counter.get(&'z'), 0);
//!
//! counter.add('z');
//! counter.remove(&'l');
//! assert_eq!(counter.len(), 4);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

/// Occurrence counts of elements.
#[derive(Clone)]
pub struct Counter<T> {
    counts: HashMap<T, u64>,
}

impl<T> Counter<T> {
    /// Creates an empty counter.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Returns the number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns an iterator over `(element, count)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, T, u64> {
        self.counts.iter()
    }

    /// Forgets every count.
    #[inline]
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl Counter<char> {
    /// Counts the characters of `text`.
    pub fn from_chars(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T: Eq + Hash> Counter<T> {
    /// Increments the count of `value` by one.
    #[inline]
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Increments the count of every value yielded by `values`.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Forgets `value` entirely and returns its former count.
    ///
    /// Removing an element that was never counted returns 0.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.remove(value).unwrap_or(0)
    }

    /// Returns `true` if `value` has been counted at least once.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(value)
    }

    /// Returns `true` if every value yielded by `values` has been counted.
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the count of `value`, 0 when it was never added.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Returns the `n` most frequent elements, highest count first.
    ///
    /// Elements with equal counts appear in unspecified relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::Counter;
    ///
    /// let counter: Counter<&str> = ["a", "b", "a", "c", "a", "b"].into_iter().collect();
    /// assert_eq!(counter.most_common(2), vec![(&"a", 3), (&"b", 2)]);
    /// ```
    pub fn most_common(&self, n: usize) -> Vec<(&T, u64)> {
        let mut entries: Vec<(&T, u64)> = self
            .counts
            .iter()
            .map(|(element, count)| (element, *count))
            .collect();
        entries.sort_by(|left, right| right.1.cmp(&left.1));
        entries.truncate(n);
        entries
    }
}

impl<T: Clone> Counter<T> {
    /// Copies the distinct elements into a `Vec`, in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        self.counts.keys().cloned().collect()
    }
}

impl<T> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.add_all(iter);
        counter
    }
}

impl<T: Eq + Hash> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Counter<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Counter<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Counter<T> {
    type Item = (&'a T, &'a u64);
    type IntoIter = hash_map::Iter<'a, T, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> PartialEq for Counter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for Counter<T> {}

impl<T: fmt::Debug> fmt::Debug for Counter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.counts.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Counter<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.counts.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Counter<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashMap<T, u64> as serde::Deserialize>::deserialize(deserializer)
            .map(|counts| Self { counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_total_sums_counts() {
        let counter = Counter::from([1, 1, 2, 3, 3, 3]);
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.len(), 3);
    }

    #[rstest]
    fn test_most_common_truncates() {
        let counter = Counter::from(["x", "x", "y"]);
        assert_eq!(counter.most_common(1), vec![(&"x", 2)]);
        assert_eq!(counter.most_common(10).len(), 2);
    }

    #[rstest]
    fn test_remove_returns_former_count() {
        let mut counter = Counter::from(['a', 'a', 'b']);
        assert_eq!(counter.remove(&'a'), 2);
        assert_eq!(counter.remove(&'a'), 0);
        assert!(!counter.contains(&'a'));
    }
}
