//! Unordered hash set with set algebra.
//!
//! This module provides [`Set`], a mutable set backed by
//! [`std::collections::HashSet`]. It exposes the same algebra as
//! [`OrderedSet`] but makes no promise about iteration order: code must never
//! rely on it, and equality is plain set equality.
//!
//! # Examples
//!
//! ```rust
//! use orderly::collections::Set;
//!
//! let set_a = Set::from([1, 2, 3]);
//! let set_b = Set::from([2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b), Set::from([1, 2, 3, 4]));
//! assert_eq!(set_a.intersection(&set_b), Set::from([2, 3]));
//! assert_eq!(set_a.difference(&set_b), Set::from([1]));
//! assert_eq!(set_a.symmetric_difference(&set_b), Set::from([1, 4]));
//!
//! // Unordered equality
//! assert_eq!(Set::from([1, 2, 3]), Set::from([3, 2, 1]));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use super::OrderedSet;

/// An unordered set of unique elements.
///
/// Cloning (or [`Set::copy`]) duplicates the storage, so a copy and its
/// source never observe each other's mutations.
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::Set;
    ///
    /// let set: Set<u8> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Adds `value`. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Adds every value of `values`.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(values);
    }

    /// Removes `value`. Returns `true` if it was present; absent values are
    /// ignored.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(value)
    }

    /// Removes every value yielded by `values`.
    pub fn remove_all<'a, Q, I>(&mut self, values: I)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        for value in values {
            self.elements.remove(value);
        }
    }

    /// Returns `true` if `value` is present.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(value)
    }

    /// Returns `true` if every value yielded by `values` is present.
    ///
    /// An empty query is vacuously `true`.
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// The empty set is a subset of every set, itself included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::Set;
    ///
    /// let empty: Set<i32> = Set::new();
    /// let set = Set::from([1, 2]);
    ///
    /// assert!(empty.is_subset(&set));
    /// assert!(empty.is_subset(&empty));
    /// assert!(set.is_subset(&set));
    /// assert!(!set.is_subset(&Set::from([1])));
    /// ```
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.elements.is_disjoint(&other.elements)
    }
}

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns an independent copy of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::Set;
    ///
    /// let mut original = Set::from([1, 2]);
    /// let copy = original.copy();
    /// original.insert(3);
    ///
    /// assert!(!copy.contains(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copies the elements into a `Vec`, in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }

    /// Returns every element found in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.copy();
        result.insert_all(other.iter().cloned());
        result
    }

    /// Returns the elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements found in exactly one of the two sets.
    ///
    /// Defined as `self.union(other).difference(&self.intersection(other))`.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other).difference(&self.intersection(other))
    }

    /// Converts into an [`OrderedSet`].
    ///
    /// The resulting order is this set's internal iteration order, which is
    /// unspecified; it is *not* the order of insertion.
    pub fn to_ordered_set(&self) -> OrderedSet<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`Set`], in unspecified order.
pub struct SetIterator<'a, T> {
    inner: std::collections::hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {}

/// Owning iterator over a [`Set`], in unspecified order.
pub struct SetIntoIterator<T> {
    inner: std::collections::hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> From<OrderedSet<T>> for Set<T> {
    fn from(ordered: OrderedSet<T>) -> Self {
        ordered.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }

        true
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashSet<T> as serde::Deserialize>::deserialize(deserializer)
            .map(|elements| Self { elements })
    }
}
