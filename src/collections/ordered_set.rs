//! Insertion-ordered set with set algebra.
//!
//! This module provides [`OrderedSet`], a mutable set that remembers the order
//! in which elements were first inserted.
//!
//! # Overview
//!
//! `OrderedSet` stores its elements in an index-sequence pair: a hash index
//! answers membership queries in O(1) while a vector fixes the iteration
//! order. Both structures are updated together by every operation.
//!
//! - Duplicates are collapsed on construction; the first occurrence keeps its
//!   slot.
//! - Re-inserting an element never moves it.
//! - Removing an element shifts the elements after it one slot to the left.
//! - Set operations return new, independent sets whose order is derived from
//!   the operands (see [`OrderedSet::union`]).
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `insert`       | O(1) amortized      |
//! | `remove`       | O(n)                |
//! | `contains`     | O(1)                |
//! | `get`          | O(1)                |
//! | `sort_by`      | O(n log n)          |
//! | `union`        | O(n + m)            |
//! | `intersection` | O(n)                |
//! | `difference`   | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use orderly::collections::OrderedSet;
//!
//! let mut set = OrderedSet::from(["a", "b", "a", "c"]);
//! assert_eq!(set.to_vec(), vec!["a", "b", "c"]);
//!
//! set.insert("d");
//! set.remove(&"b");
//! assert_eq!(set.to_vec(), vec!["a", "c", "d"]);
//!
//! let other = OrderedSet::from(["d", "e"]);
//! assert_eq!(set.union(&other).to_vec(), vec!["a", "c", "d", "e"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use super::index_sequence::IndexSequence;

/// A set that iterates in first-insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq`, and `Hash`; the
///   clone lives in the membership index next to the sequence slot.
///
/// # Equality
///
/// `==` is **ordered** equality: two sets are equal only when they hold the
/// same elements at the same positions. Use [`OrderedSet::set_eq`] to compare
/// membership alone.
///
/// ```rust
/// use orderly::collections::OrderedSet;
///
/// let forward = OrderedSet::from([1, 2, 3]);
/// let backward = OrderedSet::from([3, 2, 1]);
///
/// assert_ne!(forward, backward);
/// assert!(forward.set_eq(&backward));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    inner: IndexSequence<T, ()>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSequence::new(),
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSequence::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the element at `index` in the canonical order.
    ///
    /// Out-of-range indices yield `None`. See [`OrderedSet::get_or_default`]
    /// for the variant that substitutes a default value instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let set = OrderedSet::from(["apple", "banana", "orange"]);
    /// assert_eq!(set.get(1), Some(&"banana"));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.key_at(index)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.inner.keys().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.inner.keys().last()
    }

    /// Views the elements as a slice in canonical order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.keys()
    }

    /// Returns an iterator over the elements in canonical order.
    #[inline]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.inner.keys().iter(),
        }
    }

    /// Removes every element. The set stays usable.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: Clone> OrderedSet<T> {
    /// Copies the elements into a `Vec` in canonical order.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.keys().to_vec()
    }

    /// Returns the element at `index`, or `T::default()` when out of range.
    ///
    /// A returned default cannot be told apart from a stored default value;
    /// prefer [`OrderedSet::get`] when that matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let set = OrderedSet::from(["apple".to_string()]);
    /// assert_eq!(set.get_or_default(0), "apple");
    /// assert_eq!(set.get_or_default(9), "");
    /// ```
    pub fn get_or_default(&self, index: usize) -> T
    where
        T: Default,
    {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Adds `value` at the end if it is absent.
    ///
    /// Returns `true` if the value was newly inserted. An element that is
    /// already present keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert!(set.insert(4));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert_absent(value, ())
    }

    /// Adds every value of `values`, in order, skipping those already present.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Removes `value`. Returns `true` if it was present.
    ///
    /// Elements after the removed one shift left by one slot; removing an
    /// absent value does nothing.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value).is_some()
    }

    /// Removes every value yielded by `values`.
    pub fn remove_all<'a, Q, I>(&mut self, values: I)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        let targets: HashSet<&Q> = values.into_iter().collect();
        if targets.is_empty() {
            return;
        }
        // Single pass over the sequence.
        self.inner
            .retain(|element, _| !targets.contains(Borrow::<Q>::borrow(element)));
    }

    /// Returns `true` if `value` is present.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(value)
    }

    /// Returns `true` if every value yielded by `values` is present.
    ///
    /// An empty query is vacuously `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let set = OrderedSet::from(["apple", "banana", "orange"]);
    /// assert!(set.contains_all(&["banana", "orange"]));
    /// assert!(!set.contains_all(&["grape"]));
    /// assert!(set.contains_all::<&str, _>(&[]));
    /// ```
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the position of `value` in the canonical order.
    #[inline]
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.position(value)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Sorts the elements with `comparator`; the sorted order becomes the
    /// canonical order.
    ///
    /// The sort is stable. Membership is not touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    /// set.sort_by(|left, right| left.cmp(right));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5, 6, 9]);
    /// ```
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.inner.sort_by(comparator);
    }

    /// Sorts the elements by their natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.inner.sort_by(Ord::cmp);
    }

    /// Returns `true` if both sets hold the same elements, in any order.
    pub fn set_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Returns the union of `self` and `other`.
    ///
    /// The result lists the elements of `self` in their order, followed by the
    /// elements of `other` that `self` lacks, in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3]);
    /// let right = OrderedSet::from([3, 4, 5]);
    /// assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.insert_all(other.iter().cloned());
        result
    }

    /// Returns the elements present in both sets, in `self`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3, 4, 5]);
    /// let right = OrderedSet::from([7, 6, 5, 4, 3]);
    /// assert_eq!(left.intersection(&right).to_vec(), vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` absent from `other`, in `self`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collections::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3, 4, 5]);
    /// let right = OrderedSet::from([3, 4, 5, 6, 7]);
    /// assert_eq!(left.difference(&right).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements found in exactly one of the two sets.
    ///
    /// Equivalent to `self.union(other).difference(&self.intersection(other))`:
    /// `self`'s exclusive elements come first, then `other`'s.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.insert_all(
            other
                .iter()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        result
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|element| !larger.contains(element))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`OrderedSet`], in canonical order.
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
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

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over an [`OrderedSet`], in canonical order.
pub struct OrderedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
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

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.insert_all(iter);
        set
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Copy + Eq + Hash + 'a> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for OrderedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = OrderedSet::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
