//! The index-sequence pair shared by [`OrderedSet`](super::OrderedSet) and
//! [`OrderedMap`](super::OrderedMap).
//!
//! An [`IndexSequence`] keeps two structures side by side:
//!
//! - a membership index (`HashMap<K, V>`) for O(1) containment, dedup and
//!   value lookup, and
//! - a sequence (`Vec<K>`) holding every key exactly once, in canonical order.
//!
//! Every mutating method updates both before returning, so the key set of the
//! index always equals the key set of the sequence. The canonical order is
//! first-insertion order until [`IndexSequence::sort_by`] replaces it.
//!
//! Sets use `V = ()`, which costs nothing per entry.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Message used when the index and the sequence disagree.
const CONSISTENCY_INVARIANT_PANIC_MESSAGE: &str =
    "IndexSequence invariant violated: index and sequence hold different keys";

/// A hash index kept consistent with an ordered key sequence.
#[derive(Clone)]
pub(crate) struct IndexSequence<K, V> {
    membership: HashMap<K, V>,
    sequence: Vec<K>,
}

impl<K, V> IndexSequence<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            membership: HashMap::new(),
            sequence: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            membership: HashMap::with_capacity(capacity),
            sequence: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Keys in canonical order.
    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        &self.sequence
    }

    #[inline]
    pub(crate) fn key_at(&self, index: usize) -> Option<&K> {
        self.sequence.get(index)
    }

    /// Empties both structures. Allocated capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.membership.clear();
        self.sequence.clear();
    }

    pub(crate) fn into_keys(self) -> std::vec::IntoIter<K> {
        self.sequence.into_iter()
    }

    /// Splits the pair into its index and its sequence.
    pub(crate) fn into_parts(self) -> (HashMap<K, V>, Vec<K>) {
        (self.membership, self.sequence)
    }
}

impl<K: Clone + Eq + Hash, V> IndexSequence<K, V> {
    #[inline]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.contains_key(key)
    }

    #[inline]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.get(key)
    }

    #[inline]
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.get_mut(key)
    }

    /// Position of `key` in the sequence.
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.membership.contains_key(key) {
            return None;
        }
        self.sequence
            .iter()
            .position(|candidate| Borrow::<Q>::borrow(candidate) == key)
    }

    /// Inserts `key` with `value`.
    ///
    /// A new key is appended to the sequence and `None` is returned. An
    /// existing key keeps its position; only the value is replaced and the old
    /// value is returned.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.membership.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.sequence.push(key.clone());
        self.membership.insert(key, value);
        self.debug_assert_consistent();
        None
    }

    /// Inserts `key` only if it is absent. Returns `true` when it was added.
    pub(crate) fn insert_absent(&mut self, key: K, value: V) -> bool {
        if self.membership.contains_key(&key) {
            return false;
        }
        self.sequence.push(key.clone());
        self.membership.insert(key, value);
        self.debug_assert_consistent();
        true
    }

    /// Removes `key` from both structures, shifting later keys left.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.membership.remove(key)?;
        let position = self
            .sequence
            .iter()
            .position(|candidate| Borrow::<Q>::borrow(candidate) == key)
            .expect(CONSISTENCY_INVARIANT_PANIC_MESSAGE);
        let removed = self.sequence.remove(position);
        self.debug_assert_consistent();
        Some((removed, value))
    }

    /// Keeps only the keys for which `predicate` returns `true`, preserving
    /// the relative order of the survivors.
    pub(crate) fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let membership = &mut self.membership;
        self.sequence.retain(|key| {
            let keep = membership
                .get_mut(key)
                .is_some_and(|value| predicate(key, value));
            if !keep {
                membership.remove(key);
            }
            keep
        });
        self.debug_assert_consistent();
    }

    /// Stable sort of the sequence; the result becomes the canonical order.
    pub(crate) fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.sequence.sort_by(comparator);
    }

    /// Entries in canonical order.
    pub(crate) fn entries(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.sequence.iter().map(|key| {
            let value = self
                .membership
                .get(key)
                .expect(CONSISTENCY_INVARIANT_PANIC_MESSAGE);
            (key, value)
        })
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.membership.len(),
            self.sequence.len(),
            "{}",
            CONSISTENCY_INVARIANT_PANIC_MESSAGE
        );
    }
}
