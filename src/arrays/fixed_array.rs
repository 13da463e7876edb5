//! Preallocated array with a fixed number of slots.
//!
//! Provides [`FixedArray`]: exactly `capacity` slots allocated once at construction.
//! A slot either holds a value or is unset; there is no zero value standing in for
//! "nothing here". Out-of-range writes are ignored and out-of-range reads return
//! `None`, so no operation on a `FixedArray` can fail.
//!
//! [`RingBuffer`](crate::RingBuffer) uses a `FixedArray` as its circular backing store.

use core::fmt;
use core::slice;

use crate::AnySequence;

/// A fixed-capacity array of optional slots.
///
/// # Invariants
/// * `slots.len()` is set at construction and never changes.
/// * Valid indices are `0..capacity`.
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Creates an array of `capacity` unset slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Creates an array sized to `values`, with every slot set.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    // --- Inspection ---

    /// Number of slots. Never changes.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Same as [`capacity`](Self::capacity): a fixed array's length is its slot count.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The raw slots, unset ones included.
    #[inline(always)]
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    // --- Access ---

    /// Returns the value at `index`, or `None` if the index is out of range or the
    /// slot is unset.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Writes `value` into `index`. Out-of-range indices are a silent no-op.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// Moves the value out of `index`, leaving the slot unset.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns `true` if any set slot equals `value`.
    pub fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.slots.iter().any(|slot| slot.as_ref() == Some(value))
    }

    // --- Bulk writes ---

    /// Sets every slot to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.fill_range(value, 0, self.capacity());
    }

    /// Sets slots `start..min(end, capacity)` to `value`.
    pub fn fill_range(&mut self, value: T, start: usize, end: usize)
    where
        T: Clone,
    {
        let end = end.min(self.capacity());
        if start >= end {
            return;
        }
        for slot in &mut self.slots[start..end] {
            *slot = Some(value.clone());
        }
    }

    // --- Traversal ---
    //
    // Every callback receives `(value, index, slots)` where `slots` is the whole
    // array as it stands when the combinator is called.

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(Option<&T>, usize, &[Option<T>]) -> bool,
    {
        let slots = self.as_slice();
        slots
            .iter()
            .enumerate()
            .find(|&(i, slot)| predicate(slot.as_ref(), i, slots))
            .and_then(|(_, slot)| slot.as_ref())
    }

    pub fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(Option<&T>, usize, &[Option<T>]) -> bool,
    {
        let slots = self.as_slice();
        slots
            .iter()
            .enumerate()
            .position(|(i, slot)| predicate(slot.as_ref(), i, slots))
    }

    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(Option<&T>, usize, &[Option<T>]) -> bool,
    {
        self.find_index(predicate).is_some()
    }

    /// Returns `true` if `predicate` holds for every slot (vacuously true when empty).
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Option<&T>, usize, &[Option<T>]) -> bool,
    {
        let slots = self.as_slice();
        slots
            .iter()
            .enumerate()
            .all(|(i, slot)| predicate(slot.as_ref(), i, slots))
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, usize, &[Option<T>]),
    {
        let slots = self.as_slice();
        for (i, slot) in slots.iter().enumerate() {
            f(slot.as_ref(), i, slots);
        }
    }

    /// Builds a new array of the same capacity with every slot set to `f`'s result.
    pub fn map<U, F>(&self, mut f: F) -> FixedArray<U>
    where
        F: FnMut(Option<&T>, usize, &[Option<T>]) -> U,
    {
        let slots = self.as_slice();
        FixedArray {
            slots: slots
                .iter()
                .enumerate()
                .map(|(i, slot)| Some(f(slot.as_ref(), i, slots)))
                .collect(),
        }
    }

    /// Builds a new array holding the matching slots, in order. Its capacity is the
    /// number of matches.
    pub fn filter<P>(&self, mut predicate: P) -> FixedArray<T>
    where
        T: Clone,
        P: FnMut(Option<&T>, usize, &[Option<T>]) -> bool,
    {
        let slots = self.as_slice();
        FixedArray {
            slots: slots
                .iter()
                .enumerate()
                .filter(|&(i, slot)| predicate(slot.as_ref(), i, slots))
                .map(|(_, slot)| slot.clone())
                .collect(),
        }
    }

    /// Folds the slots front-to-back. The accumulator starts as `init` and is `None`
    /// only until the reducer first runs.
    pub fn reduce<U, F>(&self, mut reducer: F, init: Option<U>) -> Option<U>
    where
        F: FnMut(Option<U>, Option<&T>, usize, &[Option<T>]) -> U,
    {
        let slots = self.as_slice();
        slots.iter().enumerate().fold(init, |acc, (i, slot)| {
            Some(reducer(acc, slot.as_ref(), i, slots))
        })
    }

    /// Copies the slots, unset ones included.
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.slots.to_vec()
    }

    // --- Iteration ---

    /// Iterates over the slots, unset ones included.
    pub fn iter(&self) -> slice::Iter<'_, Option<T>> {
        self.slots.iter()
    }
}

impl<T> AnySequence<Option<T>> for FixedArray<T> {
    fn len(&self) -> usize {
        self.capacity()
    }
    fn to_vec(&self) -> Vec<Option<T>>
    where
        Option<T>: Clone,
    {
        self.slots.to_vec()
    }
}

// --- Traits ---

impl<T: Clone> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for FixedArray<T> {}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T> IntoIterator for FixedArray<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a Option<T>;
    type IntoIter = slice::Iter<'a, Option<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Tests ---
