//! Growable array with doubling capacity.
//!
//! [`DynamicArray`] keeps its own logical capacity, starting at
//! [`DynamicArray::INITIAL_CAPACITY`] and doubling whenever an insert would exceed it.
//! Reads and writes are bounds-checked against the logical length, never the
//! allocation, and out-of-range access is silently ignored.

use core::fmt;
use core::slice;

use crate::AnySequence;

pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Capacity of a freshly created array.
    pub const INITIAL_CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Creates an empty array able to hold `capacity` elements before growing.
    /// A zero capacity is raised to [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(Self::INITIAL_CAPACITY);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    // --- Inspection ---

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity: the number of elements that fit before the next doubling.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // --- Access ---

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Overwrites the element at `index`. Indices at or past `len()` are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    pub fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    // --- Modification ---

    /// Appends to the back.
    pub fn push(&mut self, value: T) {
        self.guard_capacity();
        self.data.push(value);
    }

    /// Inserts at the front, shifting every element up by one. O(len).
    pub fn unshift(&mut self, value: T) {
        self.guard_capacity();
        self.data.insert(0, value);
    }

    /// Removes and returns the back element.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes and returns the front element, shifting the rest down. O(len).
    pub fn shift(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.remove(0))
        }
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.fill_range(value, 0, self.len());
    }

    /// Overwrites elements `start..min(end, len)` with `value`.
    pub fn fill_range(&mut self, value: T, start: usize, end: usize)
    where
        T: Clone,
    {
        let end = end.min(self.len());
        if start < end {
            self.data[start..end].fill(value);
        }
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    // --- Traversal ---
    //
    // Callbacks receive `(value, index, elements)` with `elements` the live contents.

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .find(|&(i, v)| predicate(v, i, items))
            .map(|(_, v)| v)
    }

    pub fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .position(|(i, v)| predicate(v, i, items))
    }

    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.find_index(predicate).is_some()
    }

    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let items = self.as_slice();
        items.iter().enumerate().all(|(i, v)| predicate(v, i, items))
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        let items = self.as_slice();
        for (i, v) in items.iter().enumerate() {
            f(v, i, items);
        }
    }

    pub fn map<U, F>(&self, mut f: F) -> DynamicArray<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .map(|(i, v)| f(v, i, items))
            .collect()
    }

    pub fn filter<P>(&self, mut predicate: P) -> DynamicArray<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .filter(|&(i, v)| predicate(v, i, items))
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Folds front-to-back starting from `init`. Returns `None` only when the array
    /// is empty and `init` is `None`.
    pub fn reduce<U, F>(&self, mut reducer: F, init: Option<U>) -> Option<U>
    where
        F: FnMut(Option<U>, &T, usize, &[T]) -> U,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .fold(init, |acc, (i, v)| Some(reducer(acc, v, i, items)))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    // --- Internals ---

    /// Doubles the logical capacity if one more element would not fit.
    #[inline]
    fn guard_capacity(&mut self) {
        if self.data.len() < self.capacity {
            return;
        }
        self.grow();
    }

    #[inline(never)]
    fn grow(&mut self) {
        let grown = self.capacity * 2;
        tracing::trace!(from = self.capacity, to = grown, "growing dynamic array");
        self.data.reserve_exact(grown - self.data.len());
        self.capacity = grown;
    }
}

impl<T> AnySequence<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

// --- Traits ---

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Tests ---
