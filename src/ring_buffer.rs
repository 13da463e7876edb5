//! Fixed-capacity double-ended circular buffer.
//!
//! [`RingBuffer`] stores its elements in a [`FixedArray`] addressed by two cursors,
//! `head` and `tail`, taken modulo the capacity. `head == tail` means the buffer is
//! either empty or completely full; an explicit `full` flag tells the two apart, so
//! all `capacity` slots are usable.
//!
//! Unlike the rest of the crate, inserting into a full buffer is an error:
//! [`push`](RingBuffer::push) and [`unshift`](RingBuffer::unshift) return
//! [`OverflowError`] and hand the value back.
//!
//! # Cursor maintenance
//! ```text
//! push:    write at tail, tail = tail + 1,  full = (tail == head)
//! unshift: head = head - 1, write at head,  full = (head == tail)
//! pop:     tail = tail - 1, read at tail,   full = false
//! shift:   read at head, head = head + 1,   full = false
//! ```

use core::fmt;

use crate::{AnySequence, FixedArray, OverflowError};

/// A fixed-capacity ring buffer supporting insert and remove at both ends.
///
/// # Invariants
/// * `head < capacity` and `tail < capacity` whenever `capacity > 0`.
/// * The logical length is derived from `head`, `tail` and `full`; it is never stored.
/// * Slots `head, head + 1, ..., head + len - 1` (mod capacity) are set; all others
///   are unset.
pub struct RingBuffer<T> {
    data: FixedArray<T>,
    head: usize,
    tail: usize,
    full: bool,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// Both cursors start a third of the way into the storage. Any starting
    /// offset behaves identically under modular arithmetic.
    pub fn new(capacity: usize) -> Self {
        let start = capacity / 3;
        Self {
            data: FixedArray::new(capacity),
            head: start,
            tail: start,
            full: false,
        }
    }

    /// Creates a buffer whose capacity is exactly `values.len()`, holding `values`
    /// in order.
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut buffer = Self::new(values.len());
        for value in values {
            if buffer.push(value).is_err() {
                unreachable!("capacity equals the number of values");
            }
        }
        buffer
    }

    /// Creates a buffer of the given capacity and pushes `values` into it in order.
    ///
    /// A `capacity` of `0` falls back to `values.len()`. If `capacity` is smaller
    /// than `values.len()`, the first push that does not fit fails and its error
    /// is returned.
    pub fn with_values(values: Vec<T>, capacity: usize) -> Result<Self, OverflowError<T>> {
        let capacity = if capacity == 0 { values.len() } else { capacity };
        let mut buffer = Self::new(capacity);
        for value in values {
            buffer.push(value)?;
        }
        Ok(buffer)
    }

    // --- Inspection ---

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn len(&self) -> usize {
        if self.head == self.tail {
            if self.full { self.capacity() } else { 0 }
        } else if self.head < self.tail {
            self.tail - self.head
        } else {
            self.capacity() - self.head + self.tail
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail && !self.full
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    // --- Access ---

    /// Returns the element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.data.get(self.physical(index))
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    // --- Modification ---

    /// Appends `value` at the back.
    ///
    /// # Errors
    /// Returns [`OverflowError`] carrying `value` if the buffer is at capacity.
    /// The buffer is left untouched.
    pub fn push(&mut self, value: T) -> Result<(), OverflowError<T>> {
        let value = self.guard_capacity(value, "back")?;
        self.data.set(self.tail, value);
        self.tail = self.next_index(self.tail);
        self.full = self.tail == self.head;
        Ok(())
    }

    /// Prepends `value` at the front.
    ///
    /// # Errors
    /// Returns [`OverflowError`] carrying `value` if the buffer is at capacity.
    /// The buffer is left untouched.
    pub fn unshift(&mut self, value: T) -> Result<(), OverflowError<T>> {
        let value = self.guard_capacity(value, "front")?;
        self.head = self.prev_index(self.head);
        self.data.set(self.head, value);
        self.full = self.head == self.tail;
        Ok(())
    }

    /// Removes and returns the back element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.prev_index(self.tail);
        self.full = false;
        self.data.take(self.tail)
    }

    /// Removes and returns the front element.
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.data.take(self.head);
        self.head = self.next_index(self.head);
        self.full = false;
        value
    }

    /// Removes every element, returning them front-to-back.
    pub fn flush(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.len());
        while let Some(value) = self.shift() {
            drained.push(value);
        }
        drained
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        while self.shift().is_some() {}
    }

    /// Copies the elements front-to-back. The cursors are not touched.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // --- Iteration ---

    /// Iterates front-to-back without moving the cursors.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len(),
        }
    }

    // --- Internals ---

    #[inline]
    fn guard_capacity(&self, value: T, end: &'static str) -> Result<T, OverflowError<T>> {
        if self.len() + 1 > self.capacity() {
            tracing::debug!(capacity = self.capacity(), end, "ring buffer overflow");
            return Err(OverflowError::new(self.capacity(), value));
        }
        Ok(value)
    }

    /// Maps a logical position to a slot in `data`.
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    #[inline(always)]
    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    #[inline(always)]
    fn prev_index(&self, index: usize) -> usize {
        if index == 0 { self.capacity() - 1 } else { index - 1 }
    }
}

impl<T> AnySequence<T> for RingBuffer<T> {
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

// --- Iterators ---

/// Borrowing front-to-back iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.buffer.shift()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.buffer.pop()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buffer: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            head: self.head,
            tail: self.tail,
            full: self.full,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equal when both buffers hold the same elements in the same order.
/// Capacity and cursor positions are not compared.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// --- Tests ---
