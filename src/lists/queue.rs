//! FIFO queue over [`LinkedList`].

use core::fmt;

use crate::lists::linked_list::Iter;
use crate::{AnySequence, LinkedList};

/// First-in, first-out queue. Values enter at the tail and leave from the head.
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Enqueues `values` in order.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.insert_tail(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.remove_head()
    }

    /// Returns the next value to be dequeued without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.get(0)
    }

    /// Front-to-back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    pub fn iter(&self) -> Iter<'_, T, u32> {
        self.list.iter()
    }
}

impl<T> AnySequence<T> for Queue<T> {
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

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}
