//! LIFO stack over [`LinkedList`].

use core::fmt;

use crate::lists::linked_list::Iter;
use crate::{AnySequence, LinkedList};

/// Last-in, first-out stack. The top of the stack is the tail of the list.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Pushes `values` in order, so the last value ends up on top.
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

    pub fn push(&mut self, value: T) {
        self.list.insert_tail(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_tail()
    }

    /// Returns the top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    /// Bottom-to-top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    /// Bottom-to-top.
    pub fn iter(&self) -> Iter<'_, T, u32> {
        self.list.iter()
    }
}

impl<T> AnySequence<T> for Stack<T> {
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

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}
