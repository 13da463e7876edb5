//! Doubly linked list stored in an index arena.
//!
//! # Implementation details
//! - **Arena of slots**: nodes live in a `Vec`, addressed by a compact [`IndexType`]
//!   (default `u32`). `I::NONE` plays the role of a null link.
//! - **Non-owning links**: `prev`, `next`, `head` and `tail` are plain indices. The
//!   arena alone owns the values, so there are no reference cycles.
//! - **Free list**: removed slots are threaded through `next_free` and reused by later
//!   inserts, the way a fixed-size LRU cache recycles its entries.
//! - **Link-swapping sort**: [`sort_by`](LinkedList::sort_by) reorders the list by
//!   relinking adjacent nodes; values never move between slots.

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::utils::compare::default_comparer;
use crate::{AnySequence, IndexType};

struct Node<T, I> {
    value: T,
    prev: I,
    next: I,
}

enum Slot<T, I> {
    Occupied(Node<T, I>),
    Vacant { next_free: I },
}

/// A doubly linked list with O(1) insert and remove at both ends.
///
/// # Invariants
/// * `head.is_none()` iff `len == 0` iff `tail.is_none()`.
/// * For every linked node `n`: `n.next.prev == n` and `n.prev.next == n` whenever the
///   neighbour exists.
/// * `len` equals the number of nodes reachable from `head`.
pub struct LinkedList<T, I: IndexType = u32> {
    slots: Vec<Slot<T, I>>,
    free_head: I,
    head: I,
    tail: I,
    len: usize,
}

impl<T, I: IndexType> LinkedList<T, I> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: I::NONE,
            head: I::NONE,
            tail: I::NONE,
            len: 0,
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
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Access ---

    pub fn front(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    pub fn back(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    /// Returns the value at `index`, walking from whichever end is closer.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let idx = self.locate(index);
        Some(&self.node(idx).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let idx = self.locate(index);
        Some(&mut self.node_mut(idx).value)
    }

    /// Overwrites the value at `index`. Out-of-range indices are a silent no-op.
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = value;
        }
    }

    pub fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    // --- Insertion ---

    /// Inserts at the front in O(1).
    pub fn insert_head(&mut self, value: T) {
        let idx = self.alloc(value, I::NONE, self.head);
        if self.head.is_none() {
            self.tail = idx;
        } else {
            let head = self.head;
            self.node_mut(head).prev = idx;
        }
        self.head = idx;
        self.len += 1;
    }

    /// Inserts at the back in O(1).
    pub fn insert_tail(&mut self, value: T) {
        let idx = self.alloc(value, self.tail, I::NONE);
        if self.tail.is_none() {
            self.head = idx;
        } else {
            let tail = self.tail;
            self.node_mut(tail).next = idx;
        }
        self.tail = idx;
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == 0` and `index == len()` insert at the ends. Any `index > len()`
    /// leaves the list unchanged.
    pub fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            return self.insert_head(value);
        }
        if index == self.len {
            return self.insert_tail(value);
        }
        if index > self.len {
            return;
        }

        let prev = self.locate(index - 1);
        let next = self.node(prev).next;
        let idx = self.alloc(value, prev, next);
        self.node_mut(prev).next = idx;
        self.node_mut(next).prev = idx;
        self.len += 1;
    }

    // --- Removal ---

    pub fn remove_head(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink(self.head))
    }

    pub fn remove_tail(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Removes and returns the value at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_head();
        }
        if index == self.len - 1 {
            return self.remove_tail();
        }
        let idx = self.locate(index);
        Some(self.unlink(idx))
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = I::NONE;
        self.head = I::NONE;
        self.tail = I::NONE;
        self.len = 0;
    }

    // --- Conversion ---

    /// Values head-to-tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Values tail-to-head, following the back-links.
    pub fn to_reversed_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    // --- Traversal ---
    //
    // Callbacks receive `(value, index, snapshot)`, where `snapshot` is the list's
    // contents copied once when the combinator is called.

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let snapshot = self.to_vec();
        self.iter()
            .enumerate()
            .find(|&(i, v)| predicate(v, i, &snapshot))
            .map(|(_, v)| v)
    }

    pub fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let snapshot = self.to_vec();
        snapshot
            .iter()
            .enumerate()
            .position(|(i, v)| predicate(v, i, &snapshot))
    }

    pub fn some<P>(&self, predicate: P) -> bool
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.find_index(predicate).is_some()
    }

    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let snapshot = self.to_vec();
        snapshot
            .iter()
            .enumerate()
            .all(|(i, v)| predicate(v, i, &snapshot))
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]),
    {
        let snapshot = self.to_vec();
        for (i, v) in snapshot.iter().enumerate() {
            f(v, i, &snapshot);
        }
    }

    /// Builds a new list from `f`'s results, appended in order.
    pub fn map<U, F>(&self, mut f: F) -> LinkedList<U, I>
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]) -> U,
    {
        let snapshot = self.to_vec();
        let mut mapped = LinkedList::new();
        for (i, v) in snapshot.iter().enumerate() {
            mapped.insert_tail(f(v, i, &snapshot));
        }
        mapped
    }

    /// Builds a new list of the matching values, appended in order.
    pub fn filter<P>(&self, mut predicate: P) -> LinkedList<T, I>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        let snapshot = self.to_vec();
        let mut filtered = LinkedList::new();
        for (i, v) in snapshot.iter().enumerate() {
            if predicate(v, i, &snapshot) {
                filtered.insert_tail(v.clone());
            }
        }
        filtered
    }

    pub fn reduce<U, F>(&self, mut reducer: F, init: Option<U>) -> Option<U>
    where
        T: Clone,
        F: FnMut(Option<U>, &T, usize, &[T]) -> U,
    {
        let snapshot = self.to_vec();
        snapshot
            .iter()
            .enumerate()
            .fold(init, |acc, (i, v)| Some(reducer(acc, v, i, &snapshot)))
    }

    // --- Sorting ---

    /// Sorts ascending with [`default_comparer`]. Stable.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_by(default_comparer);
    }

    /// Sorts in place by relinking nodes. Stable; O(len²) comparisons.
    ///
    /// # Pseudo Code:
    /// ```text
    /// for boundary in (1..len).rev():        // last `len - boundary` nodes are final
    ///     node = head
    ///     repeat boundary times:
    ///         if compare(node, node.next) > 0:
    ///             swap node with node.next by relinking   // node moves one step right
    ///         else:
    ///             node = node.next
    ///     stop early if nothing was swapped
    /// ```
    ///
    /// Behaviour with a comparer that is not a total order is unspecified but never
    /// corrupts the list.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut swaps = 0usize;
        for boundary in (1..self.len).rev() {
            let mut swapped = false;
            let mut left = self.head;
            for _ in 0..boundary {
                let right = self.node(left).next;
                if compare(&self.node(left).value, &self.node(right).value) == Ordering::Greater {
                    self.swap_adjacent(left, right);
                    swapped = true;
                    swaps += 1;
                } else {
                    left = right;
                }
            }
            if !swapped {
                break;
            }
        }
        tracing::trace!(len = self.len, swaps, "sorted linked list");
    }

    /// Returns a sorted copy, leaving `self` untouched.
    pub fn sorted(&self) -> Self
    where
        T: Clone + PartialOrd,
    {
        self.sorted_by(default_comparer)
    }

    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut copy: Self = self.iter().cloned().collect();
        copy.sort_by(compare);
        copy
    }

    // --- Iteration ---

    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // --- Internals ---

    #[inline]
    fn node(&self, idx: I) -> &Node<T, I> {
        match &self.slots[idx.as_usize()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: I) -> &mut Node<T, I> {
        match &mut self.slots[idx.as_usize()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    #[inline]
    fn value_at(&self, idx: I) -> Option<&T> {
        if idx.is_none() {
            None
        } else {
            Some(&self.node(idx).value)
        }
    }

    /// Slot of the node at `index`. Requires `index < len`.
    fn locate(&self, index: usize) -> I {
        debug_assert!(index < self.len);
        if index <= self.len / 2 {
            let mut idx = self.head;
            for _ in 0..index {
                idx = self.node(idx).next;
            }
            idx
        } else {
            let mut idx = self.tail;
            for _ in 0..(self.len - 1 - index) {
                idx = self.node(idx).prev;
            }
            idx
        }
    }

    /// Places a new node in a free slot (or a new one) and returns its index.
    fn alloc(&mut self, value: T, prev: I, next: I) -> I {
        let node = Slot::Occupied(Node { value, prev, next });
        if self.free_head.is_none() {
            let idx = I::from_usize(self.slots.len());
            self.slots.push(node);
            idx
        } else {
            let idx = self.free_head;
            match mem::replace(&mut self.slots[idx.as_usize()], node) {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            idx
        }
    }

    /// Detaches the node at `idx`, returns its slot to the free list and yields its value.
    fn unlink(&mut self, idx: I) -> T {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };
        if prev.is_none() {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }
        if next.is_none() {
            self.tail = prev;
        } else {
            self.node_mut(next).prev = prev;
        }
        self.len -= 1;

        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = idx;
        match mem::replace(&mut self.slots[idx.as_usize()], vacant) {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("unlinked a vacant slot"),
        }
    }

    /// Swaps two adjacent nodes where `left.next == right`, repairing the links on
    /// both sides and the `head`/`tail` boundaries.
    ///
    /// ```text
    /// before: outer_prev <-> left <-> right <-> outer_next
    /// after:  outer_prev <-> right <-> left <-> outer_next
    /// ```
    fn swap_adjacent(&mut self, left: I, right: I) {
        let outer_prev = self.node(left).prev;
        let outer_next = self.node(right).next;

        if outer_prev.is_none() {
            self.head = right;
        } else {
            self.node_mut(outer_prev).next = right;
        }
        if outer_next.is_none() {
            self.tail = left;
        } else {
            self.node_mut(outer_next).prev = left;
        }

        let r = self.node_mut(right);
        r.prev = outer_prev;
        r.next = left;
        let l = self.node_mut(left);
        l.prev = right;
        l.next = outer_next;
    }
}

impl<T, I: IndexType> AnySequence<T> for LinkedList<T, I> {
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

/// Borrowing head-to-tail iterator; `rev()` walks the back-links.
pub struct Iter<'a, T, I: IndexType> {
    list: &'a LinkedList<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for Iter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}

pub struct IntoIter<T, I: IndexType> {
    list: LinkedList<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.remove_head()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<T> {
        self.list.remove_tail()
    }
}

impl<T, I: IndexType> IntoIterator for LinkedList<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedList<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T, I: IndexType> Default for LinkedList<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, I: IndexType> Clone for LinkedList<T, I> {
    /// Clones into a compact arena with no free slots.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for LinkedList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, I: IndexType> PartialEq for LinkedList<T, I> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, I: IndexType> Eq for LinkedList<T, I> {}

impl<T, I: IndexType> Extend<T> for LinkedList<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.insert_tail(item);
        }
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedList<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the list both ways and checks every structural invariant.
    fn check_links<T, I: IndexType>(list: &LinkedList<T, I>) {
        assert_eq!(list.head.is_none(), list.len == 0);
        assert_eq!(list.tail.is_none(), list.len == 0);

        let mut count = 0;
        let mut prev = I::NONE;
        let mut idx = list.head;
        while !idx.is_none() {
            let node = list.node(idx);
            assert_eq!(node.prev, prev, "back-link mismatch at slot {:?}", idx);
            prev = idx;
            idx = node.next;
            count += 1;
        }
        assert_eq!(prev, list.tail);
        assert_eq!(count, list.len);
    }

    fn list(values: &[i32]) -> LinkedList<i32> {
        LinkedList::from_slice(values)
    }

    #[test]
    fn test_linked_list_new_is_empty() {
        let l: LinkedList<i32> = LinkedList::new();
        assert_eq!(l.len(), 0);
        assert!(l.is_empty());
        assert_eq!(l.front(), None);
        assert_eq!(l.back(), None);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_from_slice_and_to_vec() {
        let l = list(&[1, 2, 3]);
        assert_eq!(l.len(), 3);
        assert_eq!(l.to_vec(), vec![1, 2, 3]);
        assert_eq!(l.to_reversed_vec(), vec![3, 2, 1]);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_get() {
        let l = list(&[1, 2, 3, 4, 5]);
        for (i, expected) in (1..=5).enumerate() {
            assert_eq!(l.get(i), Some(&expected));
        }
        assert_eq!(l.get(5), None);

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.get(0), None);
    }

    #[test]
    fn test_linked_list_set() {
        let mut l = list(&[1, 2, 3]);
        l.set(1, 1337);
        assert_eq!(l.get(1), Some(&1337));
        l.set(3, 1337); // no-op
        assert_eq!(l.get(3), None);
        assert_eq!(l.to_vec(), vec![1, 1337, 3]);
    }

    #[test]
    fn test_linked_list_insert_head_and_tail() {
        let mut l = LinkedList::<i32>::new();
        l.insert_head(1);
        assert_eq!((l.front(), l.back()), (Some(&1), Some(&1)));
        l.insert_head(0);
        l.insert_tail(2);
        assert_eq!(l.to_vec(), vec![0, 1, 2]);
        check_links(&l);

        let mut t = LinkedList::<i32>::new();
        t.insert_tail(5);
        assert_eq!((t.front(), t.back()), (Some(&5), Some(&5)));
        check_links(&t);
    }

    #[test]
    fn test_linked_list_insert_at_ends_delegates() {
        let mut a = list(&[1, 2, 3]);
        let mut b = list(&[1, 2, 3]);
        a.insert(0, 0);
        b.insert_head(0);
        assert_eq!(a, b);

        let len = a.len();
        a.insert(len, 4);
        b.insert_tail(4);
        assert_eq!(a, b);
        check_links(&a);
    }

    #[test]
    fn test_linked_list_insert_middle_relinks_both_neighbours() {
        let mut l = list(&[1, 2, 3]);
        l.insert(2, 1337);
        assert_eq!(l.len(), 4);
        assert_eq!(l.to_vec(), vec![1, 2, 1337, 3]);
        assert_eq!(l.to_reversed_vec(), vec![3, 1337, 2, 1]);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_insert_out_of_range_is_noop() {
        let mut l = list(&[1, 2, 3]);
        l.insert(4, 1337);
        assert_eq!(l.to_vec(), vec![1, 2, 3]);
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn test_linked_list_remove_head_and_tail() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.remove_head(), Some(1));
        assert_eq!(l.remove_tail(), Some(3));
        check_links(&l);
        assert_eq!(l.remove_tail(), Some(2));
        assert_eq!(l.remove_tail(), None);
        assert_eq!(l.remove_head(), None);
        assert!(l.is_empty());
        check_links(&l);
    }

    #[test]
    fn test_linked_list_remove_middle() {
        let mut l = list(&[1, 2, 3, 4, 5]);
        assert_eq!(l.remove(2), Some(3));
        assert_eq!(l.to_vec(), vec![1, 2, 4, 5]);
        assert_eq!(l.to_reversed_vec(), vec![5, 4, 2, 1]);
        check_links(&l);

        assert_eq!(l.remove(0), Some(1));
        assert_eq!(l.remove(l.len() - 1), Some(5));
        assert_eq!(l.remove(2), None);
        assert_eq!(l.to_vec(), vec![2, 4]);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_reuses_freed_slots() {
        let mut l = list(&[1, 2, 3]);
        l.remove(1);
        l.remove_head();
        assert_eq!(l.slots.len(), 3);
        l.insert_tail(4);
        l.insert_head(0);
        assert_eq!(l.slots.len(), 3);
        assert_eq!(l.to_vec(), vec![0, 3, 4]);
        l.insert_tail(5);
        assert_eq!(l.slots.len(), 4);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_has() {
        let l = list(&[1, 2, 3]);
        assert!(l.has(&3));
        assert!(!l.has(&4));
    }

    #[test]
    fn test_linked_list_combinators() {
        let l = list(&[1, 2, 3, 4]);

        assert_eq!(l.find(|v, _, _| v % 2 == 0), Some(&2));
        assert_eq!(l.find_index(|v, _, _| *v == 4), Some(3));
        assert_eq!(l.find_index(|v, _, _| *v == 9), None);
        assert!(l.some(|_, i, snap| snap[i] == 3));
        assert!(l.every(|v, _, snap| snap.contains(v)));
        assert!(!l.every(|v, _, _| *v < 4));

        let mut seen = Vec::new();
        l.for_each(|v, i, snap| {
            assert_eq!(snap, &[1, 2, 3, 4]);
            seen.push(v * 10 + i as i32);
        });
        assert_eq!(seen, vec![10, 21, 32, 43]);

        let strings = l.map(|v, _, _| v.to_string());
        assert_eq!(strings.to_vec(), vec!["1", "2", "3", "4"]);

        let big = l.filter(|v, _, _| *v > 2);
        assert_eq!(big.to_vec(), vec![3, 4]);
        check_links(&big);

        assert_eq!(l.reduce(|acc, v, _, _| acc.unwrap_or(1) * v, None), Some(24));
        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.reduce(|acc, v, _, _| acc.unwrap_or(0) + v, None), None);
    }

    #[test]
    fn test_linked_list_sort() {
        let mut l = list(&[3, 1, 2]);
        l.sort();
        assert_eq!(l.to_vec(), vec![1, 2, 3]);
        assert_eq!(l.front(), Some(&1));
        assert_eq!(l.back(), Some(&3));
        assert_eq!(l.to_reversed_vec(), vec![3, 2, 1]);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_sort_edge_shapes() {
        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut one = list(&[7]);
        one.sort();
        assert_eq!(one.to_vec(), vec![7]);

        let mut reversed = list(&[5, 4, 3, 2, 1]);
        reversed.sort();
        assert_eq!(reversed.to_vec(), vec![1, 2, 3, 4, 5]);
        check_links(&reversed);

        let mut dupes = list(&[2, 1, 2, 1, 0]);
        dupes.sort();
        assert_eq!(dupes.to_vec(), vec![0, 1, 1, 2, 2]);
        check_links(&dupes);
    }

    #[test]
    fn test_linked_list_sort_by_is_stable() {
        let mut l: LinkedList<(i32, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
        l.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(l.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        l.sort_by(|a, b| b.0.cmp(&a.0));
        assert_eq!(l.to_vec(), vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
        check_links(&l);
    }

    #[test]
    fn test_linked_list_sort_keeps_values_in_place() {
        let mut l = list(&[3, 1, 2]);
        let slot_of_three = l.head;
        l.sort();
        assert_eq!(l.tail, slot_of_three);
    }

    #[test]
    fn test_linked_list_sorted_leaves_source() {
        let l = list(&[3, 1, 2]);
        let s = l.sorted();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(l.to_vec(), vec![3, 1, 2]);

        let desc = l.sorted_by(|a, b| b.cmp(a));
        assert_eq!(desc.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_linked_list_narrow_index_type() {
        let mut l: LinkedList<u8, u8> = (0..=253).collect();
        assert_eq!(l.len(), 254);
        assert_eq!(l.get(200), Some(&200));
        l.remove(100);
        l.insert(5, 99);
        check_links(&l);
    }

    #[test]
    #[should_panic(expected = "node index exceeds u8 arena capacity")]
    fn test_linked_list_index_type_exhaustion_panics() {
        let _l: LinkedList<u8, u8> = (0..=255).collect();
    }

    #[test]
    fn test_linked_list_iterators() {
        let l = list(&[1, 2, 3]);
        let mut it = l.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);

        let back: Vec<_> = l.clone().into_iter().rev().collect();
        assert_eq!(back, vec![3, 2, 1]);
        assert_eq!((&l).into_iter().count(), 3);
    }

    #[test]
    fn test_linked_list_traits() {
        let mut l = list(&[1, 2]);
        l.extend([3, 4]);
        assert_eq!(format!("{:?}", l), "[1, 2, 3, 4]");

        let cloned = l.clone();
        assert_eq!(cloned, l);
        l.clear();
        assert!(l.is_empty());
        assert_ne!(cloned, l);
        check_links(&l);

        let def: LinkedList<i32> = LinkedList::default();
        assert!(def.is_empty());
    }

    #[test]
    fn test_linked_list_drop_behavior() {
        use std::cell::RefCell;
        use std::rc::Rc;
        let counter = Rc::new(RefCell::new(0));
        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        {
            let mut l: LinkedList<Dropper> = LinkedList::new();
            for _ in 0..3 {
                l.insert_tail(Dropper(counter.clone()));
            }
            drop(l.remove(1));
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 3);
    }
}
