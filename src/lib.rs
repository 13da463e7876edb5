//! # Basic Collections
//!
//! A small set of generic containers with simple, predictable contracts.
//!
//! * [`FixedArray`]: exactly `N` preallocated slots, each set or unset.
//! * [`RingBuffer`]: fixed-capacity circular buffer with insert/remove at both ends.
//! * [`LinkedList`]: doubly linked list stored in an index arena, with an in-place
//!   link-swapping sort.
//! * [`DynamicArray`]: growable array whose capacity starts at 2 and doubles.
//! * [`Stack`] and [`Queue`]: LIFO/FIFO facades over [`LinkedList`].
//!
//! ## Failure model
//!
//! Out-of-range access never fails loudly: reads return `None` and writes are ignored.
//! The only reportable error is [`OverflowError`], returned when a [`RingBuffer`]
//! insert would exceed its capacity. The rejected value travels back inside the error.
//!
//! ## Traversal combinators
//!
//! The arrays and the linked list offer `find`, `find_index`, `some`, `every`,
//! `for_each`, `map`, `filter` and `reduce`. Each callback receives the current
//! value, its index, and the container's whole contents as a slice.
//!
//! ## Examples
//!
//! ### RingBuffer
//!
//! ```rust
//! use basic_collections::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3);
//! buffer.push(2).unwrap();
//! buffer.push(3).unwrap();
//! buffer.unshift(1).unwrap();
//! assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
//!
//! // Full: the value comes back inside the error.
//! let err = buffer.push(4).unwrap_err();
//! assert_eq!(err.to_string(), "attempted to add into ring buffer at capacity");
//! assert_eq!(err.into_inner(), 4);
//!
//! assert_eq!(buffer.flush(), vec![1, 2, 3]);
//! assert!(buffer.is_empty());
//! ```
//!
//! ### LinkedList
//!
//! ```rust
//! use basic_collections::LinkedList;
//!
//! let mut list: LinkedList<i32> = LinkedList::from_slice(&[3, 1, 2]);
//! list.insert(1, 10);
//! assert_eq!(list.to_vec(), vec![3, 10, 1, 2]);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 10]);
//! assert_eq!(list.to_reversed_vec(), vec![10, 3, 2, 1]);
//!
//! // Out-of-range index: nothing happens.
//! list.insert(99, 0);
//! assert_eq!(list.len(), 4);
//! ```
//!
//! ### Stack and Queue
//!
//! ```rust
//! use basic_collections::{Queue, Stack};
//!
//! let mut stack = Stack::from_slice(&[1, 2, 3]);
//! assert_eq!(stack.pop(), Some(3));
//!
//! let mut queue = Queue::from_slice(&[1, 2, 3]);
//! assert_eq!(queue.dequeue(), Some(1));
//! ```

// --- Module Declarations ---

pub mod arrays;
pub mod error;
pub mod lists;
pub mod ring_buffer;
pub mod sequence;
pub mod utils;

// --- Re-exports ---

pub use arrays::dynamic_array::DynamicArray;
pub use arrays::fixed_array::FixedArray;
pub use error::OverflowError;
pub use lists::linked_list::LinkedList;
pub use lists::queue::Queue;
pub use lists::stack::Stack;
pub use ring_buffer::RingBuffer;
pub use sequence::AnySequence;
pub use utils::compare::default_comparer;
pub use utils::index_type::IndexType;
