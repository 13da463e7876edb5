//! Error types.
//!
//! Almost every operation in this crate is total: out-of-range reads return `None`
//! and out-of-range writes are ignored. The one exception is inserting into a
//! full [`RingBuffer`](crate::RingBuffer), which reports [`OverflowError`].

use thiserror::Error;

/// Returned by [`RingBuffer::push`](crate::RingBuffer::push) and
/// [`RingBuffer::unshift`](crate::RingBuffer::unshift) when the buffer is at capacity.
///
/// The rejected value is handed back to the caller, so nothing is lost on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to add into ring buffer at capacity")]
pub struct OverflowError<T> {
    capacity: usize,
    value: T,
}

impl<T> OverflowError<T> {
    pub(crate) fn new(capacity: usize, value: T) -> Self {
        Self { capacity, value }
    }

    /// Capacity of the buffer that rejected the insert.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the rejected value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the error, returning the rejected value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_error_message() {
        let err = OverflowError::new(3, 4);
        assert_eq!(
            err.to_string(),
            "attempted to add into ring buffer at capacity"
        );
    }

    #[test]
    fn test_overflow_error_returns_value() {
        let err = OverflowError::new(1, String::from("late"));
        assert_eq!(err.capacity(), 1);
        assert_eq!(err.value(), "late");
        assert_eq!(err.into_inner(), "late");
    }

    #[test]
    fn test_overflow_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&OverflowError::new(0, 'x'));
    }
}
