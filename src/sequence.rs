//! A read-only abstraction shared by every container in the crate.

/// A trait for abstraction over the ordered containers of this crate
/// (and `Vec`/`VecDeque`), exposing their logical contents front-to-back.
pub trait AnySequence<T> {
    /// Number of logical elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the logical contents, front-to-back, into a `Vec`.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> AnySequence<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone()
    }
}

impl<T> AnySequence<T> for std::collections::VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
