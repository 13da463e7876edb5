//! Node index types for the arena-backed [`LinkedList`](crate::LinkedList).

use core::fmt::Debug;
use core::hash::Hash;

/// An integer type used as a **compact doubly-linked-list node index**.
///
/// List nodes refer to each other by their slot position in an arena instead of
/// by pointer. Back-links are therefore plain values with no ownership, and a
/// narrower index type shrinks every node by the difference in width.
///
/// The largest value of the type is reserved as [`IndexType::NONE`], so a list
/// indexed by `u16` holds at most `u16::MAX` nodes.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value meaning "no node" (the null link).
    const NONE: Self;

    /// Number of distinct slot indices this type can address.
    const MAX_SLOTS: usize;

    /// Converts this index to a `usize` for arena access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot position to this compact type.
    ///
    /// # Panics
    /// Panics if `i` does not fit below [`IndexType::NONE`].
    fn from_usize(i: usize) -> Self;

    /// Returns `true` if this is the [`IndexType::NONE`] sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            impl IndexType for $t {
                const NONE: Self = <$t>::MAX;
                const MAX_SLOTS: usize = <$t>::MAX as usize;

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    assert!(
                        i < Self::MAX_SLOTS,
                        concat!("node index exceeds ", stringify!($t), " arena capacity")
                    );
                    i as $t
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
