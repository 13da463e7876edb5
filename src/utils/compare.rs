//! Default element ordering used by the sorting operations.

use core::cmp::Ordering;

/// Ascending order by `PartialOrd`.
///
/// Pairs that are neither less nor greater than each other (including
/// incomparable values such as `NaN`) are treated as equal.
///
/// ```rust
/// use core::cmp::Ordering;
/// use basic_collections::default_comparer;
///
/// assert_eq!(default_comparer(&1, &2), Ordering::Less);
/// assert_eq!(default_comparer(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn default_comparer<T: PartialOrd + ?Sized>(lhs: &T, rhs: &T) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
