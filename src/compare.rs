//! Key ordering for [`BstMap`](crate::BstMap).
//!
//! The map is generic over a [`Comparator`] the same way the standard
//! hash-based collections are generic over `BuildHasher`: the comparator
//! instance lives inside the map and is consulted on every descent, so a
//! single tree is always ordered by a single, fixed total order.
//!
//! [`NaturalOrder`] is the default and delegates to [`Ord`]. Any
//! `Fn(&K, &K) -> Ordering` closure is also a comparator, which makes
//! ad-hoc orders cheap to construct:
//!
//! ```rust
//! use bstmap::BstMap;
//! use std::cmp::Ordering;
//!
//! let descending = |a: &i32, b: &i32| b.cmp(a);
//! let mut map = BstMap::with_comparator(descending);
//! map.insert(1, "one");
//! map.insert(3, "three");
//! map.insert(2, "two");
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&3, &2, &1]);
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: for any `a`, `b`, `c`,
/// `compare(a, b)` must be the inverse of `compare(b, a)`, and
/// `compare(a, b) == Less && compare(b, c) == Less` must imply
/// `compare(a, c) == Less`. The map stores no duplicate keys, so two keys
/// comparing `Equal` are treated as the same key.
pub trait Comparator<K> {
    /// Compares two keys, returning their relative order.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The default comparator: the natural order given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Any ordering closure is a comparator.
impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

// =============================================================================
// Tests
// =============================================================================
