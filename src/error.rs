//! Error types for tree operations.

use std::fmt;

/// The key passed to [`BstMap::remove`](crate::BstMap::remove) is not
/// present in the tree.
///
/// The probe key is handed back inside the error, so removal never needs a
/// `Clone` bound and callers can recover the key they passed in. The tree
/// is left unmodified when this error is returned.
///
/// # Examples
///
/// ```rust
/// use bstmap::{BstMap, KeyNotFound};
///
/// let mut map: BstMap<i32, i32> = BstMap::new();
/// map.insert(1, 10);
///
/// let error = map.remove(7).unwrap_err();
/// assert_eq!(error, KeyNotFound { key: 7 });
/// assert_eq!(format!("{error}"), "key not found in tree: 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound<K> {
    /// The key that was not found.
    pub key: K,
}

impl<K: fmt::Debug> fmt::Display for KeyNotFound<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "key not found in tree: {:?}", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for KeyNotFound<K> {}

// =============================================================================
// Tests
// =============================================================================
