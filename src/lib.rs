//! # bstmap
//!
//! An ordered map backed by an explicit binary search tree, with cursor
//! traversal, deep-copy semantics, deletion with node relinking, and
//! on-demand rebalancing.
//!
//! ## Overview
//!
//! [`BstMap`] stores unique keys in search order under a pluggable
//! [`Comparator`] (default: the `Ord` order). Unlike the self-balancing
//! standard-library `BTreeMap`, the tree keeps whatever shape the
//! insertion sequence produces; [`BstMap::balance`] rebuilds it to minimal
//! height as an explicit bulk operation, and [`BstMap::is_balanced`]
//! inspects the shape diagnostically.
//!
//! Traversal is cursor-based: [`Cursor`] (shared) and [`CursorMut`]
//! (exclusive, value-mutating) advance entry by entry in ascending key
//! order through the in-order successor relation, and compare equal across
//! variants when they sit on the same node. [`BstMap::iter`] adapts the
//! same walk to a standard `Iterator`.
//!
//! ## Example
//!
//! ```rust
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::new();
//! map.insert(8, "eight");
//! map.insert(3, "three");
//! map.insert(10, "ten");
//! map.insert(1, "one");
//!
//! // In-order, whatever the insertion order was.
//! assert_eq!(map.to_string(), "1 3 8 10");
//!
//! // Duplicate keys are rejected, first value wins.
//! let (_, inserted) = map.insert(3, "THREE");
//! assert!(!inserted);
//!
//! // Removal reports a missing key as a recoverable error.
//! assert_eq!(map.remove(8), Ok("eight"));
//! assert_eq!(map.remove(8).unwrap_err().key, 8);
//!
//! map.balance();
//! assert!(map.is_balanced());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod arena;
mod compare;
mod cursor;
mod error;
mod map;

pub use compare::{Comparator, NaturalOrder};
pub use cursor::{Cursor, CursorMut, IntoIter, Iter};
pub use error::KeyNotFound;
pub use map::{BstMap, Structure};
