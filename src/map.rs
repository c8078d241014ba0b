//! The binary search tree map.
//!
//! This module provides [`BstMap`], an ordered map over unique keys backed
//! by an explicit binary search tree: every node stores one entry and
//! links to its two children (owning) and its parent (non-owning), all as
//! arena indices. The tree does not rebalance itself on mutation; callers
//! invoke [`balance`](BstMap::balance) when the shape matters.
//!
//! # Overview
//!
//! - O(height) get / insert / remove: O(log N) after `balance`, O(N) in
//!   the degenerate sorted-insertion case
//! - O(1) len and `is_empty`
//! - in-order traversal through cursors and iterators
//! - `Clone` is a full deep copy; the clone shares no nodes with the
//!   original
//!
//! # Examples
//!
//! ```rust
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::new();
//! map.insert(8, "eight");
//! map.insert(3, "three");
//! map.insert(10, "ten");
//!
//! assert_eq!(map.get(&3), Some(&"three"));
//! assert_eq!(map.to_string(), "3 8 10");
//!
//! map.remove(3).unwrap();
//! assert!(map.find(&3).is_end());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use static_assertions::assert_impl_all;

use crate::arena::{Node, NodeArena, NodeId};
use crate::compare::{Comparator, NaturalOrder};
use crate::cursor::{Cursor, CursorMut, IntoIter, Iter};
use crate::error::KeyNotFound;

// =============================================================================
// BstMap Definition
// =============================================================================

/// An ordered map over unique keys, backed by a binary search tree.
///
/// Keys are placed by the map's [`Comparator`] (by default
/// [`NaturalOrder`], the `Ord` order) and are immutable once stored;
/// values stay mutable through [`get_mut`](Self::get_mut) and the mutable
/// cursor. Inserting a key that is already present is a no-op that reports
/// `false`: the first value wins until it is explicitly removed.
///
/// The tree keeps whatever shape the insertion sequence produced.
/// [`balance`](Self::balance) rebuilds it to minimal height on demand, and
/// [`is_balanced`](Self::is_balanced) checks the shape diagnostically.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get` / `find` | O(height)         |
/// | `insert`       | O(height)         |
/// | `remove`       | O(height)         |
/// | `balance`      | O(N log N)        |
/// | `is_balanced`  | O(N²) worst case  |
/// | `len`          | O(1)              |
///
/// # Examples
///
/// ```rust
/// use bstmap::BstMap;
///
/// let mut map = BstMap::new();
/// for key in [8, 3, 10, 1, 6] {
///     map.insert(key, key * key);
/// }
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&1, &3, &6, &8, &10]);
///
/// map.balance();
/// assert!(map.is_balanced());
/// ```
#[derive(Clone)]
pub struct BstMap<K, V, C = NaturalOrder> {
    comparator: C,
    pub(crate) arena: NodeArena<K, V>,
    pub(crate) root: Option<NodeId>,
}

// =============================================================================
// Construction
// =============================================================================

impl<K, V> BstMap<K, V> {
    /// Creates a new empty map ordered by [`NaturalOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let map: BstMap<i32, String> = BstMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> BstMap<K, V, C> {
    /// Creates a new empty map ordered by the given comparator.
    ///
    /// The comparator is fixed for the map's lifetime; every descent and
    /// every successor relation uses it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.to_string(), "2 1");
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            comparator,
            arena: NodeArena::new(),
            root: None,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Removes every entry.
    ///
    /// Releases all nodes at once; equivalent to removing each key but
    /// without any per-node relinking.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

// =============================================================================
// Structural Helpers (shared by cursors, iterators and the algorithms)
// =============================================================================

impl<K, V, C> BstMap<K, V, C> {
    /// Descends to the smallest key of the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    /// Descends to the largest key of the subtree rooted at `id`.
    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    /// The node holding the smallest key, if any.
    pub(crate) fn first_node(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The in-order successor of `id`: the node with the smallest key
    /// larger than `id`'s, or `None` if `id` holds the largest key.
    ///
    /// With a right subtree the successor is its leftmost node. Without
    /// one, the walk climbs the parent links as long as it arrives from a
    /// right child; the first ancestor reached from a left child is the
    /// successor, and running out of ancestors means the traversal is
    /// exhausted.
    pub(crate) fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self.arena[id].parent;
        while let Some(parent_id) = parent {
            if self.arena[parent_id].right != Some(child) {
                break;
            }
            child = parent_id;
            parent = self.arena[parent_id].parent;
        }
        parent
    }

    /// Rebinds the edge that pointed at `old_child` (a parent's child slot,
    /// or the root slot) to `new_child`.
    fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old_child: NodeId,
        new_child: Option<NodeId>,
    ) {
        match parent {
            None => self.root = new_child,
            Some(parent_id) => {
                if self.arena[parent_id].left == Some(old_child) {
                    self.arena[parent_id].left = new_child;
                } else {
                    debug_assert_eq!(self.arena[parent_id].right, Some(old_child));
                    self.arena[parent_id].right = new_child;
                }
            }
        }
    }
}

// =============================================================================
// Lookup and Insertion
// =============================================================================

impl<K, V, C: Comparator<K>> BstMap<K, V, C> {
    /// Descends from the root to the node holding `key`.
    fn locate(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            current = match self.comparator.compare(key, &self.arena[id].key) {
                Ordering::Less => self.arena[id].left,
                Ordering::Greater => self.arena[id].right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// The descent shared by every insertion flavor: returns the node
    /// holding `key` and whether it was created by this call. The value is
    /// only constructed when a node is actually created.
    fn insert_with_entry<F>(&mut self, key: K, make_value: F) -> (NodeId, bool)
    where
        F: FnOnce() -> V,
    {
        let Some(mut current) = self.root else {
            let id = self.arena.insert(Node::new(key, make_value(), None));
            self.root = Some(id);
            return (id, true);
        };
        loop {
            match self.comparator.compare(&key, &self.arena[current].key) {
                Ordering::Less => match self.arena[current].left {
                    Some(left) => current = left,
                    None => {
                        let id = self
                            .arena
                            .insert(Node::new(key, make_value(), Some(current)));
                        self.arena[current].left = Some(id);
                        return (id, true);
                    }
                },
                Ordering::Greater => match self.arena[current].right {
                    Some(right) => current = right,
                    None => {
                        let id = self
                            .arena
                            .insert(Node::new(key, make_value(), Some(current)));
                        self.arena[current].right = Some(id);
                        return (id, true);
                    }
                },
                Ordering::Equal => return (current, false),
            }
        }
    }

    /// Returns a cursor to the entry holding `key`, or the end cursor if
    /// the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.find(&1).value(), Some(&"one"));
    /// assert!(map.find(&2).is_end());
    /// assert_eq!(map.find(&2), map.cursor_end());
    /// ```
    #[must_use]
    pub fn find(&self, key: &K) -> Cursor<'_, K, V, C> {
        Cursor {
            current: self.locate(key),
            map: self,
        }
    }

    /// Returns a mutable cursor to the entry holding `key`, or the end
    /// cursor if the key is absent.
    #[must_use]
    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V, C> {
        let current = self.locate(key);
        CursorMut { map: self, current }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).map(|id| &self.arena[id].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.locate(key).map(|id| &mut self.arena[id].value)
    }

    /// Returns `true` if the map stores an entry under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Inserts `key` → `value`, returning a cursor to the affected entry
    /// and whether the insertion took place.
    ///
    /// When an entry with an equal key already exists nothing is mutated:
    /// the stored value is kept, the argument pair is dropped, and the
    /// returned flag is `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// let (cursor, inserted) = map.insert(4, "four");
    /// assert!(inserted);
    /// assert_eq!(cursor.key(), Some(&4));
    ///
    /// let (cursor, inserted) = map.insert(4, "FOUR");
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(), Some(&"four"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<'_, K, V, C>, bool) {
        self.insert_with(key, move || value)
    }

    /// Inserts `key` with a value constructed on demand, returning a
    /// cursor to the affected entry and whether the insertion took place.
    ///
    /// `make_value` is only called when a node is actually created, so a
    /// duplicate insertion costs no value construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, vec![0; 16]);
    ///
    /// // The key exists: the closure is never run.
    /// let (_, inserted) = map.insert_with(1, || unreachable!());
    /// assert!(!inserted);
    /// ```
    pub fn insert_with<F>(&mut self, key: K, make_value: F) -> (CursorMut<'_, K, V, C>, bool)
    where
        F: FnOnce() -> V,
    {
        let (id, inserted) = self.insert_with_entry(key, make_value);
        (
            CursorMut {
                map: self,
                current: Some(id),
            },
            inserted,
        )
    }

    /// Returns a mutable reference to the value stored under `key`,
    /// inserting `V::default()` first when the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<&str, i32> = BstMap::new();
    /// *map.get_or_insert_default("hits") += 1;
    /// *map.get_or_insert_default("hits") += 1;
    /// assert_eq!(map.get(&"hits"), Some(&2));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (id, _) = self.insert_with_entry(key, V::default);
        &mut self.arena[id].value
    }
}

// =============================================================================
// Removal
// =============================================================================

impl<K, V, C: Comparator<K>> BstMap<K, V, C> {
    /// Removes the entry stored under `key` and returns its value.
    ///
    /// # Errors
    ///
    /// When the key is absent the map is left unmodified and the probe key
    /// is handed back inside [`KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.remove(1), Ok("one"));
    /// assert_eq!(map.remove(1).unwrap_err().key, 1);
    /// ```
    pub fn remove(&mut self, key: K) -> Result<V, KeyNotFound<K>> {
        match self.locate(&key) {
            Some(locator) => Ok(self.remove_node(locator).value),
            None => Err(KeyNotFound { key }),
        }
    }

    /// Unlinks the node `locator` and returns it.
    ///
    /// Three structural cases, uniform over root and non-root positions
    /// (the root is the case with no parent edge to rebind):
    ///
    /// - no children: the parent's edge is cleared;
    /// - one child: the child is spliced up into the locator's position;
    /// - two children: a fresh replacement node carrying the in-order
    ///   successor's entry takes the locator's position. When the
    ///   successor is the locator's own right child it donates its right
    ///   subtree directly; otherwise the successor is first removed from
    ///   deeper in the right subtree (it has no left child, so that
    ///   removal hits one of the simpler cases) and the locator's two
    ///   subtrees are reattached under the replacement.
    fn remove_node(&mut self, locator: NodeId) -> Node<K, V> {
        let (parent, left, right) = {
            let node = &self.arena[locator];
            (node.parent, node.left, node.right)
        };
        match (left, right) {
            (None, None) => {
                self.replace_child(parent, locator, None);
                self.arena.remove(locator)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.arena[child].parent = parent;
                self.replace_child(parent, locator, Some(child));
                self.arena.remove(locator)
            }
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                let replacement = if successor == right {
                    let successor_node = self.arena.remove(successor);
                    let successor_right = successor_node.right;
                    let replacement = self.arena.insert(Node {
                        key: successor_node.key,
                        value: successor_node.value,
                        parent,
                        left: Some(left),
                        right: successor_right,
                    });
                    if let Some(child) = successor_right {
                        self.arena[child].parent = Some(replacement);
                    }
                    replacement
                } else {
                    // The successor sits deeper in the right subtree and
                    // has no left child: removing it recursively lands in
                    // one of the two simple cases and leaves `right` in
                    // place as the locator's child.
                    let successor_node = self.remove_node(successor);
                    let replacement = self.arena.insert(Node {
                        key: successor_node.key,
                        value: successor_node.value,
                        parent,
                        left: Some(left),
                        right: Some(right),
                    });
                    self.arena[right].parent = Some(replacement);
                    replacement
                };
                self.arena[left].parent = Some(replacement);
                self.replace_child(parent, locator, Some(replacement));
                self.arena.remove(locator)
            }
        }
    }
}

// =============================================================================
// Balance and Shape Queries
// =============================================================================

impl<K, V, C> BstMap<K, V, C> {
    /// Flattens the tree into its sorted entry sequence, leaving the map
    /// empty.
    fn take_sorted_entries(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len());
        let mut next = self.first_node();
        while let Some(id) = next {
            order.push(id);
            next = self.successor_of(id);
        }

        let mut entries = Vec::with_capacity(order.len());
        for id in order {
            let node = self.arena.remove(id);
            entries.push((node.key, node.value));
        }
        self.arena.clear();
        self.root = None;
        entries
    }

    /// Height of the subtree below `node`; an absent subtree has height 0.
    fn height_below(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| {
            1 + self
                .height_below(self.arena[id].left)
                .max(self.height_below(self.arena[id].right))
        })
    }

    fn balanced_below(&self, node: Option<NodeId>) -> bool {
        match node {
            None => true,
            Some(id) => {
                let left = self.arena[id].left;
                let right = self.arena[id].right;
                self.height_below(left).abs_diff(self.height_below(right)) <= 1
                    && self.balanced_below(left)
                    && self.balanced_below(right)
            }
        }
    }

    /// The height of the tree: the number of nodes on the longest
    /// root-to-leaf path. Diagnostic; recomputed on every call.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_below(self.root)
    }

    /// Returns `true` if, for every node, the heights of its two subtrees
    /// differ by at most one.
    ///
    /// An empty tree is balanced. This is a diagnostic check that
    /// recomputes heights node by node, O(N²) in the worst case, not a
    /// maintained invariant; only [`balance`](Self::balance) establishes
    /// it.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.balanced_below(self.root)
    }

    /// Returns an adapter that [`Display`](fmt::Display)s the raw link
    /// structure, one node per line in ascending key order.
    ///
    /// Diagnostic output only; the format is not stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, ());
    /// map.insert(1, ());
    /// map.insert(3, ());
    ///
    /// println!("{}", map.structure());
    /// ```
    #[must_use]
    pub const fn structure(&self) -> Structure<'_, K, V, C> {
        Structure { map: self }
    }
}

impl<K, V, C: Comparator<K>> BstMap<K, V, C> {
    /// Rebuilds the tree to minimal height.
    ///
    /// The tree is flattened into its sorted entry sequence and rebuilt by
    /// inserting each range's median first, recursively: the classic
    /// sorted-sequence-to-balanced-tree construction. The in-order entry
    /// sequence is unchanged; afterwards
    /// [`is_balanced`](Self::is_balanced) returns `true`.
    ///
    /// This is an explicit bulk operation: later insertions and removals
    /// degrade the shape again freely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// for key in 1..=6 {
    ///     map.insert(key, ());
    /// }
    /// // Ascending insertion degenerates into a single right spine.
    /// assert_eq!(map.height(), 6);
    ///
    /// map.balance();
    /// assert!(map.is_balanced());
    /// assert_eq!(map.height(), 3);
    /// assert_eq!(map.to_string(), "1 2 3 4 5 6");
    /// ```
    pub fn balance(&mut self) {
        let entries = self.take_sorted_entries();
        self.rebuild(entries);
    }

    /// Inserts the median of `entries`, then recurses on the two halves.
    fn rebuild(&mut self, mut entries: Vec<(K, V)>) {
        if entries.is_empty() {
            return;
        }
        let upper_half = entries.split_off(entries.len() / 2 + 1);
        if let Some((key, value)) = entries.pop() {
            self.insert_with_entry(key, move || value);
        }
        self.rebuild(entries);
        self.rebuild(upper_half);
    }
}

// =============================================================================
// Cursors and Iteration
// =============================================================================

impl<K, V, C> BstMap<K, V, C> {
    /// Returns a cursor at the entry with the smallest key, or the end
    /// cursor for an empty map.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            current: self.first_node(),
            map: self,
        }
    }

    /// Returns a mutable cursor at the entry with the smallest key, or the
    /// end cursor for an empty map.
    #[must_use]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let current = self.first_node();
        CursorMut { map: self, current }
    }

    /// Returns the past-the-end cursor, for equality checks against the
    /// cursors returned by [`find`](Self::find) and traversal.
    #[must_use]
    pub const fn cursor_end(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            map: self,
            current: None,
        }
    }

    /// Returns an iterator over the entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter::new(self)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values, in ascending order of their
    /// keys.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// The entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.first_node().map(|id| {
            let node = &self.arena[id];
            (&node.key, &node.value)
        })
    }

    /// The entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let node = &self.arena[self.rightmost(root)];
            (&node.key, &node.value)
        })
    }
}

// =============================================================================
// Structure Dump
// =============================================================================

/// Display adapter returned by [`BstMap::structure`].
///
/// Prints one node per line in ascending key order, each with the keys of
/// its raw structural neighbors (`-` for an absent link):
///
/// ```text
/// 1 (parent: 2, left: -, right: -)
/// 2 (parent: -, left: 1, right: 3)
/// 3 (parent: 2, left: -, right: -)
/// ```
pub struct Structure<'a, K, V, C = NaturalOrder> {
    map: &'a BstMap<K, V, C>,
}

fn write_link<K: fmt::Display, V, C>(
    map: &BstMap<K, V, C>,
    formatter: &mut fmt::Formatter<'_>,
    link: Option<NodeId>,
) -> fmt::Result {
    match link {
        Some(id) => write!(formatter, "{}", map.arena[id].key),
        None => formatter.write_str("-"),
    }
}

impl<K: fmt::Display, V, C> fmt::Display for Structure<'_, K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next = self.map.first_node();
        let mut first = true;
        while let Some(id) = next {
            if first {
                first = false;
            } else {
                formatter.write_str("\n")?;
            }
            let node = &self.map.arena[id];
            write!(formatter, "{} (parent: ", node.key)?;
            write_link(self.map, formatter, node.parent)?;
            formatter.write_str(", left: ")?;
            write_link(self.map, formatter, node.left)?;
            formatter.write_str(", right: ")?;
            write_link(self.map, formatter, node.right)?;
            formatter.write_str(")")?;
            next = self.map.successor_of(id);
        }
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for BstMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Ordered serialization: the keys in ascending order, separated by single
/// spaces. A diagnostic format, not a durable one.
impl<K: fmt::Display, V, C> fmt::Display for BstMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, _) in self {
            if first {
                first = false;
            } else {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{key}")?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BstMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when their in-order entry sequences are equal; the
/// internal shapes may differ.
impl<K: PartialEq, V: PartialEq, C> PartialEq for BstMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((self_key, self_value), (other_key, other_value))| {
                    self_key == other_key && self_value == other_value
                })
    }
}

impl<K: Eq, V: Eq, C> Eq for BstMap<K, V, C> {}

/// Hashes the length and then every entry in key order, so equal maps hash
/// equally regardless of their internal shape.
impl<K: Hash, V: Hash, C> Hash for BstMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for BstMap<K, V, C> {
    /// Builds a map from a pair sequence. Duplicate keys keep the first
    /// value, matching [`insert`](BstMap::insert).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_comparator(C::default());
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for BstMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_with_entry(key, move || value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a BstMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for BstMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.take_sorted_entries())
    }
}

assert_impl_all!(BstMap<i32, String>: Clone, Default, Send, Sync);

// =============================================================================
// Tests
// =============================================================================
