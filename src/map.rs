//! The key-ordered map backing JSON objects.
//!
//! An AVL tree whose nodes live in an arena (an [`Array`] of slots) and refer
//! to their children by index. Keys are compared byte-wise. Duplicate keys are
//! rejected, so the first pair inserted under a key wins.
//!
//! Freed slots are threaded onto a free list and reused by later inserts.
//! Dropping the map sweeps the arena linearly, so releasing a large object
//! never recurses along tree links.

use crate::array::Array;
use crate::error::{AllocError, InsertError, InsertErrorKind};
use crate::value::{Pair, Value};
use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;

/// Index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Clone)]
struct Node {
    pair: Pair,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Height of the subtree rooted here; a leaf has height 1.
    height: u8,
}

#[derive(Clone)]
enum Slot {
    Occupied(Node),
    /// A free slot, linked to the next free one.
    Vacant(Option<NodeId>),
}

/// A balanced, duplicate-free map from byte-string keys to [`Pair`]s.
#[derive(Clone, Default)]
pub struct OrderedMap {
    slots: Array<Slot>,
    free: Option<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl OrderedMap {
    /// Creates an empty map without allocating.
    pub const fn new() -> Self {
        OrderedMap {
            slots: Array::new(),
            free: None,
            root: None,
            len: 0,
        }
    }

    /// The number of pairs in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, id: NodeId) -> &Node {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            // Handles only ever point at occupied slots.
            _ => unreachable!("dangling node handle {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => unreachable!("dangling node handle {}", id.0),
        }
    }

    fn find(&self, key: &[u8]) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(node.pair.key.as_slice()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns the pair stored under `key`.
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&Pair> {
        self.find(key.as_ref()).map(|id| &self.node(id).pair)
    }

    /// Returns the value stored under `key` for in-place modification.
    ///
    /// Only the value is exposed mutably; changing a key in place would break
    /// the tree's ordering.
    pub fn get_value_mut<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<&mut Value> {
        let id = self.find(key.as_ref())?;
        Some(&mut self.node_mut(id).pair.value)
    }

    pub fn contains_key<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.find(key.as_ref()).is_some()
    }

    /// Inserts a pair.
    ///
    /// # Errors
    /// `DuplicateKey` if a pair with an equal key is present, `OutOfMemory`
    /// if the arena cannot grow. Either way the pair is handed back and the
    /// map is unchanged.
    pub fn insert(&mut self, pair: Pair) -> Result<(), InsertError<Pair>> {
        if self.find(&pair.key).is_some() {
            return Err(InsertError::new(InsertErrorKind::DuplicateKey, pair));
        }
        let id = match self.allocate(pair) {
            Ok(id) => id,
            Err(pair) => return Err(InsertError::new(InsertErrorKind::OutOfMemory, pair)),
        };
        let root = self.link(self.root, id);
        self.root = Some(root);
        self.len += 1;
        Ok(())
    }

    /// Detaches and returns the pair stored under `key`.
    pub fn remove<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<Pair> {
        let (root, removed) = self.unlink(self.root, key.as_ref());
        self.root = root;
        let removed = removed?;
        self.len -= 1;
        Some(self.release(removed))
    }

    /// Iterates over the pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            map: self,
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.descend_left(self.root);
        iter
    }

    /// Visits every pair exactly once in preorder (node, left subtree, right
    /// subtree), driven by an explicit stack sized to the entry count.
    ///
    /// # Errors
    /// `AllocError` if the traversal stack cannot be allocated.
    pub fn preorder(&self) -> Result<Preorder<'_>, AllocError> {
        let mut stack = Array::try_with_capacity(self.len)?;
        if let Some(root) = self.root {
            // The stack holds at most one entry per unvisited node.
            let pushed = stack.push_back(root);
            debug_assert!(pushed.is_ok());
        }
        Ok(Preorder { map: self, stack })
    }

    // --- Arena management ---

    /// Stores a fresh leaf for `pair`, reusing a free slot when possible.
    /// Hands the pair back if the arena cannot grow.
    fn allocate(&mut self, pair: Pair) -> Result<NodeId, Pair> {
        let id = match self.free {
            Some(id) => id,
            None => {
                let id = NodeId(self.slots.len());
                if self.slots.push_back(Slot::Vacant(None)).is_err() {
                    return Err(pair);
                }
                id
            }
        };
        let leaf = Slot::Occupied(Node {
            pair,
            left: None,
            right: None,
            height: 1,
        });
        match self.slots.get_mut(id.0).map(|slot| mem::replace(slot, leaf)) {
            Some(Slot::Vacant(next)) => {
                if self.free == Some(id) {
                    self.free = next;
                }
                Ok(id)
            }
            _ => unreachable!("allocated slot {} was not vacant", id.0),
        }
    }

    /// Returns a detached node's slot to the free list and yields its pair.
    fn release(&mut self, id: NodeId) -> Pair {
        let vacant = Slot::Vacant(self.free);
        match self.slots.get_mut(id.0).map(|slot| mem::replace(slot, vacant)) {
            Some(Slot::Occupied(node)) => {
                self.free = Some(id);
                node.pair
            }
            _ => unreachable!("released slot {} was not occupied", id.0),
        }
    }

    // --- AVL mechanics ---

    fn height(&self, id: Option<NodeId>) -> u8 {
        id.map_or(0, |id| self.node(id).height)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.node_mut(id).height = height;
    }

    fn balance_factor(&self, id: NodeId) -> i16 {
        let node = self.node(id);
        i16::from(self.height(node.left)) - i16::from(self.height(node.right))
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).left else {
            return id;
        };
        let moved = self.node(pivot).right;
        self.node_mut(id).left = moved;
        self.update_height(id);
        self.node_mut(pivot).right = Some(id);
        self.update_height(pivot);
        pivot
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).right else {
            return id;
        };
        let moved = self.node(pivot).left;
        self.node_mut(id).right = moved;
        self.update_height(id);
        self.node_mut(pivot).left = Some(id);
        self.update_height(pivot);
        pivot
    }

    /// Restores the AVL property at `id` and returns the subtree's new root.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let balance = self.balance_factor(id);
        if balance > 1 {
            if let Some(left) = self.node(id).left {
                if self.balance_factor(left) < 0 {
                    let left = self.rotate_left(left);
                    self.node_mut(id).left = Some(left);
                }
            }
            return self.rotate_right(id);
        }
        if balance < -1 {
            if let Some(right) = self.node(id).right {
                if self.balance_factor(right) > 0 {
                    let right = self.rotate_right(right);
                    self.node_mut(id).right = Some(right);
                }
            }
            return self.rotate_left(id);
        }
        id
    }

    /// Links the detached leaf `id` into the subtree at `root`. The key is
    /// known to be absent.
    fn link(&mut self, root: Option<NodeId>, id: NodeId) -> NodeId {
        let Some(root) = root else {
            return id;
        };
        let goes_left = self.node(id).pair.key < self.node(root).pair.key;
        if goes_left {
            let left = self.link(self.node(root).left, id);
            self.node_mut(root).left = Some(left);
        } else {
            let right = self.link(self.node(root).right, id);
            self.node_mut(root).right = Some(right);
        }
        self.rebalance(root)
    }

    /// Unlinks the node holding `key` from the subtree at `root`.
    /// Returns the subtree's new root and the detached node, if found.
    fn unlink(&mut self, root: Option<NodeId>, key: &[u8]) -> (Option<NodeId>, Option<NodeId>) {
        let Some(id) = root else {
            return (None, None);
        };
        match key.cmp(self.node(id).pair.key.as_slice()) {
            Ordering::Less => {
                let (left, removed) = self.unlink(self.node(id).left, key);
                if removed.is_none() {
                    return (Some(id), None);
                }
                self.node_mut(id).left = left;
                (Some(self.rebalance(id)), removed)
            }
            Ordering::Greater => {
                let (right, removed) = self.unlink(self.node(id).right, key);
                if removed.is_none() {
                    return (Some(id), None);
                }
                self.node_mut(id).right = right;
                (Some(self.rebalance(id)), removed)
            }
            Ordering::Equal => {
                let Node { left, right, .. } = *self.node(id);
                let replacement = match (left, right) {
                    (None, child) | (child, None) => child,
                    (Some(left), Some(right)) => {
                        // The successor takes the removed node's place.
                        let (rest, successor) = self.unlink_min(right);
                        let node = self.node_mut(successor);
                        node.left = Some(left);
                        node.right = rest;
                        Some(self.rebalance(successor))
                    }
                };
                let node = self.node_mut(id);
                node.left = None;
                node.right = None;
                (replacement, Some(id))
            }
        }
    }

    /// Detaches the minimum node of the subtree at `id`.
    /// Returns the subtree's new root and the detached node.
    fn unlink_min(&mut self, id: NodeId) -> (Option<NodeId>, NodeId) {
        match self.node(id).left {
            None => {
                let right = self.node(id).right;
                self.node_mut(id).right = None;
                (right, id)
            }
            Some(left) => {
                let (rest, min) = self.unlink_min(left);
                self.node_mut(id).left = rest;
                (Some(self.rebalance(id)), min)
            }
        }
    }
}

/// Maps are equal when they hold equal pairs, regardless of tree shape.
impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|pair| (String::from_utf8_lossy(&pair.key), &pair.value)),
            )
            .finish()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = &'a Pair;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a map's pairs. Created by [`OrderedMap::iter`].
pub struct Iter<'a> {
    map: &'a OrderedMap,
    /// Ancestors whose left subtree is being walked; bounded by tree height.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn descend_left(&mut self, mut current: Option<NodeId>) {
        let map = self.map;
        while let Some(id) = current {
            self.stack.push(id);
            current = map.node(id).left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Pair;

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let id = self.stack.pop()?;
        let node = map.node(id);
        self.descend_left(node.right);
        self.remaining -= 1;
        Some(&node.pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Preorder iterator over a map's pairs. Created by [`OrderedMap::preorder`].
pub struct Preorder<'a> {
    map: &'a OrderedMap,
    stack: Array<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Pair;

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let id = self.stack.pop_back()?;
        let node = map.node(id);
        // Right goes first so the left subtree is visited next.
        for child in [node.right, node.left].into_iter().flatten() {
            let pushed = self.stack.push_back(child);
            debug_assert!(pushed.is_ok());
        }
        Some(&node.pair)
    }
}
