use std::fmt;

use log::debug;

use crate::error::InvariantError;
use crate::types::default_comparator;
use crate::util::{first, next as next_node, release};

use super::types::AvlNode;
use super::util::{assert_avl_tree, find, get_key_height_inorder, insert, max, min, print, remove};

/// Height-balanced binary search tree.
///
/// Nodes are stored in a private arena; links between them are arena
/// indices. Duplicate keys are ignored on insert.
#[derive(Clone)]
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    /// Empty tree in the key's natural order. Use [`with_comparator`](Self::with_comparator)
    /// for keys that are only `PartialOrd`.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.arena.reserve(capacity);
        tree
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    fn adopt(&mut self, node: u32) {
        if self.arena[node as usize].p.is_none() && self.root != Some(node) {
            debug!("root moved from {:?} to node {node}", self.root);
            self.root = Some(node);
        }
    }

    /// Inserts `key`. Returns `false` if an equal key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(root) = self.root else {
            debug_assert!(self.arena.is_empty());
            self.arena.push(AvlNode::new(key));
            self.root = Some(0);
            return true;
        };
        match insert(&mut self.arena, root, key, &self.comparator) {
            Some(top) => {
                self.adopt(top);
                true
            }
            None => false,
        }
    }

    /// Inserts every key in order; duplicates are skipped one at a time.
    pub fn insert_many<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }

    pub fn find(&self, key: &K) -> bool {
        find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key)
    }

    pub fn min(&self) -> Option<&K> {
        self.root.map(|r| &self.arena[min(&self.arena, r) as usize].k)
    }

    pub fn max(&self) -> Option<&K> {
        self.root.map(|r| &self.arena[max(&self.arena, r) as usize].k)
    }

    /// Removes `key`. Returns `false` on an empty tree or when it is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(root) = self.root else {
            return false;
        };

        let r = &self.arena[root as usize];
        if r.l.is_none() && r.r.is_none() {
            if (self.comparator)(key, &r.k) != 0 {
                return false;
            }
            self.clear();
            return true;
        }

        let Some(removal) = remove(&mut self.arena, root, key, &self.comparator) else {
            return false;
        };
        let (_, moved) = release(&mut self.arena, removal.freed);
        let mut new_root = removal.root;
        if moved.is_some() && moved == new_root {
            new_root = Some(removal.freed);
        }
        if new_root != Some(root) {
            debug!("root moved from node {root} to {new_root:?}");
        }
        self.root = new_root;
        true
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    /// Height of the root subtree, `None` when empty.
    pub fn height(&self) -> Option<usize> {
        self.root.map(|r| self.arena[r as usize].h as usize)
    }

    /// `(key, height)` pairs in ascending key order.
    pub fn key_height_inorder(&self) -> Vec<(&K, usize)> {
        get_key_height_inorder(&self.arena, self.root)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    /// Multi-line structural dump, `∅` for an empty tree.
    pub fn to_tree_string(&self) -> String
    where
        K: fmt::Debug,
    {
        print(&self.arena, self.root, "")
    }
}

/// In-order iterator over `(key, height)` pairs.
pub struct Iter<'a, K> {
    arena: &'a [AvlNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next_node(self.arena, idx);
        let n = &self.arena[idx as usize];
        Some((&n.k, n.h as usize))
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_many(iter);
        tree
    }
}

/// `key [height]` entries in key order, joined by `", "`.
impl<K, C> fmt::Display for AvlTree<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Tree is empty!!!");
        }
        for (i, (k, h)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k} [{h}]")?;
        }
        Ok(())
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
