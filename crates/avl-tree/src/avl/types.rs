use crate::types::Node;

/// AVL tree vertex stored in the tree's arena.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Height of the subtree rooted here; a leaf is 0.
    pub h: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            h: 0,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// AVL-specific node behavior: a key and a cached height.
pub trait AvlNodeLike: Node {
    type Key;

    fn leaf(key: Self::Key) -> Self
    where
        Self: Sized;
    fn key(&self) -> &Self::Key;
    fn key_mut(&mut self) -> &mut Self::Key;
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<K> AvlNodeLike for AvlNode<K> {
    type Key = K;

    fn leaf(key: K) -> Self {
        Self::new(key)
    }

    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }

    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
