//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every link
//! (`p`, `l`, `r`) is an `Option<u32>` index into that arena, so the parent
//! link never owns anything: it is only followed upward.

/// Parent/left/right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Three-way comparator used by the tree: negative, zero or positive.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Natural-order comparator for any `PartialOrd` key.
///
/// Only sound for totally ordered values: an incomparable key such as
/// `f64::NAN` compares greater than everything in both argument orders. The
/// container's natural-order constructors therefore require `Ord`; float
/// keys go through [`AvlTree::with_comparator`](crate::AvlTree::with_comparator)
/// with e.g. `f64::total_cmp`.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
