//! Arena-backed AVL tree.
//!
//! Every node caches the height of its subtree and keeps a parent link, so
//! after an insertion or deletion the tree is repaired by walking from the
//! changed node up to the root, recomputing heights and rotating wherever a
//! balance factor leaves `-1..=1`.
//!
//! Instead of owning pointers, nodes live in a `Vec` arena owned by the
//! tree and all links are `Option<u32>` indices into it. The parent index is
//! only ever followed upward.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, comparator helpers |
//! | [`util`] | `first`, `last`, `next`, `release` over any linked arena |
//! | [`avl::util`] | rotations, rebalance walk, node-level insert/find/remove, tree dump |
//! | [`avl::tree`] | [`AvlTree`] container |
//! | [`error`] | [`InvariantError`] reported by the validators |

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlNodeLike, AvlTree};
pub use error::{InvariantError, Side};
pub use types::{default_comparator, Comparator, Node};
pub use util::{first, last, next};
