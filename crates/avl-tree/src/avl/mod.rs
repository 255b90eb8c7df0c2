//! AVL tree: node layer ([`util`]) and container ([`AvlTree`]).

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{AvlTree, Iter};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, find, insert, print, remove, Removal};
