use thiserror::Error;

/// Which child edge of a node a [`InvariantError::BrokenParentLink`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A structural defect found by [`assert_avl_tree`](crate::avl::util::assert_avl_tree).
///
/// Node indices refer to the tree's arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("tree root handle does not match the parentless node")]
    RootMismatch,
    #[error("{side} child of node {node} does not point back to it")]
    BrokenParentLink { node: u32, side: Side },
    #[error("node {node} caches height {actual}, expected {expected}")]
    HeightMismatch {
        node: u32,
        expected: i32,
        actual: i32,
    },
    #[error("node {node} has balance factor {balance}")]
    Unbalanced { node: u32, balance: i32 },
    #[error("in-order keys are not strictly ascending at node {0}")]
    OrderViolated(u32),
    #[error("arena holds {arena} nodes but {reachable} are reachable from the root")]
    Unreachable { arena: usize, reachable: usize },
}
