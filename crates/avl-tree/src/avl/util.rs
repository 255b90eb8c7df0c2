//! Node-level AVL operations over an arena.
//!
//! Every function takes the arena plus node indices. Mutations keep the
//! parent links in step with the child links; heights are recomputed from
//! the mutated node up to the root, and the rebalance walk
//! ([`align_subtree`]) always runs to the root so every ancestor is checked.

use std::fmt::Debug;

use log::trace;

use crate::error::{InvariantError, Side};
use crate::types::Node;
use crate::util::{first, last, next, replace_child};

use super::types::AvlNodeLike;

#[inline]
fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Cached height of `node`, `-1` when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

/// Balance factor, `height(left) - height(right)`.
#[inline]
pub fn balance<N: AvlNodeLike>(arena: &[N], node: u32) -> i32 {
    let n = &arena[node as usize];
    height(arena, n.l()) - height(arena, n.r())
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], node: u32) {
    let n = &arena[node as usize];
    let h = 1 + height(arena, n.l()).max(height(arena, n.r()));
    arena[node as usize].set_height(h);
}

/// Recomputes cached heights from `start` through every ancestor.
pub fn recalculate_height_up<N: AvlNodeLike>(arena: &mut [N], start: u32) {
    let mut curr = Some(start);
    while let Some(i) = curr {
        update_height(arena, i);
        curr = arena[i as usize].p();
    }
}

/// Number of present children, 0 to 2.
pub fn child_count<N: Node>(arena: &[N], node: u32) -> usize {
    let n = &arena[node as usize];
    n.l().is_some() as usize + n.r().is_some() as usize
}

/// Promotes the right child of `n` into its place. Returns the new local root.
pub fn left_rotation<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let p = arena[n as usize].p();
    let nr = arena[n as usize]
        .r()
        .expect("left rotation needs a right child");
    let nrl = arena[nr as usize].l();

    set_p(arena, nr, p);
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nr));
    }

    trace!("left rotation at node {n}, promoted node {nr}");
    recalculate_height_up(arena, n);
    nr
}

/// Promotes the left child of `n` into its place. Returns the new local root.
pub fn right_rotation<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let p = arena[n as usize].p();
    let nl = arena[n as usize]
        .l()
        .expect("right rotation needs a left child");
    let nlr = arena[nl as usize].r();

    set_p(arena, nl, p);
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nl));
    }

    trace!("right rotation at node {n}, promoted node {nl}");
    recalculate_height_up(arena, n);
    nl
}

/// Left rotation at the left child, then right rotation at `n`.
pub fn left_right_rotation<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nl = arena[n as usize]
        .l()
        .expect("left-right rotation needs a left child");
    left_rotation(arena, nl);
    right_rotation(arena, n)
}

/// Right rotation at the right child, then left rotation at `n`.
pub fn right_left_rotation<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nr = arena[n as usize]
        .r()
        .expect("right-left rotation needs a right child");
    right_rotation(arena, nr);
    left_rotation(arena, n)
}

/// Rebalance walk from `start` to the root.
///
/// Every node on the path is checked, including those above a rotation.
/// Returns the parentless node the walk ends on.
pub fn align_subtree<N: AvlNodeLike>(arena: &mut [N], start: u32) -> u32 {
    let mut node = start;
    loop {
        let bf = balance(arena, node);
        if bf < -1 {
            let r = arena[node as usize].r().expect("right-heavy node has a right child");
            node = if balance(arena, r) >= 1 {
                right_left_rotation(arena, node)
            } else {
                left_rotation(arena, node)
            };
        } else if bf > 1 {
            let l = arena[node as usize].l().expect("left-heavy node has a left child");
            node = if balance(arena, l) <= -1 {
                left_right_rotation(arena, node)
            } else {
                right_rotation(arena, node)
            };
        }
        match arena[node as usize].p() {
            Some(p) => node = p,
            None => return node,
        }
    }
}

/// Inserts `key` below `root`.
///
/// Returns the root reported by the rebalance walk, or `None` when an equal
/// key is already present and nothing changed.
pub fn insert<N, C>(arena: &mut Vec<N>, root: u32, key: N::Key, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let mut curr = root;
    loop {
        let cmp = comparator(&key, arena[curr as usize].key());
        if cmp == 0 {
            return None;
        }
        let child = if cmp < 0 {
            arena[curr as usize].l()
        } else {
            arena[curr as usize].r()
        };
        match child {
            Some(child) => curr = child,
            None => {
                let n = arena.len() as u32;
                let mut leaf = N::leaf(key);
                leaf.set_p(Some(curr));
                arena.push(leaf);
                if cmp < 0 {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                recalculate_height_up(arena, n);
                return Some(align_subtree(arena, n));
            }
        }
    }
}

pub fn find<N, C>(arena: &[N], root: Option<u32>, key: &N::Key, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        curr = match cmp {
            0 => return Some(i),
            c if c < 0 => arena[i as usize].l(),
            _ => arena[i as usize].r(),
        };
    }
    None
}

/// Leftmost node of the subtree at `node`.
pub fn min<N: Node>(arena: &[N], node: u32) -> u32 {
    first(arena, Some(node)).unwrap_or(node)
}

/// Rightmost node of the subtree at `node`.
pub fn max<N: Node>(arena: &[N], node: u32) -> u32 {
    last(arena, Some(node)).unwrap_or(node)
}

/// Outcome of [`remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Root after rebalancing; `None` once the last node is gone.
    pub root: Option<u32>,
    /// Detached slot still held by the arena, holding the removed key.
    pub freed: u32,
}

/// Unlinks a node with at most one child.
///
/// Returns the node heights must be recomputed from: the parent for a leaf,
/// the promoted child otherwise. `None` when a childless root was unlinked.
fn unlink<N: Node>(arena: &mut [N], node: u32) -> Option<u32> {
    let p = arena[node as usize].p();
    let child = arena[node as usize].l().or(arena[node as usize].r());
    debug_assert!(child_count(arena, node) < 2);

    if let Some(p) = p {
        replace_child(arena, p, node, child);
    }
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    child.or(p)
}

fn swap_keys<N: AvlNodeLike>(arena: &mut [N], a: u32, b: u32) {
    let (a, b) = (a as usize, b as usize);
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi);
    std::mem::swap(head[lo].key_mut(), tail[0].key_mut());
}

/// Removes `key` from the tree at `root`.
///
/// A node with two children keeps its slot and takes its in-order
/// successor's key; the successor's slot is unlinked instead. The unlinked
/// slot is reported in [`Removal::freed`] and must be released by the caller.
/// Returns `None` when the key is absent.
pub fn remove<N, C>(arena: &mut [N], root: u32, key: &N::Key, comparator: &C) -> Option<Removal>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let node = find(arena, Some(root), key, comparator)?;

    let (start, freed) = match (arena[node as usize].l(), arena[node as usize].r()) {
        (Some(_), Some(r)) => {
            let successor = min(arena, r);
            swap_keys(arena, node, successor);
            (unlink(arena, successor), successor)
        }
        _ => (unlink(arena, node), node),
    };

    let root = start.map(|s| {
        recalculate_height_up(arena, s);
        align_subtree(arena, s)
    });
    Some(Removal { root, freed })
}

/// `(key, height)` pairs in ascending key order.
pub fn get_key_height_inorder<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Vec<(&N::Key, usize)> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        let n = &arena[i as usize];
        out.push((n.key(), n.height() as usize));
        curr = next(arena, i);
    }
    out
}

/// Checks order, parent links, cached heights and balance of the whole arena.
pub fn assert_avl_tree<N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), InvariantError>
where
    N: AvlNodeLike,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let Some(root) = root else {
        if arena.is_empty() {
            return Ok(());
        }
        return Err(InvariantError::Unreachable {
            arena: arena.len(),
            reachable: 0,
        });
    };

    if root as usize >= arena.len() {
        return Err(InvariantError::RootMismatch);
    }
    if arena[root as usize].p().is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    // Returns the recomputed height of the subtree at `node`.
    fn validate<N: AvlNodeLike>(arena: &[N], node: u32, count: &mut usize) -> Result<i32, InvariantError> {
        *count += 1;
        let n = &arena[node as usize];

        let mut lh = -1;
        if let Some(l) = n.l() {
            if arena[l as usize].p() != Some(node) {
                return Err(InvariantError::BrokenParentLink { node, side: Side::Left });
            }
            lh = validate(arena, l, count)?;
        }
        let mut rh = -1;
        if let Some(r) = n.r() {
            if arena[r as usize].p() != Some(node) {
                return Err(InvariantError::BrokenParentLink { node, side: Side::Right });
            }
            rh = validate(arena, r, count)?;
        }

        let expected = 1 + lh.max(rh);
        if n.height() != expected {
            return Err(InvariantError::HeightMismatch {
                node,
                expected,
                actual: n.height(),
            });
        }
        let balance = lh - rh;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced { node, balance });
        }
        Ok(expected)
    }

    let mut reachable = 0;
    validate(arena, root, &mut reachable)?;
    if reachable != arena.len() {
        return Err(InvariantError::Unreachable {
            arena: arena.len(),
            reachable,
        });
    }

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(InvariantError::OrderViolated(i));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer: one `key [height]` line per node, children below it.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Key: Debug,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let head = format!("{:?} [{}]", n.key(), n.height());
    if n.l().is_none() && n.r().is_none() {
        return head;
    }
    // Left child first; an absent child prints as `∅`.
    let left = print(arena, n.l(), &format!("{tab}│  "));
    let right = print(arena, n.r(), &format!("{tab}   "));
    format!("{head}\n{tab}├─ {left}\n{tab}└─ {right}")
}
