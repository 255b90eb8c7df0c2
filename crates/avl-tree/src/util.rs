//! Link-level helpers shared by every arena tree in the crate.

use log::debug;

use crate::types::Node;

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}
#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}
#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`, climbing through parent links when the
/// right subtree is empty.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Replaces whichever child edge of `parent` points at `old` with `new`.
pub fn replace_child<N: Node>(arena: &mut [N], parent: u32, old: u32, new: Option<u32>) {
    let p = &mut arena[parent as usize];
    if p.l() == Some(old) {
        p.set_l(new);
    } else {
        debug_assert_eq!(p.r(), Some(old), "parent link does not own child");
        p.set_r(new);
    }
}

/// Removes the detached node at `idx` from the arena and returns it.
///
/// The last arena entry is moved into the freed slot and its neighbours are
/// re-pointed at `idx`. Returns the removed node and, if a node was moved,
/// the index it used to occupy, so the caller can fix a cached root handle.
pub fn release<N: Node>(arena: &mut Vec<N>, idx: u32) -> (N, Option<u32>) {
    let last = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(idx as usize);
    if idx == last {
        debug!("released node slot {idx}");
        return (removed, None);
    }

    if let Some(p) = get_p(arena, idx) {
        replace_child(arena, p, last, Some(idx));
    }
    if let Some(l) = get_l(arena, idx) {
        arena[l as usize].set_p(Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        arena[r as usize].set_p(Some(idx));
    }
    debug!("released node slot {idx}, moved slot {last} into it");
    (removed, Some(last))
}
