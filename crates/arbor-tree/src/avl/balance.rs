//! Recursive insert/remove with post-mutation rebalancing.
//!
//! Every function takes the arena plus a subtree root and returns the
//! (possibly new) subtree root; callers rewrite the child slot they
//! descended through. Heights are recomputed on each unwind step and at
//! most one rebalancing rotation is applied per level.

use std::cmp::Ordering;

use crate::rotate;
use crate::traverse::leftest;

use super::node::AvlNode;
use super::InvariantError;

pub(super) fn height_of<K>(arena: &[AvlNode<K>], node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i as usize].height)
}

/// `height(l) - height(r)`; 0 for an absent node.
pub(super) fn balance_factor<K>(arena: &[AvlNode<K>], node: Option<u32>) -> i32 {
    node.map_or(0, |i| {
        let n = &arena[i as usize];
        height_of(arena, n.l) - height_of(arena, n.r)
    })
}

fn update_height<K>(arena: &mut [AvlNode<K>], n: u32) {
    let (l, r) = {
        let n = &arena[n as usize];
        (n.l, n.r)
    };
    arena[n as usize].height = 1 + height_of(arena, l).max(height_of(arena, r));
}

/// Left rotation plus height fixups, demoted node first.
fn rotated_left<K>(arena: &mut [AvlNode<K>], n: u32) -> u32 {
    let root = rotate::rotate_left(arena, n);
    update_height(arena, n);
    update_height(arena, root);
    root
}

fn rotated_right<K>(arena: &mut [AvlNode<K>], n: u32) -> u32 {
    let root = rotate::rotate_right(arena, n);
    update_height(arena, n);
    update_height(arena, root);
    root
}

/// Ordered insert; a duplicate key leaves the subtree untouched.
pub(super) fn inserted<K: Ord + Clone>(
    arena: &mut Vec<AvlNode<K>>,
    node: Option<u32>,
    value: &K,
) -> u32 {
    let Some(n) = node else {
        arena.push(AvlNode::new(value.clone()));
        return (arena.len() - 1) as u32;
    };

    match value.cmp(&arena[n as usize].key) {
        Ordering::Less => {
            let child = arena[n as usize].l;
            let l = inserted(arena, child, value);
            arena[n as usize].l = Some(l);
        }
        Ordering::Greater => {
            let child = arena[n as usize].r;
            let r = inserted(arena, child, value);
            arena[n as usize].r = Some(r);
        }
        Ordering::Equal => return n,
    }

    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));

    if balance > 1 {
        let l = arena[n as usize].l.expect("left child exists");
        if *value < arena[l as usize].key {
            return rotated_right(arena, n);
        }
        if *value > arena[l as usize].key {
            // left child leans right: straighten it out first
            let l = rotated_left(arena, l);
            arena[n as usize].l = Some(l);
            return rotated_right(arena, n);
        }
    } else if balance < -1 {
        let r = arena[n as usize].r.expect("right child exists");
        if *value > arena[r as usize].key {
            return rotated_left(arena, n);
        }
        if *value < arena[r as usize].key {
            let r = rotated_right(arena, r);
            arena[n as usize].r = Some(r);
            return rotated_left(arena, n);
        }
    }

    n
}

/// Ordered remove; a two-children target takes over the minimum key of its
/// right subtree, which is then removed from that subtree.
pub(super) fn removed<K: Ord + Clone>(
    arena: &mut Vec<AvlNode<K>>,
    node: Option<u32>,
    value: &K,
) -> Option<u32> {
    let n = node?;

    let mut new_root = n;
    match value.cmp(&arena[n as usize].key) {
        Ordering::Less => {
            let child = arena[n as usize].l;
            let l = removed(arena, child, value);
            arena[n as usize].l = l;
        }
        Ordering::Greater => {
            let child = arena[n as usize].r;
            let r = removed(arena, child, value);
            arena[n as usize].r = r;
        }
        Ordering::Equal => {
            let (l, r) = {
                let n = &arena[n as usize];
                (n.l, n.r)
            };
            if l.is_none() || r.is_none() {
                match l.or(r) {
                    Some(child) => new_root = child,
                    None => return None,
                }
            } else {
                let right = r.expect("right child exists");
                let replacer = arena[leftest(arena, right) as usize].key.clone();
                let r = removed(arena, Some(right), &replacer);
                arena[n as usize].r = r;
                arena[n as usize].key = replacer;
            }
        }
    }

    update_height(arena, new_root);
    let balance = balance_factor(arena, Some(new_root));
    let (l, r) = {
        let m = &arena[new_root as usize];
        (m.l, m.r)
    };

    if balance > 1 {
        if balance_factor(arena, l) >= 0 {
            return Some(rotated_right(arena, new_root));
        }
        let l = l.expect("left child exists");
        let l = rotated_left(arena, l);
        arena[new_root as usize].l = Some(l);
        return Some(rotated_right(arena, new_root));
    }
    if balance < -1 {
        if balance_factor(arena, r) <= 0 {
            return Some(rotated_left(arena, new_root));
        }
        let r = r.expect("right child exists");
        let r = rotated_right(arena, r);
        arena[new_root as usize].r = Some(r);
        return Some(rotated_left(arena, new_root));
    }

    Some(new_root)
}

/// Recomputes heights bottom-up, checking the stored height and the balance
/// bound at every node. Returns the subtree height.
pub(super) fn check_subtree<K>(
    arena: &[AvlNode<K>],
    node: Option<u32>,
) -> Result<i32, InvariantError> {
    let Some(n) = node else {
        return Ok(0);
    };

    let (l, r) = {
        let n = &arena[n as usize];
        (n.l, n.r)
    };
    let lh = check_subtree(arena, l)?;
    let rh = check_subtree(arena, r)?;

    let computed = 1 + lh.max(rh);
    let stored = arena[n as usize].height;
    if stored != computed {
        return Err(InvariantError::HeightMismatch { stored, computed });
    }

    let balance = lh - rh;
    if !(-1..=1).contains(&balance) {
        return Err(InvariantError::BalanceOutOfRange(balance));
    }

    Ok(computed)
}
