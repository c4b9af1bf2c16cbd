//! Raw rotation primitives.
//!
//! Pure pointer swings over any [`Node`] arena; height bookkeeping is the
//! AVL engine's business. Each `rotate_*` has a `can_rotate_*` predicate
//! exposing its structural precondition. Callers gate on the predicate; the
//! primitive itself panics on a broken contract.

use crate::types::{get_l, get_r, set_l, set_r, Node};

/// True when `n` has a right child to promote.
pub fn can_rotate_left<N: Node>(arena: &[N], n: u32) -> bool {
    get_r(arena, n).is_some()
}

/// True when `n` has a left child to promote.
pub fn can_rotate_right<N: Node>(arena: &[N], n: u32) -> bool {
    get_l(arena, n).is_some()
}

/// True when `n.r.l` exists, the pivot of [`rotate_left_right`].
pub fn can_rotate_left_right<N: Node>(arena: &[N], n: u32) -> bool {
    get_r(arena, n).and_then(|r| get_l(arena, r)).is_some()
}

/// True when `n.l.r` exists, the pivot of [`rotate_right_left`].
pub fn can_rotate_right_left<N: Node>(arena: &[N], n: u32) -> bool {
    get_l(arena, n).and_then(|l| get_r(arena, l)).is_some()
}

/// Promotes `n`'s right child over `n`; returns the new subtree root.
///
/// The promoted node's former left subtree becomes `n`'s new right subtree.
pub fn rotate_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let pivot = get_r(arena, n).expect("right child exists");
    let hand_off = get_l(arena, pivot);

    set_l(arena, pivot, Some(n));
    set_r(arena, n, hand_off);

    pivot
}

/// Promotes `n`'s left child over `n`; returns the new subtree root.
pub fn rotate_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let pivot = get_l(arena, n).expect("left child exists");
    let hand_off = get_r(arena, pivot);

    set_r(arena, pivot, Some(n));
    set_l(arena, n, hand_off);

    pivot
}

/// Rotates `n`'s right child right, then `n` left.
pub fn rotate_left_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let r = get_r(arena, n).expect("right child exists");
    let r = rotate_right(arena, r);
    set_r(arena, n, Some(r));
    rotate_left(arena, n)
}

/// Rotates `n`'s left child left, then `n` right.
pub fn rotate_right_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let l = get_l(arena, n).expect("left child exists");
    let l = rotate_left(arena, l);
    set_l(arena, n, Some(l));
    rotate_right(arena, n)
}
