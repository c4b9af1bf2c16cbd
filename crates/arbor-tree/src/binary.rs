//! Unmanaged binary tree facade.
//!
//! No ordering invariant; the user decides where things go. Targets are
//! found by value equality, the first breadth-first match wins, and the
//! tree always keeps at least one node. Expected failures (absent target,
//! unmet structural precondition) come back as `false` with no side effect.

use std::fmt;

use crate::node::PlainNode;
use crate::render::{self, GraphView};
use crate::rotate;
use crate::traverse::{breadth_first, in_order, rightest};

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Free-form tree over an arena of [`PlainNode`]s.
///
/// Owns the root slot exclusively; rotations reassign child links of
/// existing nodes, so no outside reference into the structure survives a
/// mutating call. Removed nodes become unreachable arena slots.
pub struct BinaryTree<T> {
    root: u32,
    len: usize,
    arena: Vec<PlainNode<T>>,
}

impl<T> BinaryTree<T> {
    pub fn new(root_value: T) -> Self {
        Self {
            root: 0,
            len: 1,
            arena: vec![PlainNode::new(root_value)],
        }
    }

    /// Builds a complete tree in level order: node `i`'s children sit at
    /// `2i + 1` and `2i + 2`. `None` for an empty input.
    pub fn from_level_order<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        let mut arena: Vec<PlainNode<T>> = values.into_iter().map(PlainNode::new).collect();
        let len = arena.len();
        if len == 0 {
            return None;
        }

        for i in 0..len {
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < len {
                arena[i].l = Some(l as u32);
            }
            if r < len {
                arena[i].r = Some(r as u32);
            }
        }

        Some(Self {
            root: 0,
            len,
            arena,
        })
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root_value(&self) -> &T {
        &self.arena[self.root as usize].value
    }

    /// Values left-to-right (in-order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        in_order(&self.arena, Some(self.root)).map(|i| &self.arena[i as usize].value)
    }

    /// Values level by level, top to bottom.
    pub fn iter_breadth_first(&self) -> impl Iterator<Item = &T> {
        breadth_first(&self.arena, Some(self.root)).map(|i| &self.arena[i as usize].value)
    }

    /// Breadth-first nodes plus labeled child edges, for the top-to-bottom
    /// drawing.
    pub fn layered_view<F: Fn(&T) -> String>(&self, label: F) -> GraphView {
        render::layered(&self.arena, Some(self.root), |n: &PlainNode<T>| {
            label(&n.value)
        })
    }

    /// In-order nodes chained by invisible edges, for the left-to-right
    /// demonstration drawing.
    pub fn lined_view<F: Fn(&T) -> String>(&self, label: F) -> GraphView {
        render::lined(&self.arena, Some(self.root), |n: &PlainNode<T>| {
            label(&n.value)
        })
    }

    fn push(&mut self, value: T) -> u32 {
        self.arena.push(PlainNode::new(value));
        (self.arena.len() - 1) as u32
    }

    fn set_slot(&mut self, parent: u32, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.arena[parent as usize].l = v,
            Side::Right => self.arena[parent as usize].r = v,
        }
    }
}

impl<T: PartialEq> BinaryTree<T> {
    /// First breadth-first node holding `target`.
    fn find(&self, target: &T) -> Option<u32> {
        breadth_first(&self.arena, Some(self.root)).find(|&i| self.arena[i as usize].value == *target)
    }

    /// Locates `target` plus the parent slot pointing at it; the root has
    /// no parent slot. Each visited node is checked left slot first, then
    /// right slot, then itself, so a parent is always captured when one
    /// exists.
    fn find_with_parent(&self, target: &T) -> Option<(u32, Option<(u32, Side)>)> {
        for i in breadth_first(&self.arena, Some(self.root)) {
            let n = &self.arena[i as usize];
            if let Some(l) = n.l {
                if self.arena[l as usize].value == *target {
                    return Some((l, Some((i, Side::Left))));
                }
            }
            if let Some(r) = n.r {
                if self.arena[r as usize].value == *target {
                    return Some((r, Some((i, Side::Right))));
                }
            }
            if n.value == *target {
                return Some((i, None));
            }
        }
        None
    }

    /// Rewrites the parent slot (or the root slot) to `promoted`, dropping
    /// the node it used to hold. Refuses to leave the tree empty.
    fn detach(&mut self, parent: Option<(u32, Side)>, promoted: Option<u32>) -> bool {
        match parent {
            None => match promoted {
                // cannot leave the tree without a root
                None => false,
                Some(child) => {
                    self.root = child;
                    self.len -= 1;
                    true
                }
            },
            Some((p, side)) => {
                self.set_slot(p, side, promoted);
                self.len -= 1;
                true
            }
        }
    }

    /// Hangs a new leaf off `target`'s first free child slot, left before
    /// right. Fails when the target is absent or full.
    pub fn attach(&mut self, target: &T, value: T) -> bool {
        let Some(i) = self.find(target) else {
            return false;
        };

        if self.arena[i as usize].l.is_none() {
            let leaf = self.push(value);
            self.arena[i as usize].l = Some(leaf);
            self.len += 1;
            return true;
        }
        if self.arena[i as usize].r.is_none() {
            let leaf = self.push(value);
            self.arena[i as usize].r = Some(leaf);
            self.len += 1;
            return true;
        }

        false
    }

    /// Splices out `target`, promoting its single child. Refuses a
    /// two-children target (ambiguous promotion) and a childless root.
    pub fn remove(&mut self, target: &T) -> bool {
        let Some((node, parent)) = self.find_with_parent(target) else {
            return false;
        };

        let (l, r) = {
            let n = &self.arena[node as usize];
            (n.l, n.r)
        };
        if l.is_some() && r.is_some() {
            return false;
        }

        self.detach(parent, l.or(r))
    }

    /// Like [`remove`](Self::remove), but a two-children target goes too:
    /// its left child is promoted and the orphaned right subtree is grafted
    /// onto the rightmost node of the promoted subtree, so the
    /// left-to-right sequence is preserved minus the target. A childless
    /// root still refuses.
    pub fn remove_forcefully(&mut self, target: &T) -> bool {
        let Some((node, parent)) = self.find_with_parent(target) else {
            return false;
        };

        let (l, r) = {
            let n = &self.arena[node as usize];
            (n.l, n.r)
        };
        let promoted = match (l, r) {
            (Some(l), Some(r)) => {
                let anchor = rightest(&self.arena, l);
                self.arena[anchor as usize].r = Some(r);
                Some(l)
            }
            _ => l.or(r),
        };

        self.detach(parent, promoted)
    }

    /// In-place value overwrite at the first breadth-first match.
    pub fn replace(&mut self, old: &T, new: T) -> bool {
        match self.find(old) {
            Some(i) => {
                self.arena[i as usize].value = new;
                true
            }
            None => false,
        }
    }

    fn rotate_around(
        &mut self,
        target: &T,
        can: fn(&[PlainNode<T>], u32) -> bool,
        apply: fn(&mut [PlainNode<T>], u32) -> u32,
    ) -> bool {
        let Some((node, parent)) = self.find_with_parent(target) else {
            return false;
        };
        if !can(&self.arena, node) {
            return false;
        }

        let promoted = apply(&mut self.arena, node);
        match parent {
            None => self.root = promoted,
            Some((p, side)) => self.set_slot(p, side, Some(promoted)),
        }
        true
    }

    pub fn rotate_left_around(&mut self, target: &T) -> bool {
        self.rotate_around(target, rotate::can_rotate_left, rotate::rotate_left)
    }

    pub fn rotate_right_around(&mut self, target: &T) -> bool {
        self.rotate_around(target, rotate::can_rotate_right, rotate::rotate_right)
    }

    pub fn rotate_left_right_around(&mut self, target: &T) -> bool {
        self.rotate_around(
            target,
            rotate::can_rotate_left_right,
            rotate::rotate_left_right,
        )
    }

    pub fn rotate_right_left_around(&mut self, target: &T) -> bool {
        self.rotate_around(
            target,
            rotate::can_rotate_right_left,
            rotate::rotate_right_left,
        )
    }

    pub fn can_rotate_left_around(&self, target: &T) -> bool {
        self.find(target)
            .is_some_and(|i| rotate::can_rotate_left(&self.arena, i))
    }

    pub fn can_rotate_right_around(&self, target: &T) -> bool {
        self.find(target)
            .is_some_and(|i| rotate::can_rotate_right(&self.arena, i))
    }

    pub fn can_rotate_left_right_around(&self, target: &T) -> bool {
        self.find(target)
            .is_some_and(|i| rotate::can_rotate_left_right(&self.arena, i))
    }

    pub fn can_rotate_right_left_around(&self, target: &T) -> bool {
        self.find(target)
            .is_some_and(|i| rotate::can_rotate_right_left(&self.arena, i))
    }

    /// Equality scan over the left-to-right sequence.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: u32, tab: &str, side: &str) -> fmt::Result {
        let n = &self.arena[node as usize];
        write!(f, "\n{tab}{side} {}", n.value)?;
        if let Some(l) = n.l {
            self.fmt_node(f, l, &format!("{tab}  "), "←")?;
        }
        if let Some(r) = n.r {
            self.fmt_node(f, r, &format!("{tab}  "), "→")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryTree")?;
        self.fmt_node(f, self.root, "", "└─")
    }
}
