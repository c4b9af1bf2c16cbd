//! Ordered self-balancing tree facade.

mod balance;
mod node;

pub use node::AvlNode;

use std::fmt;

use thiserror::Error;

use crate::render::{self, GraphView};
use crate::traverse::in_order;

/// Raised by [`AvlTree::assert_valid`] when height or ordering bookkeeping
/// is broken. Never expected at runtime; a failed check is a defect in the
/// mutation engine, not a recoverable condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("stored height {stored} != computed height {computed}")]
    HeightMismatch { stored: i32, computed: i32 },
    #[error("balance factor {0} outside [-1, 1]")]
    BalanceOutOfRange(i32),
    #[error("in-order sequence is not strictly increasing")]
    OrderViolated,
}

/// Ordered facade over an arena of [`AvlNode`]s.
///
/// Owns the root slot exclusively; every mutating call runs to completion
/// and leaves the tree height-consistent and balanced. Removed nodes become
/// unreachable arena slots and are not reused.
pub struct AvlTree<K> {
    root: Option<u32>,
    len: usize,
    arena: Vec<AvlNode<K>>,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            arena: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        balance::height_of(&self.arena, self.root)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i as usize].key)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        in_order(&self.arena, self.root).map(|i| &self.arena[i as usize].key)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.arena.clear();
    }

    /// Breadth-first nodes plus labeled child edges, for the top-to-bottom
    /// drawing.
    pub fn layered_view<F: Fn(&K) -> String>(&self, label: F) -> GraphView {
        render::layered(&self.arena, self.root, |n: &AvlNode<K>| label(&n.key))
    }

    /// In-order nodes chained by invisible edges, for the left-to-right
    /// demonstration drawing.
    pub fn lined_view<F: Fn(&K) -> String>(&self, label: F) -> GraphView {
        render::lined(&self.arena, self.root, |n: &AvlNode<K>| label(&n.key))
    }
}

impl<K: Ord> AvlTree<K> {
    /// Non-mutating ordered search.
    pub fn contains(&self, value: &K) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            curr = match value.cmp(&n.key) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => n.l,
                std::cmp::Ordering::Greater => n.r,
            };
        }
        false
    }

    /// Walks the whole tree checking stored heights, the balance bound and
    /// strict key ordering.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        balance::check_subtree(&self.arena, self.root)?;

        let mut prev: Option<&K> = None;
        for i in in_order(&self.arena, self.root) {
            let key = &self.arena[i as usize].key;
            if let Some(prev) = prev {
                if prev >= key {
                    return Err(InvariantError::OrderViolated);
                }
            }
            prev = Some(key);
        }

        Ok(())
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Inserts `value`, rebalancing on the way back up. An already-present
    /// key is a no-op; returns whether a node was added.
    pub fn insert(&mut self, value: K) -> bool {
        let before = self.arena.len();
        self.root = Some(balance::inserted(&mut self.arena, self.root, &value));
        let grown = self.arena.len() > before;
        if grown {
            self.len += 1;
        }
        grown
    }

    /// Removes `value` if present, rebalancing on the way back up.
    pub fn remove(&mut self, value: &K) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.root = balance::removed(&mut self.arena, self.root, value);
        self.len -= 1;
        true
    }

    /// `remove(old)` then `insert(new)`: two full rebalancing passes, not
    /// an in-place key edit. An absent `old` does not suppress the insert.
    pub fn replace(&mut self, old: &K, new: K) {
        self.remove(old);
        self.insert(new);
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Display> AvlTree<K> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: u32, tab: &str, side: &str) -> fmt::Result {
        let n = &self.arena[node as usize];
        write!(f, "\n{tab}{side} {} (h={})", n.key, n.height)?;
        if let Some(l) = n.l {
            self.fmt_node(f, l, &format!("{tab}  "), "←")?;
        }
        if let Some(r) = n.r {
            self.fmt_node(f, r, &format!("{tab}  "), "→")?;
        }
        Ok(())
    }
}

impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => write!(f, "AvlTree ∅"),
            Some(root) => {
                write!(f, "AvlTree")?;
                self.fmt_node(f, root, "", "└─")
            }
        }
    }
}
