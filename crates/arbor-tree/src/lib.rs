//! Interactive binary-tree workbench core.
//!
//! Implements the data model behind a tree-visualization desktop app: an
//! ordered, self-balancing [`AvlTree`] and a free-form [`BinaryTree`] that a
//! user mutates one command at a time, plus the traversal and edge-list
//! views a graph renderer needs to draw them.
//!
//! Nodes live in a `Vec` arena owned by their facade; every link is an
//! `Option<u32>` index into that arena. There are no parent pointers:
//! mutations are recursive functions that hand the new subtree root back to
//! the caller, which rewrites the child slot (or the facade's root slot) it
//! descended through.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait shared by both node layouts |
//! | [`node`] | [`PlainNode`], the payload node of the unmanaged tree |
//! | [`traverse`] | in-order and breadth-first iterators, [`leftest`] |
//! | [`rotate`] | raw rotation primitives and their `can_rotate_*` predicates |
//! | [`avl`] | [`AvlTree`], the ordered facade with height bookkeeping |
//! | [`binary`] | [`BinaryTree`], the unmanaged facade with positional mutation |
//! | [`render`] | [`GraphView`] edge lists handed to the external renderer |

pub mod avl;
pub mod binary;
pub mod node;
pub mod render;
pub mod rotate;
pub mod traverse;
pub mod types;

pub use avl::{AvlNode, AvlTree, InvariantError};
pub use binary::BinaryTree;
pub use node::PlainNode;
pub use render::{Edge, EdgeKind, GraphView};
pub use traverse::{breadth_first, in_order, leftest, rightest};
pub use types::Node;
