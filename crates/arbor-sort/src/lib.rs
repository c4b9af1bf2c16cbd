//! Sorting helpers behind the structure-comparison demo.
//!
//! Two ways to produce a sorted sequence: feed everything through an
//! [`AvlTree`] and read the in-order traversal back, or insertion-sort into
//! a growing buffer. The former collapses duplicates (tree keys are
//! unique), the latter keeps them.

use arbor_tree::AvlTree;

/// Sorts by AVL-tree insertion; duplicates collapse.
pub fn avl_tree_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let tree = AvlTree::from_values(values.iter().cloned());
    tree.iter().cloned().collect()
}

/// Insertion-sort baseline: walks to the first element not less than
/// `value` and inserts in front of it; duplicates survive.
pub fn direct_insertion_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        let at = out.iter().position(|v| value <= v).unwrap_or(out.len());
        out.insert(at, value.clone());
    }
    out
}
