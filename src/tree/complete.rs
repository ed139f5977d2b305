//! Complete-tree array convention
//!
//! Cells `elements[1..=n]` (index 0 unused) encode the unique complete
//! binary tree with `n` nodes:
//!   parent of i:  i / 2
//!   left of i:    2i
//!   right of i:   2i + 1
//!
//! The live tree need not be complete; the convention only applies when
//! building from or flattening to an array.

use super::node::{Link, Node};

/// Array index of the root
pub const ROOT_INDEX: usize = 1;

/// Index of the parent of `index` (root's parent is 0, the unused cell)
#[inline]
pub fn parent_index(index: usize) -> usize {
    index / 2
}

/// Index of the left child of `index`
///
/// Saturates at `usize::MAX` for positions deeper than the address space.
#[inline]
pub fn left_index(index: usize) -> usize {
    index.saturating_mul(2)
}

/// Index of the right child of `index` (saturating, like [`left_index`])
#[inline]
pub fn right_index(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

/// Height of the complete tree with `n` nodes: `floor(log2 n) + 1`, 0 if empty
pub fn complete_tree_height(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

/// Leaves of the complete tree with `n` nodes
pub fn complete_tree_leaf_count(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) / 2
    }
}

/// Build the subtree rooted at array position `index`.
///
/// Caller guarantees `elements.len() > n`.
pub(crate) fn build<T: Clone>(elements: &[T], n: usize, index: usize) -> Link<T> {
    if index > n {
        return None;
    }
    Some(Box::new(Node::with_children(
        elements[index].clone(),
        build(elements, n, left_index(index)),
        build(elements, n, right_index(index)),
    )))
}

/// Write the subtree rooted at `node` (array position `index`) into `out`.
///
/// Cells past `max` are skipped, but the walk continues so `max_index`
/// still records the furthest position reached.
pub(crate) fn flatten<T: Clone>(
    link: &Link<T>,
    out: &mut [T],
    max: usize,
    index: usize,
    max_index: &mut usize,
) {
    let Some(node) = link.as_deref() else {
        return;
    };

    *max_index = (*max_index).max(index);
    if index <= max {
        out[index] = node.element().clone();
    }

    flatten(node.left_link(), out, max, left_index(index), max_index);
    flatten(node.right_link(), out, max, right_index(index), max_index);
}

/// Collect every node with index `<= max` into `cells[index]`, growing the
/// vector as needed. Descendants of a position past `max` lie past it too,
/// so the walk stops there.
pub(crate) fn collect<T: Clone>(
    link: &Link<T>,
    index: usize,
    max: usize,
    cells: &mut Vec<Option<T>>,
) {
    let Some(node) = link.as_deref() else {
        return;
    };
    if index > max {
        return;
    }
    if cells.len() <= index {
        cells.resize(index + 1, None);
    }
    cells[index] = Some(node.element().clone());
    collect(node.left_link(), left_index(index), max, cells);
    collect(node.right_link(), right_index(index), max, cells);
}

/// Largest array position occupied by the subtree rooted at `index`
pub(crate) fn max_index<T>(link: &Link<T>, index: usize) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => index
            .max(max_index(node.left_link(), left_index(index)))
            .max(max_index(node.right_link(), right_index(index))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(left_index(ROOT_INDEX), 2);
        assert_eq!(right_index(ROOT_INDEX), 3);
        assert_eq!(left_index(3), 6);
        assert_eq!(right_index(3), 7);
        for i in 1..64 {
            assert_eq!(parent_index(left_index(i)), i);
            assert_eq!(parent_index(right_index(i)), i);
        }
    }

    #[test]
    fn test_complete_tree_height_formula() {
        assert_eq!(complete_tree_height(0), 0);
        assert_eq!(complete_tree_height(1), 1);
        assert_eq!(complete_tree_height(2), 2);
        assert_eq!(complete_tree_height(3), 2);
        assert_eq!(complete_tree_height(4), 3);
        assert_eq!(complete_tree_height(7), 3);
        assert_eq!(complete_tree_height(8), 4);
    }

    #[test]
    fn test_build_then_flatten() {
        let elements = [0, 10, 20, 30, 40, 50];
        let root = build(&elements, 5, ROOT_INDEX);

        let mut out = [0; 6];
        let mut reached = ROOT_INDEX;
        flatten(&root, &mut out, 5, ROOT_INDEX, &mut reached);
        assert_eq!(reached, 5);
        assert_eq!(out[1..], elements[1..]);
        assert_eq!(max_index(&root, ROOT_INDEX), 5);
    }

    #[test]
    fn test_flatten_truncates_but_reports_extent() {
        let elements = [0, 1, 2, 3, 4, 5, 6, 7];
        let root = build(&elements, 7, ROOT_INDEX);

        let mut out = [0; 4];
        let mut reached = ROOT_INDEX;
        flatten(&root, &mut out, 3, ROOT_INDEX, &mut reached);
        assert_eq!(reached, 7);
        assert_eq!(out, [0, 1, 2, 3]);
    }
}
