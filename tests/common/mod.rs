//! Shared tree builders for integration tests

#![allow(dead_code)]

use bintree_layout::{BinaryTree, Link, Node, Order};

/// Complete tree holding `1..=n` (cell 0 unused)
pub fn complete(n: usize) -> BinaryTree<i32> {
    let elements: Vec<i32> = (0..=n as i32).collect();
    BinaryTree::from_complete(&elements, n).expect("array holds n + 1 cells")
}

/// Hand-built, deliberately unbalanced tree:
///
/// ```text
///       10
///      /
///     20
///       \
///        30
///       /  \
///      40   50
/// ```
pub fn lopsided() -> BinaryTree<i32> {
    let thirty = Node::with_children(
        30,
        Some(Box::new(Node::leaf(40))),
        Some(Box::new(Node::leaf(50))),
    );
    let twenty = Node::with_children(20, None, Some(Box::new(thirty)));
    BinaryTree::from(Node::with_children(10, Some(Box::new(twenty)), None))
}

/// Tree containing complete-tree position `i` iff `mask[i - 1]` is set and
/// its parent is present; the element at position `i` is `i`.
pub fn masked(mask: &[bool]) -> BinaryTree<usize> {
    fn build(index: usize, mask: &[bool]) -> Link<usize> {
        if index > mask.len() || !mask[index - 1] {
            return None;
        }
        Some(Box::new(Node::with_children(
            index,
            build(2 * index, mask),
            build(2 * index + 1, mask),
        )))
    }
    match build(1, mask) {
        Some(root) => BinaryTree::from(*root),
        None => BinaryTree::new(),
    }
}

/// Elements in traversal order
pub fn collect<T: Clone>(tree: &BinaryTree<T>, order: Order) -> Vec<T> {
    let mut seen = Vec::new();
    tree.traverse(order, |e| seen.push(e.clone()));
    seen
}
