//! Recursive depth-first traversal
//!
//! Visitors receive each element exactly once by shared reference.
//! Empty subtrees are no-ops.

use super::node::{Link, Node};

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree
    Preorder,

    /// Left subtree, node, right subtree
    Inorder,

    /// Left subtree, right subtree, node
    Postorder,
}

/// Which child slot to descend into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left child
    Left,

    /// Right child
    Right,
}

/// Apply `visit` to every element below `link` in the given order
pub(crate) fn walk<T, F>(link: &Link<T>, order: Order, visit: &mut F)
where
    F: FnMut(&T),
{
    let Some(node) = link.as_deref() else {
        return;
    };

    if order == Order::Preorder {
        visit(node.element());
    }
    walk(node.left_link(), order, visit);
    if order == Order::Inorder {
        visit(node.element());
    }
    walk(node.right_link(), order, visit);
    if order == Order::Postorder {
        visit(node.element());
    }
}

/// Follow `path` from `node`, returning the node reached (if every step exists)
pub(crate) fn descend<'a, T>(mut node: &'a Node<T>, path: &[Direction]) -> Option<&'a Node<T>> {
    for step in path {
        node = match step {
            Direction::Left => node.left()?,
            Direction::Right => node.right()?,
        };
    }
    Some(node)
}

/// Mutable counterpart of [`descend`]
pub(crate) fn descend_mut<'a, T>(
    mut node: &'a mut Node<T>,
    path: &[Direction],
) -> Option<&'a mut Node<T>> {
    for step in path {
        node = match step {
            Direction::Left => node.left_mut()?,
            Direction::Right => node.right_mut()?,
        };
    }
    Some(node)
}
