//! Owned binary tree
//!
//! The tree exclusively owns every node reachable from its root.
//! Shapes are arbitrary: trees are built from a complete-tree array or
//! composed from subtrees. Copy and equality are structural and never
//! route through the array form.

mod complete;
mod node;
mod traversal;

pub use complete::{
    complete_tree_height, complete_tree_leaf_count, left_index, parent_index, right_index,
    ROOT_INDEX,
};
pub use node::{Link, Node};
pub use traversal::{Direction, Order};

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Errors raised by array conversions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Source slice holds fewer than `requested + 1` cells
    #[error("array holds {available} cells, need {} for {requested} elements", .requested + 1)]
    ArrayTooShort {
        /// Number of elements requested
        requested: usize,
        /// Cells actually available (including the unused cell 0)
        available: usize,
    },

    /// Destination buffer holds fewer than `max + 1` cells
    #[error("buffer holds {available} cells, need {} to write up to index {max}", .max + 1)]
    BufferTooShort {
        /// Highest index the caller asked to write
        max: usize,
        /// Cells actually available
        available: usize,
    },
}

/// Generic binary tree
pub struct BinaryTree<T> {
    /// `None` iff the tree is empty
    root: Link<T>,
}

impl<T> BinaryTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Single-node tree
    pub fn leaf(element: T) -> Self {
        Self::from(Node::leaf(element))
    }

    /// Compose a tree from a root element and two subtrees (moved in)
    pub fn join(element: T, mut left: BinaryTree<T>, mut right: BinaryTree<T>) -> Self {
        Self::from(Node::with_children(
            element,
            left.root.take(),
            right.root.take(),
        ))
    }

    /// Is the tree empty?
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Empty = 0, leaf = 1, otherwise `1 + max(height(left), height(right))`
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        node::node_count(&self.root)
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        node::leaf_count(&self.root)
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable root node, if any
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Give up ownership of the node graph
    pub fn into_root(mut self) -> Link<T> {
        self.root.take()
    }

    /// Node reached by following `path` from the root
    pub fn node_at(&self, path: &[Direction]) -> Option<&Node<T>> {
        traversal::descend(self.root()?, path)
    }

    /// Mutable node reached by following `path` from the root
    pub fn node_at_mut(&mut self, path: &[Direction]) -> Option<&mut Node<T>> {
        traversal::descend_mut(self.root_mut()?, path)
    }

    /// Release every node.
    ///
    /// Iterative, so arbitrarily tall trees tear down without deep recursion.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_left());
            pending.extend(node.take_right());
        }
    }

    /// Visit elements in the given depth-first order
    pub fn traverse<F: FnMut(&T)>(&self, order: Order, mut visit: F) {
        traversal::walk(&self.root, order, &mut visit);
    }

    /// Node, left, right
    pub fn preorder<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::Preorder, visit);
    }

    /// Left, node, right
    pub fn inorder<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::Inorder, visit);
    }

    /// Left, right, node
    pub fn postorder<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::Postorder, visit);
    }

    /// Tree of identical shape whose elements are `f(node)`
    pub fn map<U, F>(&self, mut f: F) -> BinaryTree<U>
    where
        F: FnMut(&Node<T>) -> U,
    {
        BinaryTree {
            root: node::map_subtree(&self.root, &mut f),
        }
    }

    /// Largest complete-tree index occupied by a node (0 if empty)
    pub fn max_index(&self) -> usize {
        complete::max_index(&self.root, ROOT_INDEX)
    }
}

impl<T: Clone> BinaryTree<T> {
    /// Build the complete tree holding `elements[1..=n]`; `elements[0]` is ignored.
    ///
    /// `n == 0` yields an empty tree.
    pub fn from_complete(elements: &[T], n: usize) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        tree.init_complete(elements, n)?;
        Ok(tree)
    }

    /// Replace the contents of this tree with the complete tree over `elements[1..=n]`
    pub fn init_complete(&mut self, elements: &[T], n: usize) -> Result<(), TreeError> {
        if n > 0 && elements.len() <= n {
            return Err(TreeError::ArrayTooShort {
                requested: n,
                available: elements.len(),
            });
        }
        self.clear();
        self.root = complete::build(elements, n, ROOT_INDEX);
        debug!(nodes = n, height = self.height(), "built complete tree");
        Ok(())
    }

    /// Write elements into `out` by complete-tree index (root at 1).
    ///
    /// Only indices `<= max` are written, but the whole tree is walked; the
    /// return value is the largest index reached (0 for an empty tree).
    /// A result greater than `max` means the output was truncated.
    ///
    /// Works on any shape: for incomplete trees the holes in `out` keep
    /// whatever the caller put there.
    pub fn to_flat_array(&self, out: &mut [T], max: usize) -> Result<usize, TreeError> {
        if out.len() <= max {
            return Err(TreeError::BufferTooShort {
                max,
                available: out.len(),
            });
        }
        let mut reached = 0;
        complete::flatten(&self.root, out, max, ROOT_INDEX, &mut reached);
        if reached > max {
            debug!(max, reached, "flattened tree truncated");
        }
        Ok(reached)
    }

    /// Complete-tree array of any shape: `cells[i]` holds the element at
    /// index `i`, holes and cell 0 are `None`.
    ///
    /// Positions past `max` are left out, like [`BinaryTree::to_flat_array`];
    /// compare against [`BinaryTree::max_index`] to detect truncation. The
    /// vector ends at the highest occupied index `<= max`.
    pub fn to_complete_vec(&self, max: usize) -> Vec<Option<T>> {
        let mut cells = vec![None];
        complete::collect(&self.root, ROOT_INDEX, max, &mut cells);
        cells
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Node<T>> for BinaryTree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(&self.root),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = node::clone_subtree(&source.root);
    }
}

impl<T: PartialEq> PartialEq for BinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        node::subtrees_equal(&self.root, &other.root)
    }
}

impl<T: Eq> Eq for BinaryTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree").field("root", &self.root).finish()
    }
}

/// Inorder, each element followed by a space
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_inorder<T: fmt::Display>(
            link: &Link<T>,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            if let Some(node) = link.as_deref() {
                write_inorder(node.left_link(), f)?;
                write!(f, "{} ", node.element())?;
                write_inorder(node.right_link(), f)?;
            }
            Ok(())
        }
        write_inorder(&self.root, f)
    }
}
