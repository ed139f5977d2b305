//! Owned tree node representation
//!
//! Node = element + two exclusively owned child slots
//!   Leaf iff both slots are empty
//!   Every node has exactly one owner: its parent, or the tree for the root

/// Child slot: an owned subtree or nothing
pub type Link<T> = Option<Box<Node<T>>>;

/// Binary tree node
#[derive(Debug)]
pub struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Create a leaf holding `element`
    pub fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// Create a node from an element and two (possibly empty) subtrees
    pub fn with_children(element: T, left: Link<T>, right: Link<T>) -> Self {
        Self {
            element,
            left,
            right,
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Element stored in this node
    #[inline]
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Mutable access to the stored element
    #[inline]
    pub fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    /// Left child, if any
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right child, if any
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Mutable left child, if any
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable right child, if any
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replace the left subtree, returning the previous one
    pub fn set_left(&mut self, child: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.left, child)
    }

    /// Replace the right subtree, returning the previous one
    pub fn set_right(&mut self, child: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.right, child)
    }

    /// Detach and return the left subtree
    pub fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Detach and return the right subtree
    pub fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    pub(crate) fn left_link(&self) -> &Link<T> {
        &self.left
    }

    pub(crate) fn right_link(&self) -> &Link<T> {
        &self.right
    }

    /// Split into element and both subtrees
    pub fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.element, self.left, self.right)
    }

    /// Height of the subtree rooted here (leaf = 1)
    pub fn height(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        1 + height(&self.left).max(height(&self.right))
    }

    /// `height(left) - height(right)`
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a possibly empty subtree: empty = 0, leaf = 1
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, Node::height)
}

/// `1 + count(left) + count(right)`, empty = 0
pub(crate) fn node_count<T>(link: &Link<T>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => 1 + node_count(&node.left) + node_count(&node.right),
    }
}

/// Leaves in the subtree, empty = 0
pub(crate) fn leaf_count<T>(link: &Link<T>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) if node.is_leaf() => 1,
        Some(node) => leaf_count(&node.left) + leaf_count(&node.right),
    }
}

/// Deep copy: one fresh allocation per source node, any shape
pub(crate) fn clone_subtree<T: Clone>(link: &Link<T>) -> Link<T> {
    link.as_deref().map(|node| {
        Box::new(Node {
            element: node.element.clone(),
            left: clone_subtree(&node.left),
            right: clone_subtree(&node.right),
        })
    })
}

/// Positional equality: both empty, or equal elements with equal left and
/// equal right subtrees
pub(crate) fn subtrees_equal<T: PartialEq>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.element == y.element
                && subtrees_equal(&x.left, &y.left)
                && subtrees_equal(&x.right, &y.right)
        }
        _ => false,
    }
}

/// Structure-preserving element mapping
pub(crate) fn map_subtree<T, U, F>(link: &Link<T>, f: &mut F) -> Link<U>
where
    F: FnMut(&Node<T>) -> U,
{
    link.as_deref().map(|node| {
        let element = f(node);
        let left = map_subtree(&node.left, f);
        let right = map_subtree(&node.right, f);
        Box::new(Node {
            element,
            left,
            right,
        })
    })
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            left: clone_subtree(&self.left),
            right: clone_subtree(&self.right),
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
            && subtrees_equal(&self.left, &other.left)
            && subtrees_equal(&self.right, &other.right)
    }
}

impl<T: Eq> Eq for Node<T> {}
