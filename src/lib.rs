//! # Owned Binary Trees with Geometric Layout
//!
//! A generic binary tree container with three capabilities:
//!
//! 1. **Complete-tree linearization**: build from / flatten to a 1-indexed
//!    array where node `i` has children `2i` and `2i + 1`
//! 2. **Structural copy and equality** over arbitrary (non-complete) shapes
//! 3. **Recursive layout**: positions every node on a 2-D canvas from the
//!    tree height and node depth, then drives a [`DrawingSink`]
//!
//! ## Usage Example
//!
//! ```
//! use bintree_layout::{BinaryTree, LayoutEngine, RecordingSink};
//!
//! let tree = BinaryTree::from_complete(&[0, 2, 1, 3], 3)?;
//! assert_eq!(tree.height(), 2);
//!
//! let mut seen = Vec::new();
//! tree.inorder(|e| seen.push(*e));
//! assert_eq!(seen, vec![1, 2, 3]);
//!
//! let mut sink = RecordingSink::new();
//! LayoutEngine::with_defaults().render(&tree, &mut sink, "three nodes");
//! assert_eq!(sink.labels(), vec!["1", "3", "2"]);
//! # Ok::<(), bintree_layout::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod layout; // Node placement and drawing
pub mod tree; // Owned tree, array protocol, traversals

// Re-exports for convenience
pub use layout::{
    DrawCall, DrawingSink, LayoutConfig, LayoutEngine, LayoutError, Placement, RecordingSink,
    SvgSink, TextBox,
};
pub use tree::{BinaryTree, Direction, Link, Node, Order, TreeError};
