//! Recursive geometric layout
//!
//! Root anchored at the horizontal center, 72 units below the top edge.
//! Node at leaf distance `L` (h - 1 at the root, minus one per level):
//!   left child:  (x - 2^L * node_sep * scale / 2, y - level_sep * scale)
//!   right child: (x + 2^L * node_sep * scale / 2, y - level_sep * scale)
//!
//! Horizontal spread halves per level, so the subtree hanging at depth `d`
//! gets half-width proportional to `2^(h - 1 - d)` and sibling subtrees
//! never overlap.
//!
//! Scale: 1 for h < 4, otherwise 16 / 2^h.

mod config;
mod recording;
mod sink;
mod svg;

pub use config::LayoutConfig;
pub use recording::{DrawCall, RecordingSink};
pub use sink::{DrawingSink, TextBox, LETTER_HEIGHT, LETTER_WIDTH};
pub use svg::SvgSink;

use std::fmt::Display;

use thiserror::Error;
use tracing::{debug, trace};

use crate::tree::{BinaryTree, Node};

/// Distance of the root below the top edge of the canvas
pub const ROOT_TOP_OFFSET: f64 = 72.0;

/// Label font
pub const LABEL_FONT: &str = "Helvetica";

/// Gray level of node boxes
pub const NODE_FILL_GRAY: f64 = 0.75;

/// Errors raised by layout and rendering
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Geometry values out of range
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// Requested page was never begun
    #[error("page {index} does not exist ({pages} pages)")]
    MissingPage {
        /// Requested page
        index: usize,
        /// Pages available
        pages: usize,
    },

    /// Writing a rendered document failed
    #[error("failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}

/// Computed position of one node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Canvas x of the box center
    pub x: f64,
    /// Canvas y of the box center
    pub y: f64,
    /// Edges from the root
    pub depth: usize,
    /// Text produced by the element's `Display`
    pub label: String,
}

/// Positions tree nodes and emits drawing commands
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, rejecting invalid geometry
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with the default geometry
    pub fn with_defaults() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Active geometry
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Uniform scale for a tree of height `h`
    pub fn scale_for_height(h: usize) -> f64 {
        if h < 4 {
            1.0
        } else {
            16.0 / 2f64.powi(h as i32)
        }
    }

    /// Root position on a canvas of the given size
    pub fn anchor(width: f64, height: f64) -> (f64, f64) {
        (width / 2.0, height - ROOT_TOP_OFFSET)
    }

    /// Compute every node's position with the root at `anchor`.
    ///
    /// The result has exactly the shape of `tree`.
    pub fn place<T: Display>(
        &self,
        tree: &BinaryTree<T>,
        anchor: (f64, f64),
    ) -> BinaryTree<Placement> {
        let h = tree.height();
        let scale = Self::scale_for_height(h);
        match tree.root() {
            None => BinaryTree::new(),
            Some(root) => {
                let (x, y) = anchor;
                BinaryTree::from(self.place_node(root, h as i32 - 1, 0, x, y, scale))
            }
        }
    }

    fn place_node<T: Display>(
        &self,
        node: &Node<T>,
        leaf_dist: i32,
        depth: usize,
        x: f64,
        y: f64,
        scale: f64,
    ) -> Node<Placement> {
        let dx = 2f64.powi(leaf_dist) * self.config.node_separation * scale / 2.0;
        let child_y = y - self.config.level_separation * scale;

        let left = node.left().map(|child| {
            Box::new(self.place_node(child, leaf_dist - 1, depth + 1, x - dx, child_y, scale))
        });
        let right = node.right().map(|child| {
            Box::new(self.place_node(child, leaf_dist - 1, depth + 1, x + dx, child_y, scale))
        });

        let label = node.element().to_string();
        trace!(%label, x, y, depth, "placed node");
        Node::with_children(Placement { x, y, depth, label }, left, right)
    }

    /// Render `tree` onto a fresh page of `sink`.
    ///
    /// Per node: edge to the left child and the left subtree, edge to the
    /// right child and the right subtree, then the node's own box, so boxes
    /// are painted over incoming edges.
    pub fn render<T, S>(&self, tree: &BinaryTree<T>, sink: &mut S, annotation: &str)
    where
        T: Display,
        S: DrawingSink + ?Sized,
    {
        let h = tree.height();
        let scale = Self::scale_for_height(h);
        let anchor = Self::anchor(sink.width(), sink.height());
        debug!(height = h, scale, nodes = tree.node_count(), "rendering tree");

        sink.begin_page(annotation);
        sink.select_font(LABEL_FONT, self.config.font_scale * scale);
        sink.set_fill_color(NODE_FILL_GRAY);
        sink.set_line_width(scale);

        let placed = self.place(tree, anchor);
        if let Some(root) = placed.root() {
            self.draw_node(root, sink, scale);
        }
    }

    fn draw_node<S: DrawingSink + ?Sized>(&self, node: &Node<Placement>, sink: &mut S, scale: f64) {
        let here = node.element();

        for child in [node.left(), node.right()].into_iter().flatten() {
            let there = child.element();
            sink.move_to(here.x, here.y);
            sink.line_to(there.x, there.y);
            sink.stroke();
            self.draw_node(child, sink, scale);
        }

        sink.draw_text_box(&TextBox {
            text: &here.label,
            x: here.x,
            y: here.y,
            margin: self.config.box_margin * scale,
            corner_radius: self.config.box_corner_radius * scale,
            rotation: 0.0,
            font_size: self.config.font_scale * scale,
        });
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rule() {
        assert_eq!(LayoutEngine::scale_for_height(0), 1.0);
        assert_eq!(LayoutEngine::scale_for_height(3), 1.0);
        assert_eq!(LayoutEngine::scale_for_height(4), 1.0);
        assert_eq!(LayoutEngine::scale_for_height(5), 0.5);
        assert_eq!(LayoutEngine::scale_for_height(6), 0.25);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = LayoutConfig::default().with_level_separation(-1.0);
        assert!(matches!(
            LayoutEngine::new(config),
            Err(LayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_three_node_geometry() {
        let tree = BinaryTree::from_complete(&[0, 2, 1, 3], 3).unwrap();
        let placed = LayoutEngine::with_defaults().place(&tree, (306.0, 720.0));

        let root = placed.root().unwrap().element();
        assert_eq!((root.x, root.y, root.depth), (306.0, 720.0, 0));
        assert_eq!(root.label, "2");

        // h = 2: leaf distance 1 at the root, offset 2 * 30 / 2
        let left = placed.root().unwrap().left().unwrap().element();
        let right = placed.root().unwrap().right().unwrap().element();
        assert_eq!((left.x, left.y, left.depth), (276.0, 630.0, 1));
        assert_eq!((right.x, right.y), (336.0, 630.0));
        assert_eq!((left.label.as_str(), right.label.as_str()), ("1", "3"));
    }

    #[test]
    fn test_empty_tree_renders_page_only() {
        let tree: BinaryTree<u8> = BinaryTree::new();
        let mut sink = RecordingSink::new();
        LayoutEngine::with_defaults().render(&tree, &mut sink, "empty");

        assert_eq!(
            sink.calls(),
            &[
                DrawCall::BeginPage("empty".to_string()),
                DrawCall::SelectFont(LABEL_FONT.to_string(), 20.0),
                DrawCall::FillColor(NODE_FILL_GRAY),
                DrawCall::LineWidth(1.0),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_layout_output_is_serializable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<LayoutConfig>();
        assert_serde::<Placement>();
    }
}
