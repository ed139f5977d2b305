//! Layout geometry configuration

use super::LayoutError;

/// Geometry of the rendered tree, in canvas units before scaling.
///
/// Every field is multiplied by the height-derived scale factor at render time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Label font size
    pub font_scale: f64,

    /// Vertical distance between a node and its children
    pub level_separation: f64,

    /// Horizontal distance between adjacent leaves of a perfect tree
    pub node_separation: f64,

    /// Padding between a label and its box
    pub box_margin: f64,

    /// Corner radius of the node box
    pub box_corner_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_scale: 20.0,
            level_separation: 90.0,
            node_separation: 30.0,
            box_margin: 6.0,
            box_corner_radius: 6.0,
        }
    }
}

impl LayoutConfig {
    /// Set label font size.
    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Set vertical level separation.
    pub fn with_level_separation(mut self, level_separation: f64) -> Self {
        self.level_separation = level_separation;
        self
    }

    /// Set horizontal node separation.
    pub fn with_node_separation(mut self, node_separation: f64) -> Self {
        self.node_separation = node_separation;
        self
    }

    /// Set box margin.
    pub fn with_box_margin(mut self, box_margin: f64) -> Self {
        self.box_margin = box_margin;
        self
    }

    /// Set box corner radius.
    pub fn with_box_corner_radius(mut self, box_corner_radius: f64) -> Self {
        self.box_corner_radius = box_corner_radius;
        self
    }

    /// Separations and font size must be finite and positive; box margin
    /// and corner radius must be finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("font_scale", self.font_scale),
            ("level_separation", self.level_separation),
            ("node_separation", self.node_separation),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }

        let non_negative = [
            ("box_margin", self.box_margin),
            ("box_corner_radius", self.box_corner_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
