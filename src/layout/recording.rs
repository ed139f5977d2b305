//! In-memory sink that records every drawing call

use super::sink::{DrawingSink, TextBox, LETTER_HEIGHT, LETTER_WIDTH};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `begin_page(label)`
    BeginPage(String),
    /// `move_to(x, y)`
    MoveTo(f64, f64),
    /// `line_to(x, y)`
    LineTo(f64, f64),
    /// `stroke()`
    Stroke,
    /// `draw_text_box(..)`
    TextBox {
        /// Label text
        text: String,
        /// Center x
        x: f64,
        /// Center y
        y: f64,
        /// Box padding
        margin: f64,
        /// Corner radius
        corner_radius: f64,
        /// Rotation in degrees
        rotation: f64,
        /// Font size
        font_size: f64,
    },
    /// `select_font(name, size)`
    SelectFont(String, f64),
    /// `set_fill_color(gray)`
    FillColor(f64),
    /// `set_line_width(width)`
    LineWidth(f64),
}

/// Sink that keeps the call log instead of painting
#[derive(Debug, Clone)]
pub struct RecordingSink {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSink {
    /// Recording sink with a US Letter canvas
    pub fn new() -> Self {
        Self::with_size(LETTER_WIDTH, LETTER_HEIGHT)
    }

    /// Recording sink with the given canvas size
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Consume the sink, returning its calls
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Labels of the text boxes, in drawing order
    pub fn labels(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::TextBox { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of stroked paths
    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Stroke))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSink for RecordingSink {
    fn begin_page(&mut self, label: &str) {
        self.calls.push(DrawCall::BeginPage(label.to_string()));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn draw_text_box(&mut self, text_box: &TextBox<'_>) {
        self.calls.push(DrawCall::TextBox {
            text: text_box.text.to_string(),
            x: text_box.x,
            y: text_box.y,
            margin: text_box.margin,
            corner_radius: text_box.corner_radius,
            rotation: text_box.rotation,
            font_size: text_box.font_size,
        });
    }

    fn select_font(&mut self, name: &str, size: f64) {
        self.calls.push(DrawCall::SelectFont(name.to_string(), size));
    }

    fn set_fill_color(&mut self, gray: f64) {
        self.calls.push(DrawCall::FillColor(gray));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
