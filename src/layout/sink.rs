//! Drawing-sink capability consumed by the layout engine
//!
//! Coordinates are canvas space with the origin at the bottom-left corner
//! and y growing upward. Text boxes are centered on their anchor point.

/// US Letter width in points
pub const LETTER_WIDTH: f64 = 612.0;

/// US Letter height in points
pub const LETTER_HEIGHT: f64 = 792.0;

/// A labelled, rounded box centered on `(x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox<'a> {
    /// Label text
    pub text: &'a str,
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Padding between text and border
    pub margin: f64,
    /// Border corner radius
    pub corner_radius: f64,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
    /// Font size of the label
    pub font_size: f64,
}

/// Page/canvas renderer
pub trait DrawingSink {
    /// Start a new page, optionally annotated
    fn begin_page(&mut self, label: &str);

    /// Begin a new subpath at `(x, y)`
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath to `(x, y)`
    fn line_to(&mut self, x: f64, y: f64);

    /// Paint and reset the current path
    fn stroke(&mut self);

    /// Draw a filled box with a centered label
    fn draw_text_box(&mut self, text_box: &TextBox<'_>);

    /// Select the label font
    fn select_font(&mut self, name: &str, size: f64);

    /// Gray level (0 = black, 1 = white) used to fill boxes
    fn set_fill_color(&mut self, gray: f64);

    /// Stroke width for subsequent lines
    fn set_line_width(&mut self, width: f64);

    /// Canvas width
    fn width(&self) -> f64;

    /// Canvas height
    fn height(&self) -> f64;
}
