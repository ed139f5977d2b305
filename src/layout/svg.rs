//! SVG rendering sink
//!
//! One standalone SVG document per page. Canvas coordinates (y up) are
//! flipped to SVG coordinates (y down) on output.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::sink::{DrawingSink, TextBox, LETTER_HEIGHT, LETTER_WIDTH};
use super::LayoutError;

/// Average glyph advance as a fraction of the font size
const GLYPH_WIDTH: f64 = 0.6;

/// Sink producing SVG documents
#[derive(Debug, Clone)]
pub struct SvgSink {
    width: f64,
    height: f64,
    pages: Vec<String>,
    path: String,
    font_family: String,
    fill_gray: f64,
    line_width: f64,
}

impl SvgSink {
    /// SVG sink with a US Letter canvas
    pub fn new() -> Self {
        Self::with_size(LETTER_WIDTH, LETTER_HEIGHT)
    }

    /// SVG sink with the given canvas size
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            path: String::new(),
            font_family: "Helvetica".to_string(),
            fill_gray: 1.0,
            line_width: 1.0,
        }
    }

    /// Number of pages begun so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finished SVG documents, one per page
    pub fn documents(&self) -> Vec<String> {
        self.pages.iter().map(|body| self.close(body)).collect()
    }

    /// Write page `index` to `path`
    pub fn save_page(&self, index: usize, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let body = self
            .pages
            .get(index)
            .ok_or(LayoutError::MissingPage { index, pages: self.pages.len() })?;
        fs::write(path.as_ref(), self.close(body))?;
        debug!(page = index, path = %path.as_ref().display(), "wrote svg page");
        Ok(())
    }

    fn close(&self, body: &str) -> String {
        format!("{body}</svg>\n")
    }

    fn current_page(&mut self) -> &mut String {
        if self.pages.is_empty() {
            self.begin_page("");
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

impl Default for SvgSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSink for SvgSink {
    fn begin_page(&mut self, label: &str) {
        let mut page = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        if !label.is_empty() {
            page.push_str(&format!("<title>{}</title>\n", escape(label)));
            page.push_str(&format!(
                "<text x=\"36\" y=\"24\" font-family=\"{}\" font-size=\"10\">{}</text>\n",
                escape(&self.font_family),
                escape(label),
            ));
        }
        self.pages.push(page);
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let y = self.flip(y);
        self.path.push_str(&format!("M {} {} ", fmt_num(x), fmt_num(y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let y = self.flip(y);
        self.path.push_str(&format!("L {} {} ", fmt_num(x), fmt_num(y)));
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let element = format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>\n",
            self.path.trim_end(),
            fmt_num(self.line_width),
        );
        self.path.clear();
        self.current_page().push_str(&element);
    }

    fn draw_text_box(&mut self, text_box: &TextBox<'_>) {
        let cx = text_box.x;
        let cy = self.flip(text_box.y);
        let text_width = GLYPH_WIDTH * text_box.font_size * text_box.text.chars().count() as f64;
        let box_width = text_width + 2.0 * text_box.margin;
        let box_height = text_box.font_size + 2.0 * text_box.margin;
        let shade = (self.fill_gray.clamp(0.0, 1.0) * 255.0).round() as u8;

        let mut group = format!(
            "<g transform=\"rotate({} {} {})\">\n",
            fmt_num(-text_box.rotation),
            fmt_num(cx),
            fmt_num(cy),
        );
        group.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"rgb({s},{s},{s})\" stroke=\"black\" stroke-width=\"{}\"/>\n",
            fmt_num(cx - box_width / 2.0),
            fmt_num(cy - box_height / 2.0),
            fmt_num(box_width),
            fmt_num(box_height),
            fmt_num(text_box.corner_radius),
            fmt_num(self.line_width),
            s = shade,
        ));
        group.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n</g>\n",
            fmt_num(cx),
            fmt_num(cy),
            escape(&self.font_family),
            fmt_num(text_box.font_size),
            escape(text_box.text),
        ));
        self.current_page().push_str(&group);
    }

    // Each text box carries its own size
    fn select_font(&mut self, name: &str, _size: f64) {
        self.font_family = name.to_string();
    }

    fn set_fill_color(&mut self, gray: f64) {
        self.fill_gray = gray;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// Fixed precision, trailing zeros trimmed
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
