//! Window geometry and text measurement
//!
//! Measures every token of a [`Document`] with a [`FontFace`] and derives the
//! pixel dimensions of the output window. All distances are in pixels.
//!
//! The window wraps the text in a fixed frame: 32px padding on every side
//! plus a 40px title bar above the text area. The fractional width of the
//! widest line truncates toward zero before padding is added, as does the
//! total text height, so a one-pixel-wide sliver of a glyph never grows the
//! window.

use crate::error::Result;
use crate::font::FontFace;
use crate::lines::{Document, Line};

/// Padding between the window edge and the text area, left and right.
pub const HORIZONTAL_PADDING: u32 = 32;
/// Padding between the window edge and the text area, top and bottom.
pub const VERTICAL_PADDING: u32 = 32;
/// Height of the title bar strip above the text area.
pub const WINDOW_BAR_HEIGHT: u32 = 40;
/// Line height as a multiple of the font size.
pub const LINE_SPACING_FACTOR: f32 = 1.4;

/// Measured widths for one line of tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
  /// Width of each token, in line order
  pub token_widths: Vec<f32>,
  /// Total line width (sum of token widths)
  pub width: f32,
}

/// Pixel dimensions and vertical metrics of the output window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
  /// Canvas width in pixels
  pub width_px: u32,
  /// Canvas height in pixels
  pub height_px: u32,
  /// Distance between consecutive baselines
  pub line_height: f32,
  /// Baseline of the first line, below the bar and top padding
  pub first_baseline: f32,
}

impl Geometry {
  /// Computes the window size for `line_count` lines whose widest line
  /// measures `max_line_width` pixels.
  pub fn compute(line_count: usize, max_line_width: f32, font_size: f32) -> Self {
    let line_height = font_size * LINE_SPACING_FACTOR;
    let width_px = max_line_width as u32 + HORIZONTAL_PADDING * 2;
    let height_px =
      (line_count as f32 * line_height) as u32 + VERTICAL_PADDING * 2 + WINDOW_BAR_HEIGHT;
    let first_baseline = VERTICAL_PADDING as f32 + font_size + WINDOW_BAR_HEIGHT as f32;
    Self {
      width_px,
      height_px,
      line_height,
      first_baseline,
    }
  }
}

/// Measures every token of the document, one layout per line.
///
/// The face is parsed once for the whole document; widths are sums of scaled
/// glyph advances, so a line is exactly as wide as its tokens.
pub fn measure_document(document: &Document, font: &FontFace) -> Result<Vec<LineLayout>> {
  let face = font.as_ttf_face()?;
  let mut layouts = Vec::with_capacity(document.len());
  for line in document {
    layouts.push(measure_line(line, font, &face));
  }
  Ok(layouts)
}

fn measure_line(line: &Line, font: &FontFace, face: &ttf_parser::Face) -> LineLayout {
  let mut token_widths = Vec::with_capacity(line.len());
  let mut width = 0.0;
  for token in line {
    let mut token_width = 0.0;
    for ch in token.text.chars() {
      let (_, advance) = font.glyph_for(face, ch);
      token_width += advance;
    }
    token_widths.push(token_width);
    width += token_width;
  }
  LineLayout { token_widths, width }
}

/// Width of the widest measured line, 0.0 for an empty set.
pub fn max_line_width(layouts: &[LineLayout]) -> f32 {
  layouts.iter().map(|layout| layout.width).fold(0.0, f32::max)
}
