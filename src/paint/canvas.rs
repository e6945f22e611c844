//! Drawing surface over tiny-skia
//!
//! [`Canvas`] wraps a `Pixmap` and exposes the handful of primitives the
//! window painter needs: whole-surface fills, axis-aligned rectangles,
//! circles, and text runs. Everything is painted with anti-aliasing into
//! premultiplied alpha; the conversion back to straight alpha happens in
//! image output.

use crate::color::Rgba;
use crate::error::{RenderError, Result};
use crate::font::FontFace;
use std::fmt;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

/// Kappa constant for approximating a circle with four cubic Beziers.
const KAPPA: f32 = 0.552_284_8;

/// A fixed-size render target.
pub struct Canvas {
  pixmap: Pixmap,
}

impl Canvas {
  /// Creates a transparent canvas.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::CanvasCreationFailed`] when either dimension is
  /// zero or the allocation is rejected.
  pub fn new(width: u32, height: u32) -> Result<Self> {
    let pixmap =
      Pixmap::new(width, height).ok_or(RenderError::CanvasCreationFailed { width, height })?;
    Ok(Self { pixmap })
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.pixmap.width()
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.pixmap.height()
  }

  /// Fills the whole canvas with one color.
  pub fn fill(&mut self, color: Rgba) {
    self.pixmap.fill(to_skia_color(color));
  }

  /// Fills an axis-aligned rectangle. Degenerate sizes are a no-op.
  pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
    let Some(rect) = Rect::from_xywh(x, y, width, height) else {
      return;
    };
    let path = PathBuilder::from_rect(rect);
    let paint = create_paint(color);
    self
      .pixmap
      .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
  }

  /// Fills a circle centered at `(cx, cy)`. Non-positive radii are a no-op.
  pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
    let Some(path) = build_circle_path(cx, cy, radius) else {
      return;
    };
    let paint = create_paint(color);
    self
      .pixmap
      .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
  }

  /// Draws a text run with its left edge at `x` and its baseline at
  /// `baseline`.
  ///
  /// Glyphs advance by their monospace widths; characters without an outline
  /// (spaces) advance without painting.
  pub fn draw_text(
    &mut self,
    font: &FontFace,
    text: &str,
    x: f32,
    baseline: f32,
    color: Rgba,
  ) -> Result<()> {
    let face = font.as_ttf_face()?;
    let paint = create_paint(color);
    let scale = font.scale();

    let mut pen_x = x;
    for ch in text.chars() {
      let (glyph, advance) = font.glyph_for(&face, ch);
      if let Some(path) = font.glyph_path(&face, glyph) {
        // Outlines are y-up in font design units; flip and scale onto the
        // baseline.
        let transform = Transform::from_row(scale, 0.0, 0.0, -scale, pen_x, baseline);
        self
          .pixmap
          .fill_path(&path, &paint, FillRule::Winding, transform, None);
      }
      pen_x += advance;
    }
    Ok(())
  }

  #[inline]
  pub fn pixmap(&self) -> &Pixmap {
    &self.pixmap
  }

  #[inline]
  pub fn into_pixmap(self) -> Pixmap {
    self.pixmap
  }
}

// Pixmap has no Debug impl; report the dimensions instead of the pixels.
impl fmt::Debug for Canvas {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Canvas")
      .field("width", &self.width())
      .field("height", &self.height())
      .finish_non_exhaustive()
  }
}

fn to_skia_color(color: Rgba) -> tiny_skia::Color {
  tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.alpha_u8())
}

fn create_paint(color: Rgba) -> Paint<'static> {
  let mut paint = Paint::default();
  paint.set_color_rgba8(color.r, color.g, color.b, color.alpha_u8());
  paint.anti_alias = true;
  paint
}

fn build_circle_path(cx: f32, cy: f32, radius: f32) -> Option<Path> {
  if radius <= 0.0 {
    return None;
  }
  let k = radius * KAPPA;
  let mut pb = PathBuilder::new();
  pb.move_to(cx + radius, cy);
  pb.cubic_to(cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius);
  pb.cubic_to(cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy);
  pb.cubic_to(cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius);
  pb.cubic_to(cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy);
  pb.close();
  pb.finish()
}
