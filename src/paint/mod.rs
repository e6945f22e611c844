//! Window painting
//!
//! Composites the editor-window look onto a [`Canvas`] in a fixed order:
//!
//! 1. Window background, full canvas, in the theme's background color
//! 2. Title bar strip across the top
//! 3. Three traffic-light buttons
//! 4. Syntax-colored text, token by token, line by line
//!
//! Corners stay square here. The rounded-corner mask in [`corner_mask`] runs
//! against the straight-alpha buffer after compositing, so nothing painted
//! below ever bleeds past the rounding.

pub mod canvas;
pub mod corner_mask;

pub use canvas::Canvas;
pub use corner_mask::{apply_mask, rounded_rect_mask, CORNER_RADIUS};

use crate::color::Rgba;
use crate::error::Result;
use crate::font::FontFace;
use crate::highlight::{ThemeStyles, FALLBACK_BACKGROUND, FALLBACK_FOREGROUND};
use crate::layout::{Geometry, LineLayout, HORIZONTAL_PADDING, WINDOW_BAR_HEIGHT};
use crate::lines::Document;

/// Radius of each traffic-light button.
const BUTTON_RADIUS: f32 = 8.0;
/// Gap between the edges of adjacent buttons.
const BUTTON_GAP: f32 = 16.0;
/// Vertical center of the button row inside the bar.
const BUTTON_CENTER_Y: f32 = 20.0;
/// Close, minimize, zoom.
const BUTTON_COLORS: [Rgba; 3] = [
  Rgba::rgb(0xFF, 0x5F, 0x56),
  Rgba::rgb(0xFF, 0xBD, 0x2E),
  Rgba::rgb(0x27, 0xC9, 0x3F),
];

/// Paints the full window for a measured document.
///
/// `layouts` must come from measuring `document` with the same `font`; each
/// token advances the pen by its measured width so painting and measurement
/// cannot disagree about line extents.
pub fn paint_window(
  document: &Document,
  layouts: &[LineLayout],
  geometry: &Geometry,
  styles: &ThemeStyles,
  font: &FontFace,
) -> Result<Canvas> {
  let mut canvas = Canvas::new(geometry.width_px, geometry.height_px)?;
  let background = styles.background().unwrap_or(FALLBACK_BACKGROUND);

  // 1. Window background
  canvas.fill(background);

  // 2. Title bar strip. It shares the window background; only the buttons
  //    distinguish it.
  canvas.fill_rect(
    0.0,
    0.0,
    geometry.width_px as f32,
    WINDOW_BAR_HEIGHT as f32,
    background,
  );

  // 3. Traffic lights
  for (i, color) in BUTTON_COLORS.iter().enumerate() {
    let cx = HORIZONTAL_PADDING as f32 + i as f32 * (2.0 * BUTTON_RADIUS + BUTTON_GAP);
    canvas.fill_circle(cx, BUTTON_CENTER_Y, BUTTON_RADIUS, *color);
  }

  // 4. Text
  let mut baseline = geometry.first_baseline;
  for (line, layout) in document.iter().zip(layouts) {
    let mut pen_x = HORIZONTAL_PADDING as f32;
    for (token, width) in line.iter().zip(&layout.token_widths) {
      let color = styles.color_for(&token.kind).unwrap_or(FALLBACK_FOREGROUND);
      canvas.draw_text(font, &token.text, pen_x, baseline, color)?;
      pen_x += width;
    }
    baseline += geometry.line_height;
  }

  Ok(canvas)
}
