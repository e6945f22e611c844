//! Code to image renderer
//!
//! This module provides the main entry point for rendering source code to a
//! PNG of an editor window.
//!
//! # Pipeline
//!
//! The rendering pipeline consists of:
//! 1. **Sanitize**: raw source → drawable text
//! 2. **Highlight**: text → classified tokens with theme colors
//! 3. **Segment**: token stream → lines
//! 4. **Layout**: lines + font → window geometry
//! 5. **Paint**: background, title bar, buttons, text
//! 6. **Mask**: carve the rounded corners
//! 7. **Encode**: straight-alpha RGBA → PNG

use crate::error::Result;
use crate::font::FontFace;
use crate::highlight::{self, ThemeStyles, DEFAULT_THEME};
use crate::image_output;
use crate::layout::{self, Geometry};
use crate::lines;
use crate::paint::{self, CORNER_RADIUS};
use crate::sanitize::sanitize;
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 18.0;

/// Where the render font comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontSource {
  /// Query the system font database for a monospace face
  #[default]
  Discover,
  /// Load a specific font file
  Path(PathBuf),
}

/// Inputs for one screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
  /// Source text to render
  pub code: String,
  /// Language token for syntax selection; empty means detect from content
  pub language: String,
  /// Theme name; unknown names fall back to the default theme
  pub theme: String,
  /// Font to render with
  pub font: FontSource,
  /// Font size in pixels
  pub font_size: f32,
}

impl RenderConfig {
  pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
    Self {
      code: code.into(),
      language: language.into(),
      theme: DEFAULT_THEME.to_string(),
      font: FontSource::Discover,
      font_size: DEFAULT_FONT_SIZE,
    }
  }

  pub fn theme(mut self, theme: impl Into<String>) -> Self {
    self.theme = theme.into();
    self
  }

  pub fn font_size(mut self, size: f32) -> Self {
    self.font_size = size;
    self
  }

  pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.font = FontSource::Path(path.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
  source: FontSource,
  size_bits: u32,
}

/// Main renderer for converting source code to images.
///
/// Construction loads the bundled syntax and theme definitions, which is the
/// expensive part; build one `Renderer` and reuse it across renders. Font
/// faces are cached per source and size.
pub struct Renderer {
  syntax_set: SyntaxSet,
  theme_set: ThemeSet,
  font_cache: Mutex<HashMap<FontKey, Arc<FontFace>>>,
}

impl Renderer {
  pub fn new() -> Self {
    Self {
      syntax_set: SyntaxSet::load_defaults_newlines(),
      theme_set: ThemeSet::load_defaults(),
      font_cache: Mutex::new(HashMap::new()),
    }
  }

  /// Renders one screenshot to PNG bytes.
  pub fn render(&self, config: &RenderConfig) -> Result<Vec<u8>> {
    // 1. Sanitize
    let code = sanitize(&config.code);

    // 2. Highlight
    let syntax = highlight::resolve_syntax(&self.syntax_set, &config.language, &code);
    let theme = highlight::resolve_theme(&self.theme_set, &config.theme);
    let styles = ThemeStyles::new(theme);
    let tokens = highlight::tokenize(&code, syntax, &self.syntax_set)?;

    // 3. Segment
    let document = lines::segment(tokens);

    // 4. Layout
    let font = self.font_for(&config.font, config.font_size)?;
    let layouts = layout::measure_document(&document, &font)?;
    let geometry = Geometry::compute(
      document.len(),
      layout::max_line_width(&layouts),
      config.font_size,
    );
    debug!(
      "laid out {} lines into {}x{}",
      document.len(),
      geometry.width_px,
      geometry.height_px
    );

    // 5. Paint
    let canvas = paint::paint_window(&document, &layouts, &geometry, &styles, &font)?;

    // 6. Mask corners
    let pixmap = canvas.into_pixmap();
    let mut buffer = image_output::pixmap_to_rgba(&pixmap);
    let mask = paint::rounded_rect_mask(buffer.width, buffer.height, CORNER_RADIUS);
    paint::apply_mask(&mut buffer, &mask);

    // 7. Encode
    let png = image_output::encode_png(&buffer)?;
    debug!("encoded {} bytes", png.len());
    Ok(png)
  }

  fn font_for(&self, source: &FontSource, size: f32) -> Result<Arc<FontFace>> {
    let key = FontKey {
      source: source.clone(),
      size_bits: size.to_bits(),
    };

    if let Ok(cache) = self.font_cache.lock() {
      if let Some(font) = cache.get(&key) {
        return Ok(font.clone());
      }
    }

    let font = Arc::new(match source {
      FontSource::Discover => FontFace::discover(size)?,
      FontSource::Path(path) => FontFace::load(path, size)?,
    });

    if let Ok(mut cache) = self.font_cache.lock() {
      cache.insert(key, font.clone());
    }
    Ok(font)
  }
}

impl Default for Renderer {
  fn default() -> Self {
    Self::new()
  }
}

/// One-shot render with a fresh [`Renderer`].
///
/// Builds the syntax and theme sets on every call; prefer a shared
/// [`Renderer`] when rendering more than once.
pub fn render_code(config: &RenderConfig) -> Result<Vec<u8>> {
  Renderer::new().render(config)
}
