//! Monospace font loading and measurement
//!
//! A [`FontFace`] owns the raw font bytes (shared via `Arc`) plus the render
//! size, and parses the face on demand with `ttf-parser`. Faces come from an
//! explicit file path or from system discovery through `fontdb`, preferring
//! well-known monospace families.
//!
//! Measurement sums per-character horizontal advances. There is no shaping,
//! kerning, or ligature handling: a token's width never depends on what was
//! drawn before it, which keeps measuring and painting in exact agreement.

use crate::error::{FontError, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};
use tiny_skia::{Path, PathBuilder};
use ttf_parser::GlyphId;

/// Families tried in order when discovering a system monospace face.
const MONOSPACE_FAMILIES: &[&str] = &[
  "DejaVu Sans Mono",
  "Liberation Mono",
  "Noto Sans Mono",
  "FreeMono",
  "Consolas",
  "Menlo",
  "Monaco",
  "Courier New",
];

/// Last-resort font files for minimal container images where the font
/// database finds nothing.
const FALLBACK_FONT_FILES: &[&str] = &[
  "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
  "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
  "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
];

/// A loaded font face at a fixed render size.
#[derive(Debug)]
pub struct FontFace {
  /// Raw font file bytes (shared, parsed on demand)
  data: Arc<Vec<u8>>,
  /// Face index within the file (for TTC collections)
  index: u32,
  /// Render size in pixels
  size: f32,
  /// Design units per em, cached at load time
  units_per_em: f32,
  /// Family name or file path, for error messages
  name: String,
  /// Glyph outlines in font units, built lazily
  glyph_cache: Mutex<HashMap<u16, Option<Arc<Path>>>>,
}

impl FontFace {
  /// Loads a font from a file path.
  pub fn load(path: &std::path::Path, size: f32) -> Result<Self> {
    let data = fs::read(path).map_err(|e| FontError::ReadFailed {
      path: path.display().to_string(),
      reason: e.to_string(),
    })?;
    Self::from_parts(Arc::new(data), 0, size, path.display().to_string())
  }

  /// Loads a font from raw bytes.
  pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
    Self::from_parts(Arc::new(data), 0, size, "<memory>".to_string())
  }

  /// Discovers a monospace face from the system font database.
  ///
  /// Queries the preferred families first and the generic monospace family
  /// last. When the database is empty (stripped-down containers), a few
  /// well-known font file locations are probed directly.
  ///
  /// # Errors
  ///
  /// Returns [`FontError::NoUsableFont`] when nothing on the system can be
  /// used.
  pub fn discover(size: f32) -> Result<Self> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<fontdb::Family> = MONOSPACE_FAMILIES
      .iter()
      .map(|name| fontdb::Family::Name(name))
      .collect();
    families.push(fontdb::Family::Monospace);

    let query = fontdb::Query {
      families: &families,
      weight: fontdb::Weight::NORMAL,
      stretch: fontdb::Stretch::Normal,
      style: fontdb::Style::Normal,
    };

    if let Some(id) = db.query(&query) {
      let family = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "monospace".to_string());
      if let Some((data, index)) = db.with_face_data(id, |bytes, index| (bytes.to_vec(), index)) {
        let face = Self::from_parts(Arc::new(data), index, size, family)?;
        debug!("discovered monospace font '{}'", face.family());
        return Ok(face);
      }
    }

    for path in FALLBACK_FONT_FILES {
      if let Ok(data) = fs::read(path) {
        if let Ok(face) = Self::from_parts(Arc::new(data), 0, size, path.to_string()) {
          debug!("loaded fallback font file {path}");
          return Ok(face);
        }
      }
    }

    Err(FontError::NoUsableFont.into())
  }

  fn from_parts(data: Arc<Vec<u8>>, index: u32, size: f32, name: String) -> Result<Self> {
    let units_per_em = {
      let face = ttf_parser::Face::parse(&data, index).map_err(|_| FontError::InvalidFontFile {
        path: name.clone(),
      })?;
      face.units_per_em() as f32
    };
    if units_per_em == 0.0 {
      return Err(FontError::InvalidFontFile { path: name }.into());
    }

    Ok(Self {
      data,
      index,
      size,
      units_per_em,
      name,
      glyph_cache: Mutex::new(HashMap::new()),
    })
  }

  /// Render size in pixels.
  #[inline]
  pub fn size(&self) -> f32 {
    self.size
  }

  /// Scale factor from font design units to pixels.
  #[inline]
  pub fn scale(&self) -> f32 {
    self.size / self.units_per_em
  }

  /// Family name or source path.
  #[inline]
  pub fn family(&self) -> &str {
    &self.name
  }

  /// Parses the underlying face for glyph lookups.
  pub(crate) fn as_ttf_face(&self) -> Result<ttf_parser::Face<'_>> {
    ttf_parser::Face::parse(&self.data, self.index).map_err(|_| {
      FontError::InvalidFontFile {
        path: self.name.clone(),
      }
      .into()
    })
  }

  /// Measured width of `text` at this face's size.
  ///
  /// Missing characters fall back to the .notdef glyph, so the result is
  /// total over any input.
  pub fn measure(&self, text: &str) -> Result<f32> {
    let face = self.as_ttf_face()?;
    let scale = self.scale();
    let mut width = 0.0;
    for ch in text.chars() {
      let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
      width += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
    }
    Ok(width)
  }

  /// Glyph id and scaled advance for one character.
  pub(crate) fn glyph_for(&self, face: &ttf_parser::Face, ch: char) -> (GlyphId, f32) {
    let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
    let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * self.scale();
    (glyph, advance)
  }

  /// Outline for a glyph in font design units, cached per glyph id.
  ///
  /// `None` marks glyphs without an outline (spaces); the absence is cached
  /// too. The sanitizer bounds input to ASCII plus a small Latin band, so the
  /// cache stays tiny and needs no eviction.
  pub(crate) fn glyph_path(&self, face: &ttf_parser::Face, glyph: GlyphId) -> Option<Arc<Path>> {
    if let Ok(cache) = self.glyph_cache.lock() {
      if let Some(cached) = cache.get(&glyph.0) {
        return cached.clone();
      }
    }

    let built = build_outline(face, glyph).map(Arc::new);
    if let Ok(mut cache) = self.glyph_cache.lock() {
      cache.insert(glyph.0, built.clone());
    }
    built
  }
}

fn build_outline(face: &ttf_parser::Face, glyph: GlyphId) -> Option<Path> {
  let mut builder = PathOutlineBuilder::new();
  face.outline_glyph(glyph, &mut builder)?;
  builder.finish()
}

/// Collects ttf-parser outline callbacks into a tiny-skia path.
struct PathOutlineBuilder {
  builder: PathBuilder,
}

impl PathOutlineBuilder {
  fn new() -> Self {
    Self {
      builder: PathBuilder::new(),
    }
  }

  fn finish(self) -> Option<Path> {
    self.builder.finish()
  }
}

impl ttf_parser::OutlineBuilder for PathOutlineBuilder {
  fn move_to(&mut self, x: f32, y: f32) {
    self.builder.move_to(x, y);
  }

  fn line_to(&mut self, x: f32, y: f32) {
    self.builder.line_to(x, y);
  }

  fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
    self.builder.quad_to(x1, y1, x, y);
  }

  fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
    self.builder.cubic_to(x1, y1, x2, y2, x, y);
  }

  fn close(&mut self) {
    self.builder.close();
  }
}
