//! Pixmap conversion and PNG encoding
//!
//! tiny-skia composites in premultiplied alpha; PNG stores straight alpha.
//! [`pixmap_to_rgba`] undoes the premultiplication into an [`RgbaBuffer`],
//! which the corner mask then edits in place before [`encode_png`] produces
//! the final bytes. Encoding favors speed over ratio: screenshots are
//! write-once images, not archives.

use crate::error::{RenderError, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Straight-alpha RGBA pixels, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
  pub data: Vec<u8>,
  pub width: u32,
  pub height: u32,
}

/// Converts a premultiplied pixmap into straight-alpha RGBA bytes.
///
/// Fully transparent pixels stay all-zero. Rounding can shift a color
/// channel by a unit or two on translucent pixels; alpha is preserved
/// exactly.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaBuffer {
  let mut data = pixmap.data().to_vec();
  for pixel in data.chunks_exact_mut(4) {
    let a = pixel[3] as f32;
    if a > 0.0 {
      let r = (pixel[0] as f32 * 255.0 / a).min(255.0) as u8;
      let g = (pixel[1] as f32 * 255.0 / a).min(255.0) as u8;
      let b = (pixel[2] as f32 * 255.0 / a).min(255.0) as u8;
      pixel[0] = r;
      pixel[1] = g;
      pixel[2] = b;
    }
  }
  RgbaBuffer {
    data,
    width: pixmap.width(),
    height: pixmap.height(),
  }
}

/// Encodes the buffer as a PNG with fast compression and adaptive filtering.
pub fn encode_png(buffer: &RgbaBuffer) -> Result<Vec<u8>> {
  let image = RgbaImage::from_raw(buffer.width, buffer.height, buffer.data.clone()).ok_or_else(
    || RenderError::EncodeFailed {
      reason: "buffer size does not match dimensions".to_string(),
    },
  )?;

  let mut out = Cursor::new(Vec::new());
  let encoder = PngEncoder::new_with_quality(&mut out, CompressionType::Fast, FilterType::Adaptive);
  image
    .write_with_encoder(encoder)
    .map_err(|e| RenderError::EncodeFailed {
      reason: e.to_string(),
    })?;
  Ok(out.into_inner())
}
