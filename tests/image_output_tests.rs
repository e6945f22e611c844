//! Tests for the pixmap-to-PNG output chain
//!
//! Covers the seam between painting and encoding: premultiplied pixmap in,
//! straight-alpha buffer, corner carving, PNG bytes out.

use codeshot::image_output::{encode_png, pixmap_to_rgba};
use codeshot::paint::{apply_mask, rounded_rect_mask};
use tiny_skia::{Color, Pixmap};

fn painted_pixmap(width: u32, height: u32) -> Pixmap {
  let mut pixmap = Pixmap::new(width, height).expect("pixmap");
  pixmap.fill(Color::from_rgba8(40, 42, 54, 255));
  pixmap
}

#[test]
fn painted_pixmap_roundtrips_through_png() {
  let pixmap = painted_pixmap(80, 60);
  let buffer = pixmap_to_rgba(&pixmap);
  let png = encode_png(&buffer).expect("png encode");

  let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
  assert_eq!(decoded.width(), 80);
  assert_eq!(decoded.height(), 60);
  assert_eq!(decoded.into_raw(), buffer.data);
}

#[test]
fn masked_corners_survive_encoding() {
  let pixmap = painted_pixmap(100, 100);
  let mut buffer = pixmap_to_rgba(&pixmap);
  let mask = rounded_rect_mask(buffer.width, buffer.height, 20);
  apply_mask(&mut buffer, &mask);

  let png = encode_png(&buffer).expect("png encode");
  let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();

  assert_eq!(decoded.get_pixel(0, 0)[3], 0, "carved corner");
  assert_eq!(decoded.get_pixel(99, 99)[3], 0, "carved corner");
  assert_eq!(decoded.get_pixel(50, 50)[3], 255, "solid interior");
  // Color channels pass through the carve untouched.
  let interior = decoded.get_pixel(50, 50);
  assert_eq!(&interior.0[0..3], &[40, 42, 54]);
}

#[test]
fn mask_is_a_noop_outside_the_corners() {
  let pixmap = painted_pixmap(100, 100);
  let unmasked = pixmap_to_rgba(&pixmap);

  let mut masked = unmasked.clone();
  let mask = rounded_rect_mask(masked.width, masked.height, 20);
  apply_mask(&mut masked, &mask);

  // Row 50 crosses no corner square; it must be byte-identical.
  let row = |buffer: &codeshot::image_output::RgbaBuffer| {
    let start = (50 * buffer.width * 4) as usize;
    buffer.data[start..start + (buffer.width * 4) as usize].to_vec()
  };
  assert_eq!(row(&unmasked), row(&masked));
}
