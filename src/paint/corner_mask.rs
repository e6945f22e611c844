//! Rounded-corner alpha mask
//!
//! The window gets its rounded corners after painting: a one-byte-per-pixel
//! mask (255 inside the rounded rectangle, 0 outside) is multiplied into the
//! alpha channel of the straight-alpha output buffer. Only the four corner
//! squares are ever carved; every other pixel keeps its alpha.
//!
//! Mask values are binary. Anti-aliasing along the circular boundary is left
//! to the viewer's scaling; the hard edge reads fine at the radii used here.

use crate::image_output::RgbaBuffer;

/// Corner radius of the output window, in pixels.
pub const CORNER_RADIUS: u32 = 20;

/// Builds the alpha mask for a `width` x `height` window with rounded
/// corners of the given radius.
///
/// A pixel in a corner square survives when its Euclidean distance to that
/// corner's circle center is at most the radius. Centers sit at
/// `(radius, radius)` and the mirrored positions against the far edges.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> Vec<u8> {
  let mut mask = vec![255u8; width as usize * height as usize];
  if radius == 0 || width == 0 || height == 0 {
    return mask;
  }

  let r = radius as f32;
  for y in 0..height {
    for x in 0..width {
      let in_left = x < radius;
      let in_right = x + radius >= width;
      let in_top = y < radius;
      let in_bottom = y + radius >= height;
      if !(in_left || in_right) || !(in_top || in_bottom) {
        continue;
      }

      let cx = if in_left {
        r
      } else {
        width as f32 - 1.0 - r
      };
      let cy = if in_top {
        r
      } else {
        height as f32 - 1.0 - r
      };

      let dx = x as f32 - cx;
      let dy = y as f32 - cy;
      if dx.hypot(dy) > r {
        mask[(y * width + x) as usize] = 0;
      }
    }
  }
  mask
}

/// Multiplies the mask into the buffer's alpha channel.
///
/// Color channels are left untouched; the buffer holds straight alpha, so
/// scaling alpha alone is enough to carve the corners.
pub fn apply_mask(buffer: &mut RgbaBuffer, mask: &[u8]) {
  debug_assert_eq!(mask.len(), (buffer.width * buffer.height) as usize);
  for (pixel, &m) in buffer.data.chunks_exact_mut(4).zip(mask) {
    pixel[3] = ((pixel[3] as u16 * m as u16) / 255) as u8;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn corner_pixels_are_carved() {
    let (w, h) = (100u32, 80u32);
    let mask = rounded_rect_mask(w, h, 20);
    assert_eq!(mask[0], 0, "top-left");
    assert_eq!(mask[(w - 1) as usize], 0, "top-right");
    assert_eq!(mask[((h - 1) * w) as usize], 0, "bottom-left");
    assert_eq!(mask[(h * w - 1) as usize], 0, "bottom-right");
  }

  #[test]
  fn center_and_edge_midpoints_are_opaque() {
    let (w, h) = (100u32, 80u32);
    let mask = rounded_rect_mask(w, h, 20);
    assert_eq!(mask[(40 * w + 50) as usize], 255, "center");
    assert_eq!(mask[50], 255, "top edge midpoint");
    assert_eq!(mask[(40 * w) as usize], 255, "left edge midpoint");
  }

  #[test]
  fn boundary_follows_the_quarter_circle() {
    let mask = rounded_rect_mask(100, 80, 20);
    // (6, 6) is sqrt(14^2 + 14^2) ~ 19.8 from the (20, 20) center: inside.
    assert_eq!(mask[6 * 100 + 6], 255);
    // (5, 5) is sqrt(15^2 + 15^2) ~ 21.2 away: outside.
    assert_eq!(mask[5 * 100 + 5], 0);
  }

  #[test]
  fn zero_radius_carves_nothing() {
    let mask = rounded_rect_mask(40, 30, 0);
    assert!(mask.iter().all(|&m| m == 255));
  }

  #[test]
  fn mask_values_are_binary() {
    let mask = rounded_rect_mask(64, 64, 20);
    assert!(mask.iter().all(|&m| m == 0 || m == 255));
  }

  #[test]
  fn apply_scales_alpha_only() {
    let mut buffer = RgbaBuffer {
      data: vec![10, 20, 30, 255, 40, 50, 60, 128],
      width: 2,
      height: 1,
    };
    apply_mask(&mut buffer, &[255, 128]);

    assert_eq!(&buffer.data[0..4], &[10, 20, 30, 255]);
    // 128 * 128 / 255 = 64
    assert_eq!(&buffer.data[4..7], &[40, 50, 60]);
    assert_eq!(buffer.data[7], 64);
  }

  #[test]
  fn fully_masked_pixel_goes_transparent() {
    let mut buffer = RgbaBuffer {
      data: vec![200, 100, 50, 255],
      width: 1,
      height: 1,
    };
    apply_mask(&mut buffer, &[0]);
    assert_eq!(buffer.data[3], 0);
    assert_eq!(&buffer.data[0..3], &[200, 100, 50]);
  }
}
