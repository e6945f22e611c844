//! RGBA color values
//!
//! Theme colors are opaque RGB; alpha only enters the picture through the
//! transparent page background and the rounded-corner mask.

/// An RGBA color with 8-bit channels and a floating point alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
  /// Red channel (0-255)
  pub r: u8,
  /// Green channel (0-255)
  pub g: u8,
  /// Blue channel (0-255)
  pub b: u8,
  /// Alpha (0.0 = transparent, 1.0 = opaque)
  pub a: f32,
}

impl Rgba {
  /// Fully transparent black
  pub const TRANSPARENT: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0.0,
  };

  /// Opaque white
  pub const WHITE: Rgba = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 1.0,
  };

  /// Opaque black
  pub const BLACK: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 1.0,
  };

  /// Creates an opaque color from RGB channels
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  /// Creates a color from RGBA components
  pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
    Self { r, g, b, a }
  }

  /// Returns the alpha as an 8-bit value
  pub fn alpha_u8(&self) -> u8 {
    (self.a * 255.0) as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rgb_is_opaque() {
    let color = Rgba::rgb(40, 42, 54);
    assert_eq!(color.r, 40);
    assert_eq!(color.g, 42);
    assert_eq!(color.b, 54);
    assert_eq!(color.alpha_u8(), 255);
  }

  #[test]
  fn test_transparent_alpha() {
    assert_eq!(Rgba::TRANSPARENT.alpha_u8(), 0);
  }

  #[test]
  fn test_alpha_u8_scaling() {
    let color = Rgba::new(0, 0, 0, 0.5);
    assert_eq!(color.alpha_u8(), 127);
  }
}
