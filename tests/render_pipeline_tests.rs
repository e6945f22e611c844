//! End-to-end tests for the render pipeline
//!
//! These render real PNGs through the public API and assert on the decoded
//! pixels. Environments without any usable monospace font skip the tests
//! that need one.

use codeshot::error::{Error, FontError};
use codeshot::{render_code, RenderConfig, Renderer, DEFAULT_THEME};
use image::RgbaImage;

fn render_or_skip(config: &RenderConfig) -> Option<Vec<u8>> {
  match render_code(config) {
    Ok(png) => Some(png),
    Err(Error::Font(FontError::NoUsableFont)) => None, // Skip if no fonts available
    Err(err) => panic!("render failed: {err}"),
  }
}

fn decode(png: &[u8]) -> RgbaImage {
  image::load_from_memory(png)
    .expect("output should decode as an image")
    .to_rgba8()
}

#[test]
fn renders_a_basic_snippet() {
  let config = RenderConfig::new("let x = 1;\n", "rust");
  let Some(png) = render_or_skip(&config) else {
    return;
  };

  assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
  let img = decode(&png);
  assert!(img.width() >= 64);
  assert!(img.height() >= 104);
}

#[test]
fn output_is_deterministic() {
  let config = RenderConfig::new("fn main() {\n    println!(\"hi\");\n}\n", "rust");
  let renderer = Renderer::new();
  let first = match renderer.render(&config) {
    Ok(png) => png,
    Err(Error::Font(FontError::NoUsableFont)) => return, // Skip if no fonts available
    Err(err) => panic!("render failed: {err}"),
  };

  let second = renderer.render(&config).expect("second render");
  assert_eq!(first, second, "same renderer must reproduce identical bytes");

  let fresh = render_code(&config).expect("fresh renderer");
  assert_eq!(first, fresh, "a new renderer must reproduce identical bytes");
}

#[test]
fn height_follows_the_line_count() {
  // Each line is 18 * 1.4 = 25.2px; plus 32px padding twice and the 40px bar.
  let one = RenderConfig::new("a", "python");
  let four = RenderConfig::new("a\nb\nc\nd", "python");

  let Some(png_one) = render_or_skip(&one) else {
    return;
  };
  let png_four = render_or_skip(&four).expect("font was available above");

  assert_eq!(decode(&png_one).height(), 25 + 104);
  assert_eq!(decode(&png_four).height(), 100 + 104);
}

#[test]
fn trailing_newline_does_not_add_a_line() {
  let without = RenderConfig::new("a\nb", "python");
  let with = RenderConfig::new("a\nb\n", "python");

  let Some(png_without) = render_or_skip(&without) else {
    return;
  };
  let png_with = render_or_skip(&with).expect("font was available above");
  assert_eq!(decode(&png_without).height(), decode(&png_with).height());
}

#[test]
fn empty_input_renders_a_one_line_window() {
  let config = RenderConfig::new("", "python");
  let Some(png) = render_or_skip(&config) else {
    return;
  };

  let img = decode(&png);
  assert_eq!(img.width(), 64, "only the horizontal padding remains");
  assert_eq!(img.height(), 25 + 104);
}

#[test]
fn corners_are_transparent_and_center_opaque() {
  let config = RenderConfig::new("let x = 1;", "rust");
  let Some(png) = render_or_skip(&config) else {
    return;
  };

  let img = decode(&png);
  let (w, h) = (img.width(), img.height());
  assert_eq!(img.get_pixel(0, 0)[3], 0, "top-left corner");
  assert_eq!(img.get_pixel(w - 1, 0)[3], 0, "top-right corner");
  assert_eq!(img.get_pixel(0, h - 1)[3], 0, "bottom-left corner");
  assert_eq!(img.get_pixel(w - 1, h - 1)[3], 0, "bottom-right corner");
  assert_eq!(img.get_pixel(w / 2, h / 2)[3], 255, "window center");
  assert_eq!(img.get_pixel(w / 2, 0)[3], 255, "top edge midpoint");
}

#[test]
fn unknown_language_still_renders() {
  let config = RenderConfig::new("some plain words", "nosuchlang-xyz");
  let Some(png) = render_or_skip(&config) else {
    return;
  };
  decode(&png);
}

#[test]
fn unknown_theme_falls_back_to_the_default() {
  let renderer = Renderer::new();
  let code = "fn id(x: u8) -> u8 { x }\n";

  let unknown = RenderConfig::new(code, "rust").theme("definitely-not-a-theme");
  let with_unknown = match renderer.render(&unknown) {
    Ok(png) => png,
    Err(Error::Font(FontError::NoUsableFont)) => return, // Skip if no fonts available
    Err(err) => panic!("render failed: {err}"),
  };

  let default = RenderConfig::new(code, "rust").theme(DEFAULT_THEME);
  let with_default = renderer.render(&default).expect("default theme render");
  assert_eq!(with_unknown, with_default);
}

#[test]
fn python_snippet_with_dracula_theme_renders() {
  let config = RenderConfig::new("x=1", "python").theme("dracula");
  let Some(png) = render_or_skip(&config) else {
    return;
  };

  let img = decode(&png);
  assert_eq!(img.height(), 25 + 104);
  assert!(img.width() >= 64);
}

#[test]
fn wider_code_produces_wider_images() {
  let narrow = RenderConfig::new("ab", "python");
  let wide = RenderConfig::new("abcdefgh", "python");

  let Some(png_narrow) = render_or_skip(&narrow) else {
    return;
  };
  let png_wide = render_or_skip(&wide).expect("font was available above");
  assert!(decode(&png_wide).width() > decode(&png_narrow).width());
}

#[test]
fn width_is_set_by_the_widest_line() {
  let multi = RenderConfig::new("aa\naaaa\na", "python");
  let single = RenderConfig::new("aaaa", "python");

  let Some(png_multi) = render_or_skip(&multi) else {
    return;
  };
  let png_single = render_or_skip(&single).expect("font was available above");
  assert_eq!(decode(&png_multi).width(), decode(&png_single).width());
}

#[test]
fn font_size_scales_the_window() {
  let small = RenderConfig::new("x", "python").font_size(18.0);
  let large = RenderConfig::new("x", "python").font_size(36.0);

  let Some(png_small) = render_or_skip(&small) else {
    return;
  };
  let png_large = render_or_skip(&large).expect("font was available above");

  // trunc(18 * 1.4) vs trunc(36 * 1.4), plus the fixed 104px frame.
  assert_eq!(decode(&png_small).height(), 25 + 104);
  assert_eq!(decode(&png_large).height(), 50 + 104);
  assert!(decode(&png_large).width() > decode(&png_small).width());
}

#[test]
fn tabs_render_as_four_spaces() {
  let tabbed = RenderConfig::new("\tx", "python");
  let spaced = RenderConfig::new("    x", "python");

  let Some(png_tabbed) = render_or_skip(&tabbed) else {
    return;
  };
  let png_spaced = render_or_skip(&spaced).expect("font was available above");
  assert_eq!(png_tabbed, png_spaced);
}

#[test]
fn crlf_and_lf_render_identically() {
  let crlf = RenderConfig::new("a\r\nb", "python");
  let lf = RenderConfig::new("a\nb", "python");

  let Some(png_crlf) = render_or_skip(&crlf) else {
    return;
  };
  let png_lf = render_or_skip(&lf).expect("font was available above");
  assert_eq!(png_crlf, png_lf);
}

#[test]
fn empty_language_detects_from_content() {
  let config = RenderConfig::new("#!/bin/bash\necho hi\n", "");
  let Some(png) = render_or_skip(&config) else {
    return;
  };
  decode(&png);
}

#[test]
fn missing_font_file_is_a_font_error() {
  let config = RenderConfig::new("x", "python").font_path("/no/such/font.ttf");
  let err = render_code(&config).unwrap_err();
  assert!(matches!(err, Error::Font(FontError::ReadFailed { .. })));
  assert!(err.to_string().contains("/no/such/font.ttf"));
}
