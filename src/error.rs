//! Error types for codeshot
//!
//! This module provides error types for all subsystems:
//! - Font errors (discovery, loading, parsing)
//! - Highlight errors (structural tokenizer failures)
//! - Render errors (canvas creation, encoding)
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.
//!
//! Unknown languages and unknown theme names are deliberately *not* errors:
//! both resolve through fallback chains and still produce an image.

use thiserror::Error;

/// Result type alias for codeshot operations
///
/// # Examples
///
/// ```
/// use codeshot::Result;
///
/// fn check_input(code: &str) -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for codeshot
///
/// Each variant wraps a more specific error type for that subsystem.
#[derive(Error, Debug)]
pub enum Error {
  /// Font discovery, loading, or parsing error
  #[error("Font error: {0}")]
  Font(#[from] FontError),

  /// Tokenizer error
  #[error("Highlight error: {0}")]
  Highlight(#[from] HighlightError),

  /// Rendering or encoding error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),

  /// I/O error (file reading, output writing)
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Errors that occur during font discovery and loading
///
/// # Examples
///
/// ```
/// use codeshot::error::FontError;
///
/// let error = FontError::InvalidFontFile {
///     path: "/tmp/broken.ttf".to_string(),
/// };
/// ```
#[derive(Error, Debug, Clone)]
pub enum FontError {
  /// No monospace font could be found on the system
  #[error("No usable monospace font found on system")]
  NoUsableFont,

  /// Font file is invalid or corrupted
  #[error("Invalid font file: {path}")]
  InvalidFontFile { path: String },

  /// Font file could not be read
  #[error("Failed to read font '{path}': {reason}")]
  ReadFailed { path: String, reason: String },
}

/// Errors that occur while tokenizing source code
///
/// These indicate a structural failure inside the syntax engine, not an
/// unknown language (which falls back to plain text instead).
#[derive(Error, Debug, Clone)]
pub enum HighlightError {
  /// The syntax engine failed while parsing a line
  #[error("Tokenizer failed: {reason}")]
  Tokenize { reason: String },
}

/// Errors that occur during rasterization and image encoding
#[derive(Error, Debug, Clone)]
pub enum RenderError {
  /// Canvas creation failed
  #[error("Failed to create canvas: {width}x{height}")]
  CanvasCreationFailed { width: u32, height: u32 },

  /// Image encoding failed
  #[error("Failed to encode PNG: {reason}")]
  EncodeFailed { reason: String },
}
