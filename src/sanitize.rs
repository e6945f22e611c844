//! Input normalization for source code
//!
//! Pasted code arrives with BOMs, tabs, non-breaking spaces, zero-width
//! characters, and Windows line endings. All of these either break monospace
//! column math or render as missing glyphs, so they are normalized up front.
//! Everything downstream can then assume clean, drawable text.
//!
//! The whole pass is pure and idempotent: running it twice gives the same
//! result as running it once.

/// Lower bound of the extended Latin band that passes the filter unchanged.
pub const LATIN_PASS_LO: char = '\u{00A0}';

/// Upper bound of the extended Latin band that passes the filter unchanged.
///
/// Widening this range is a rendering-palette decision; anything outside it
/// becomes a plain space rather than a missing-glyph box.
pub const LATIN_PASS_HI: char = '\u{017F}';

/// Number of spaces a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Normalizes raw source text into drawable form.
///
/// Applied in order:
/// 1. strip a leading U+FEFF byte order mark
/// 2. expand tabs to [`TAB_WIDTH`] spaces
/// 3. replace non-breaking spaces (U+00A0) with regular spaces
/// 4. delete zero-width spaces (U+200B)
/// 5. fold CRLF sequences to LF
/// 6. replace every character outside the printable ASCII range and the
///    extended Latin band with a single space (newlines and carriage returns
///    pass through)
pub fn sanitize(code: &str) -> String {
  let code = code.strip_prefix('\u{FEFF}').unwrap_or(code);
  let mut code = code.replace('\t', &" ".repeat(TAB_WIDTH));
  code = code.replace('\u{00A0}', " ");
  code = code.replace('\u{200B}', "");
  // Fold to a fixpoint so collapses cannot leave a new CRLF pair behind.
  while code.contains("\r\n") {
    code = code.replace("\r\n", "\n");
  }

  code
    .chars()
    .map(|c| match c {
      '\n' | '\r' => c,
      ' '..='~' => c,
      LATIN_PASS_LO..=LATIN_PASS_HI => c,
      _ => ' ',
    })
    .collect()
}
