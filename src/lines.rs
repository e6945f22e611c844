//! Line segmentation of the token stream
//!
//! The tokenizer emits tokens that may contain newlines (a token always does
//! at line ends, and a single token can span several lines inside block
//! constructs). Layout and painting work line by line, so the stream is split
//! here: afterwards no token text contains a newline.

use crate::highlight::Token;

/// One visual line of tokens. May be empty (a blank source line).
pub type Line = Vec<Token>;

/// All lines of the rendered snippet, top to bottom.
pub type Document = Vec<Line>;

/// Splits a token stream into lines on `\n`.
///
/// Characters before each newline stay in the current line (keeping their
/// token kind), the newline itself closes the line, and the remainder of the
/// token continues in the next one. Blank lines are preserved. Tokens after
/// the last newline form a final line; an input that produces no lines at all
/// yields a single empty line so there is always something to lay out.
pub fn segment(tokens: Vec<Token>) -> Document {
  let mut lines: Document = Vec::new();
  let mut current: Line = Vec::new();

  for token in tokens {
    let mut text = token.text.as_str();
    while let Some(idx) = text.find('\n') {
      if idx > 0 {
        current.push(Token {
          kind: token.kind.clone(),
          text: text[..idx].to_string(),
        });
      }
      lines.push(std::mem::take(&mut current));
      text = &text[idx + 1..];
    }
    if !text.is_empty() {
      current.push(Token {
        kind: token.kind.clone(),
        text: text.to_string(),
      });
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }
  if lines.is_empty() {
    lines.push(Line::new());
  }
  lines
}
