//! Syntax and theme resolution on top of syntect
//!
//! This module adapts syntect's grammar engine to the rendering pipeline:
//!
//! - [`resolve_syntax`] picks a grammar for a language hint, falling back to
//!   first-line detection and finally plain text, so resolution never fails
//! - [`tokenize`] runs the parser over sanitized code and flattens the scope
//!   operations into a list of [`Token`]s that exactly cover the input
//! - [`ThemeStyles`] answers color queries for token kinds against a theme
//!
//! Token kinds are opaque: downstream code only compares and hashes them.
//! The set of kinds depends on whichever grammar matched, so it can never be
//! a closed enum.

use crate::color::Rgba;
use crate::error::{HighlightError, Result};
use log::{debug, warn};
use std::sync::OnceLock;
use syntect::highlighting::{Color as ThemeColor, Highlighter, Theme, ThemeSet};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when the requested theme name is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Background used when the theme does not define one.
pub const FALLBACK_BACKGROUND: Rgba = Rgba::rgb(40, 42, 54);

/// Text color used when the theme assigns no color to a token kind.
pub const FALLBACK_FOREGROUND: Rgba = Rgba::WHITE;

/// Opaque classification key for a run of source text.
///
/// Wraps the scope stack the grammar assigned to the run. Only equality and
/// hashing are exposed; the stack itself is an implementation detail of the
/// matched grammar. The default value is the unclassified kind (empty stack).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenKind {
  scopes: Vec<Scope>,
}

impl TokenKind {
  fn from_stack(stack: &ScopeStack) -> Self {
    Self {
      scopes: stack.scopes.clone(),
    }
  }

  fn as_scopes(&self) -> &[Scope] {
    &self.scopes
  }
}

/// A classified run of source text.
///
/// Token texts concatenate back to the tokenized input, including newline
/// characters. Splitting on newlines happens later, in line segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
}

/// Resolves a grammar for the given language hint.
///
/// Resolution never fails: unknown hints fall back to first-line detection
/// (shebangs, XML declarations, modelines), and undetectable input falls back
/// to the plain text grammar, which classifies everything uniformly.
pub fn resolve_syntax<'a>(
  syntax_set: &'a SyntaxSet,
  language: &str,
  code: &str,
) -> &'a SyntaxReference {
  if !language.is_empty() {
    if let Some(syntax) = syntax_set.find_syntax_by_token(language) {
      return syntax;
    }
    warn!("unknown language '{language}', trying first-line detection");
  }

  let first_line = code.lines().next().unwrap_or("");
  if let Some(syntax) = syntax_set.find_syntax_by_first_line(first_line) {
    debug!("detected syntax '{}' from first line", syntax.name);
    return syntax;
  }

  syntax_set.find_syntax_plain_text()
}

/// Theme with no color rules, for resolving against an empty theme set.
static PLAIN_THEME: OnceLock<Theme> = OnceLock::new();

/// Resolves a theme by name, falling back to [`DEFAULT_THEME`].
///
/// Resolution never fails: a set without the default name yields its first
/// theme, and an empty set yields a theme with no color rules, leaving the
/// painter on [`FALLBACK_BACKGROUND`] and [`FALLBACK_FOREGROUND`].
pub fn resolve_theme<'a>(theme_set: &'a ThemeSet, name: &str) -> &'a Theme {
  if let Some(theme) = theme_set.themes.get(name) {
    return theme;
  }
  warn!("unknown theme '{name}', falling back to '{DEFAULT_THEME}'");
  if let Some(theme) = theme_set.themes.get(DEFAULT_THEME) {
    return theme;
  }
  // Only reachable with a custom theme set that lacks the default name.
  theme_set
    .themes
    .values()
    .next()
    .unwrap_or_else(|| PLAIN_THEME.get_or_init(Theme::default))
}

/// Tokenizes sanitized source code with the given grammar.
///
/// Feeds the parser one line at a time (lines keep their `\n`) while tracking
/// the scope stack, and emits a token for every run between scope operations.
/// The emitted texts cover the whole input in order.
///
/// # Errors
///
/// Returns [`HighlightError::Tokenize`] when the parser itself fails. This is
/// a structural failure of the grammar engine, not a property of the input
/// language.
pub fn tokenize(code: &str, syntax: &SyntaxReference, syntax_set: &SyntaxSet) -> Result<Vec<Token>> {
  let mut state = ParseState::new(syntax);
  let mut stack = ScopeStack::new();
  let mut tokens = Vec::new();

  for line in LinesWithEndings::from(code) {
    let ops = state.parse_line(line, syntax_set).map_err(|e| {
      HighlightError::Tokenize {
        reason: e.to_string(),
      }
    })?;

    let mut cursor = 0;
    for (offset, op) in ops {
      if offset > cursor {
        tokens.push(Token {
          kind: TokenKind::from_stack(&stack),
          text: line[cursor..offset].to_string(),
        });
        cursor = offset;
      }
      stack.apply(&op).map_err(|e| {
        HighlightError::Tokenize {
          reason: e.to_string(),
        }
      })?;
    }
    if cursor < line.len() {
      tokens.push(Token {
        kind: TokenKind::from_stack(&stack),
        text: line[cursor..].to_string(),
      });
    }
  }

  Ok(tokens)
}

/// Color queries against a resolved theme.
pub struct ThemeStyles<'a> {
  theme: &'a Theme,
  highlighter: Highlighter<'a>,
}

impl<'a> ThemeStyles<'a> {
  pub fn new(theme: &'a Theme) -> Self {
    Self {
      theme,
      highlighter: Highlighter::new(theme),
    }
  }

  /// Returns the foreground color the theme assigns to this token kind.
  ///
  /// A kind without a matching theme rule inherits the theme's default
  /// foreground; `None` means the theme assigns nothing at all, and the
  /// caller should fall back to [`FALLBACK_FOREGROUND`].
  pub fn color_for(&self, kind: &TokenKind) -> Option<Rgba> {
    let style = self.highlighter.style_mod_for_stack(kind.as_scopes());
    style
      .foreground
      .or(self.theme.settings.foreground)
      .map(to_rgba)
  }

  /// Returns the theme's page background color, if it defines one.
  pub fn background(&self) -> Option<Rgba> {
    self.theme.settings.background.map(to_rgba)
  }
}

fn to_rgba(color: ThemeColor) -> Rgba {
  Rgba::rgb(color.r, color.g, color.b)
}
