pub mod color;
pub mod error;
pub mod font;
pub mod highlight;
pub mod image_output;
pub mod layout;
pub mod lines;
pub mod paint;
pub mod renderer;
pub mod sanitize;

pub use color::Rgba;
pub use error::{Error, Result};
pub use font::FontFace;
pub use highlight::{Token, TokenKind, DEFAULT_THEME};
pub use lines::{Document, Line};
pub use renderer::{render_code, FontSource, RenderConfig, Renderer, DEFAULT_FONT_SIZE};
