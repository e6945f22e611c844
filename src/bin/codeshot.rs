//! Command line interface for rendering code screenshots.

use clap::Parser;
use codeshot::{render_code, RenderConfig, DEFAULT_FONT_SIZE, DEFAULT_THEME};
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "codeshot", version, about = "Render code to a PNG screenshot")]
struct Args {
  /// Path to code file
  #[arg(long)]
  file: Option<PathBuf>,

  /// Raw code string
  #[arg(long)]
  text: Option<String>,

  /// Language for syntax highlighting (required, or inferred from --file)
  #[arg(long)]
  lang: Option<String>,

  /// Output file (PNG). If omitted, defaults to ./codeshot.png
  #[arg(long)]
  out: Option<PathBuf>,

  /// Color theme
  #[arg(long, default_value = DEFAULT_THEME)]
  theme: String,

  /// Font file (TTF, optional. Defaults to a discovered monospace face.)
  #[arg(long)]
  font: Option<PathBuf>,

  /// Font size
  #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
  fontsize: f32,
}

fn main() {
  env_logger::init();
  let args = Args::parse();
  if let Err(message) = run(args) {
    eprintln!("{message}");
    std::process::exit(1);
  }
}

fn run(args: Args) -> Result<(), String> {
  let (code, language) = read_source(&args)?;
  if language.is_empty() {
    return Err("--lang required (cannot infer)".to_string());
  }

  let mut config = RenderConfig::new(code, language)
    .theme(args.theme)
    .font_size(args.fontsize);
  if let Some(font) = args.font {
    config = config.font_path(font);
  }

  let png = render_code(&config).map_err(|e| format!("Failed to render image: {e}"))?;

  let out = match args.out {
    Some(path) => path,
    None => {
      let cwd =
        env::current_dir().map_err(|e| format!("Failed to get current directory: {e}"))?;
      cwd.join("codeshot.png")
    }
  };

  fs::write(&out, &png).map_err(|e| format!("Failed to write image: {e}"))?;
  println!("Image written to {}", out.display());
  Ok(())
}

/// Resolves the source text and language from the flags, in precedence
/// order: `--file`, then `--text`, then piped stdin.
fn read_source(args: &Args) -> Result<(String, String), String> {
  if let Some(path) = &args.file {
    let code = fs::read_to_string(path).map_err(|e| format!("Error reading file: {e}"))?;
    let language = match &args.lang {
      Some(lang) => lang.clone(),
      None => infer_language(path),
    };
    return Ok((code, language));
  }

  if let Some(text) = &args.text {
    return Ok((text.clone(), args.lang.clone().unwrap_or_default()));
  }

  let mut code = String::new();
  std::io::stdin()
    .read_to_string(&mut code)
    .map_err(|e| format!("Error reading stdin: {e}"))?;
  if code.trim().is_empty() {
    return Err("No input supplied. Use --file, --text, or pipe input.".to_string());
  }
  Ok((code, args.lang.clone().unwrap_or_default()))
}

/// Guesses a language token from a file extension. Unmapped extensions pass
/// through as-is, so `--file config.toml` still reaches the highlighter as
/// "toml".
fn infer_language(path: &Path) -> String {
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .unwrap_or("")
    .to_lowercase();
  match ext.as_str() {
    "js" => "javascript",
    "py" => "python",
    "go" => "go",
    "ts" => "typescript",
    "rs" => "rust",
    "java" => "java",
    "c" => "c",
    "cpp" | "cc" | "cxx" | "h" | "hpp" => "cpp",
    "sh" | "bash" => "bash",
    "md" => "markdown",
    "html" | "htm" => "html",
    "css" => "css",
    "json" => "json",
    _ => return ext,
  }
  .to_string()
}
