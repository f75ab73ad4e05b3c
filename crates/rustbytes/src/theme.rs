//! Semantic message levels and their terminal presentation.

use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use owo_colors::AnsiColors;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic class of a terminal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Error,
  Warning,
  Info,
  Success,
  Tip,
  Important,
  Debug,
}

impl Level {
  /// Uppercase prefix word used when building prefixed messages.
  pub fn label(self) -> &'static str {
    match self {
      Level::Error => "ERROR",
      Level::Warning => "WARNING",
      Level::Info => "INFO",
      Level::Success => "SUCCESS",
      Level::Tip => "TIP",
      Level::Important => "IMPORTANT",
      Level::Debug => "DEBUG",
    }
  }
}

#[derive(Debug, Error)]
#[error("unknown level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for Level {
  type Err = ParseLevelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "error" => Ok(Level::Error),
      "warning" => Ok(Level::Warning),
      "info" => Ok(Level::Info),
      "success" => Ok(Level::Success),
      "tip" => Ok(Level::Tip),
      "important" => Ok(Level::Important),
      "debug" => Ok(Level::Debug),
      other => Err(ParseLevelError(other.to_string())),
    }
  }
}

/// The sixteen ANSI terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
  Black,
  Red,
  Green,
  Yellow,
  Blue,
  Magenta,
  Cyan,
  White,
  BrightBlack,
  BrightRed,
  BrightGreen,
  BrightYellow,
  BrightBlue,
  BrightMagenta,
  BrightCyan,
  BrightWhite,
}

impl Color {
  pub(crate) fn ansi(self) -> AnsiColors {
    match self {
      Color::Black => AnsiColors::Black,
      Color::Red => AnsiColors::Red,
      Color::Green => AnsiColors::Green,
      Color::Yellow => AnsiColors::Yellow,
      Color::Blue => AnsiColors::Blue,
      Color::Magenta => AnsiColors::Magenta,
      Color::Cyan => AnsiColors::Cyan,
      Color::White => AnsiColors::White,
      Color::BrightBlack => AnsiColors::BrightBlack,
      Color::BrightRed => AnsiColors::BrightRed,
      Color::BrightGreen => AnsiColors::BrightGreen,
      Color::BrightYellow => AnsiColors::BrightYellow,
      Color::BrightBlue => AnsiColors::BrightBlue,
      Color::BrightMagenta => AnsiColors::BrightMagenta,
      Color::BrightCyan => AnsiColors::BrightCyan,
      Color::BrightWhite => AnsiColors::BrightWhite,
    }
  }
}

#[derive(Debug, Error)]
#[error("unknown color `{0}`")]
pub struct ParseColorError(String);

impl FromStr for Color {
  type Err = ParseColorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "black" => Ok(Color::Black),
      "red" => Ok(Color::Red),
      "green" => Ok(Color::Green),
      "yellow" => Ok(Color::Yellow),
      "blue" => Ok(Color::Blue),
      "magenta" => Ok(Color::Magenta),
      "cyan" => Ok(Color::Cyan),
      "white" => Ok(Color::White),
      "bright-black" => Ok(Color::BrightBlack),
      "bright-red" => Ok(Color::BrightRed),
      "bright-green" => Ok(Color::BrightGreen),
      "bright-yellow" => Ok(Color::BrightYellow),
      "bright-blue" => Ok(Color::BrightBlue),
      "bright-magenta" => Ok(Color::BrightMagenta),
      "bright-cyan" => Ok(Color::BrightCyan),
      "bright-white" => Ok(Color::BrightWhite),
      other => Err(ParseColorError(other.to_string())),
    }
  }
}

/// Symbol and color for one semantic level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStyle {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symbol: Option<String>,
  pub color: Color,
}

impl LevelStyle {
  fn new(symbol: &str, color: Color) -> Self {
    Self {
      symbol: Some(symbol.to_string()),
      color,
    }
  }
}

/// Per-level presentation plus the width of `divider`/`line` rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
  pub rule_width: usize,
  pub error: LevelStyle,
  pub warning: LevelStyle,
  pub info: LevelStyle,
  pub success: LevelStyle,
  pub tip: LevelStyle,
  pub important: LevelStyle,
  pub debug: LevelStyle,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      rule_width: 68,
      error: LevelStyle::new("✘", Color::Red),
      warning: LevelStyle::new("🛆", Color::Yellow),
      info: LevelStyle::new("✚", Color::Blue),
      success: LevelStyle::new("✔", Color::Green),
      tip: LevelStyle::new("★", Color::Cyan),
      important: LevelStyle::new("⚑", Color::Magenta),
      debug: LevelStyle {
        symbol: None,
        color: Color::White,
      },
    }
  }
}

impl Theme {
  pub fn style(&self, level: Level) -> &LevelStyle {
    match level {
      Level::Error => &self.error,
      Level::Warning => &self.warning,
      Level::Info => &self.info,
      Level::Success => &self.success,
      Level::Tip => &self.tip,
      Level::Important => &self.important,
      Level::Debug => &self.debug,
    }
  }
}

static CURRENT: Lazy<RwLock<Arc<Theme>>> = Lazy::new(|| RwLock::new(Arc::new(Theme::default())));

/// The process-wide theme used by the `echo_*!` macros and console handlers.
pub fn current() -> Arc<Theme> {
  CURRENT.read().clone()
}

/// Replace the process-wide theme (typically right after loading config).
pub fn set_current(theme: Theme) {
  *CURRENT.write() = Arc::new(theme);
}
