use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logger::LogLevel;
use crate::theme::Theme;

/// Effective configuration after merging defaults, global, and project config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  pub log_level: LogLevel,
  /// File that named loggers append to (None disables file logging)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub log_file: Option<PathBuf>,
  /// Suppress info- and success-class echoes
  pub quiet: bool,
  pub theme: Theme,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_level: LogLevel::Info,
      log_file: None,
      quiet: false,
      theme: Theme::default(),
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml: {0}")]
  Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
