use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::{global_config_path, project_config_path};
use super::types::{Config, Result};
use crate::logger::LogLevel;
use crate::theme::{Color, LevelStyle, Theme};

/// Load configuration by resolving the default global and project paths.
/// Project config overrides global; both override defaults. Missing files
/// are treated as absent, malformed TOML is an error.
pub fn load(project_root: Option<&Path>) -> Result<Config> {
  let defaults = Config::default();
  let mut cfg = defaults;

  // Global
  if let Some(global_path) = global_config_path()
    && let Ok(s) = fs::read_to_string(&global_path)
  {
    let partial: PartialConfig = toml::from_str(&s)?;
    cfg = partial.merge_over(cfg);
  }

  // Project
  if let Some(root) = project_root {
    let project_path = project_config_path(root);
    if let Ok(s) = fs::read_to_string(&project_path) {
      let partial: PartialConfig = toml::from_str(&s)?;
      cfg = partial.merge_over(cfg);
    }
  }

  Ok(cfg)
}

/// Test helper: load configuration from explicit file paths (if present).
#[cfg(test)]
pub(crate) fn load_from_paths(global: Option<&Path>, project: Option<&Path>) -> Result<Config> {
  let defaults = Config::default();
  let mut cfg = defaults;

  if let Some(g) = global
    && let Ok(s) = fs::read_to_string(g)
  {
    let partial: PartialConfig = toml::from_str(&s)?;
    cfg = partial.merge_over(cfg);
  }

  if let Some(p) = project
    && let Ok(s) = fs::read_to_string(p)
  {
    let partial: PartialConfig = toml::from_str(&s)?;
    cfg = partial.merge_over(cfg);
  }

  Ok(cfg)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct PartialLevelStyle {
  /// Missing keeps the base symbol; TOML has no null literal, so a symbol
  /// can be replaced but not cleared.
  pub symbol: Option<String>,
  pub color: Option<Color>,
}

impl PartialLevelStyle {
  fn merge_over(self, base: LevelStyle) -> LevelStyle {
    LevelStyle {
      symbol: self.symbol.or(base.symbol),
      color: self.color.unwrap_or(base.color),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct PartialTheme {
  pub rule_width: Option<usize>,
  pub error: Option<PartialLevelStyle>,
  pub warning: Option<PartialLevelStyle>,
  pub info: Option<PartialLevelStyle>,
  pub success: Option<PartialLevelStyle>,
  pub tip: Option<PartialLevelStyle>,
  pub important: Option<PartialLevelStyle>,
  pub debug: Option<PartialLevelStyle>,
}

impl PartialTheme {
  fn merge_over(self, base: Theme) -> Theme {
    Theme {
      rule_width: self.rule_width.unwrap_or(base.rule_width),
      error: self.error.unwrap_or_default().merge_over(base.error),
      warning: self.warning.unwrap_or_default().merge_over(base.warning),
      info: self.info.unwrap_or_default().merge_over(base.info),
      success: self.success.unwrap_or_default().merge_over(base.success),
      tip: self.tip.unwrap_or_default().merge_over(base.tip),
      important: self.important.unwrap_or_default().merge_over(base.important),
      debug: self.debug.unwrap_or_default().merge_over(base.debug),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct PartialConfig {
  pub log_level: Option<LogLevel>,
  pub log_file: Option<std::path::PathBuf>,
  pub quiet: Option<bool>,
  pub theme: Option<PartialTheme>,
}

impl PartialConfig {
  fn merge_over(self, base: Config) -> Config {
    let PartialConfig {
      log_level,
      log_file,
      quiet,
      theme,
    } = self;

    let Config {
      log_level: base_log_level,
      log_file: base_log_file,
      quiet: base_quiet,
      theme: base_theme,
    } = base;

    Config {
      log_level: log_level.unwrap_or(base_log_level),
      log_file: log_file.or(base_log_file),
      quiet: quiet.unwrap_or(base_quiet),
      theme: theme.unwrap_or_default().merge_over(base_theme),
    }
  }
}
