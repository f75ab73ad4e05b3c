use std::env;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Location of the global config file (~/.config/rustbytes/config.toml)
pub fn global_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|p| p.join("rustbytes").join("config.toml"))
}

/// Location of the project config file (./.rustbytes/config.toml)
pub fn project_config_path(project_root: &Path) -> PathBuf {
  project_root.join(".rustbytes").join("config.toml")
}

/// Resolve the log file path: RUSTBYTES_LOG overrides the configured
/// `log_file`; None means file logging is disabled.
pub fn resolve_log_path(config: &Config) -> Option<PathBuf> {
  env::var_os("RUSTBYTES_LOG")
    .map(PathBuf::from)
    .or_else(|| config.log_file.clone())
}
