use std::path::Path;

use super::paths::project_config_path;
use super::types::Config;

/// Write a default project config if it does not exist yet.
pub fn write_default_project_config(project_root: &Path) -> std::io::Result<()> {
  let path = project_config_path(project_root);
  if let Some(parent) = path.parent() {
    let _ = std::fs::create_dir_all(parent);
  }
  if !path.exists() {
    let cfg = Config::default();
    let mut s = toml::to_string_pretty(&cfg).unwrap_or_else(|_| String::from(""));
    // log_file is None by default and therefore skipped during
    // serialization; document it with a commented example instead.
    s.push_str(
      "\n# File that named loggers append to. RUSTBYTES_LOG overrides this.\n# log_file = \".rustbytes/rustbytes.log\"\n",
    );
    std::fs::write(&path, s)?;
  }
  Ok(())
}
