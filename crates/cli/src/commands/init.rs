use std::path::Path;

use anyhow::Result;

use rustbytes::config::{project_config_path, write_default_project_config};
use rustbytes::{echo_success, echo_warn};

pub fn run(root: &Path) -> Result<()> {
  let path = project_config_path(root);
  if path.exists() {
    echo_warn!("{} already exists", path.display());
    return Ok(());
  }
  write_default_project_config(root)?;
  echo_success!("created {}", path.display());
  Ok(())
}
