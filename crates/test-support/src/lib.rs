//! Shared helpers for rustbytes integration tests.

use std::path::PathBuf;

/// Temporary project root for tests.
/// Provides convenience helpers for the `.rustbytes` layout.
pub struct TempProject {
  pub root: tempfile::TempDir,
}

impl Default for TempProject {
  fn default() -> Self {
    Self::new()
  }
}

impl TempProject {
  pub fn new() -> Self {
    let root = tempfile::tempdir().expect("tempdir");
    Self { root }
  }

  pub fn path(&self) -> PathBuf {
    self.root.path().to_path_buf()
  }

  /// Create the `.rustbytes` directory inside the temp root.
  pub fn mkdir_rustbytes(&self) -> PathBuf {
    let p = self.path().join(".rustbytes");
    std::fs::create_dir_all(&p).expect("mkdir .rustbytes");
    p
  }

  /// Write a project config with the given TOML contents and return its path.
  pub fn write_project_config(&self, contents: &str) -> PathBuf {
    let dir = self.mkdir_rustbytes();
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).expect("write project config");
    path
  }
}
