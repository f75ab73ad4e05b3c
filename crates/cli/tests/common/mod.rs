#![allow(dead_code)]

use assert_cmd::Command;
use test_support::TempProject;

/// Command for the `rustbytes` binary running inside `project`, isolated
/// from the developer's real global config and environment.
pub fn rustbytes_cmd(project: &TempProject) -> Command {
  let mut cmd = Command::cargo_bin("rustbytes").expect("binary under test");
  cmd.current_dir(project.path());
  cmd.env("HOME", project.path());
  cmd.env("XDG_CONFIG_HOME", project.path().join("xdg-config"));
  cmd.env_remove("RUSTBYTES_LOG");
  cmd
}
