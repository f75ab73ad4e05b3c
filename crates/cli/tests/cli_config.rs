mod common;

use common::rustbytes_cmd;
use predicates::prelude::*;
use test_support::TempProject;

#[test]
fn config_prints_the_effective_defaults_as_toml() {
  let project = TempProject::new();
  rustbytes_cmd(&project)
    .arg("config")
    .assert()
    .success()
    .stdout(predicates::str::contains("log_level = \"info\"").from_utf8())
    .stdout(predicates::str::contains("quiet = false").from_utf8())
    .stdout(predicates::str::contains("rule_width = 68").from_utf8())
    .stdout(predicates::str::contains("[theme.success]").from_utf8());
}

#[test]
fn config_reflects_project_overrides() {
  let project = TempProject::new();
  project.write_project_config(
    "log_level = \"debug\"\n\n[theme.error]\ncolor = \"bright-red\"\n",
  );
  rustbytes_cmd(&project)
    .arg("config")
    .assert()
    .success()
    .stdout(predicates::str::contains("log_level = \"debug\"").from_utf8())
    .stdout(predicates::str::contains("color = \"bright-red\"").from_utf8())
    // untouched levels keep their defaults
    .stdout(predicates::str::contains("color = \"yellow\"").from_utf8());
}

#[test]
fn config_json_flag_prints_json() {
  let project = TempProject::new();
  rustbytes_cmd(&project)
    .args(["config", "--json"])
    .assert()
    .success()
    .stdout(predicates::str::contains("\"log_level\": \"info\"").from_utf8())
    .stdout(predicates::str::contains("\"rule_width\": 68").from_utf8());
}

#[test]
fn malformed_project_config_is_reported() {
  let project = TempProject::new();
  project.write_project_config("log_level = \n");
  rustbytes_cmd(&project)
    .arg("config")
    .assert()
    .failure()
    .stderr(predicates::str::contains("toml").from_utf8());
}
