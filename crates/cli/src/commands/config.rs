use anyhow::Result;

use rustbytes::config::Config;

pub fn run(cfg: &Config, json: bool) -> Result<()> {
  if json {
    anstream::println!("{}", serde_json::to_string_pretty(cfg)?);
  } else {
    anstream::print!("{}", toml::to_string_pretty(cfg)?);
  }
  Ok(())
}
