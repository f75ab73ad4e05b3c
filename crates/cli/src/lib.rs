use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// rustbytes - styled terminal messages and logging for shell scripts.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Print a styled message (`divider` and `line` print horizontal rules)
  Echo(commands::echo::EchoArgs),
  /// Append a record to the configured log file
  Log(commands::log::LogArgs),
  /// Create a default project config under .rustbytes/
  Init,
  /// Print the effective merged configuration
  Config {
    /// Print as JSON instead of TOML
    #[arg(long)]
    json: bool,
  },
}

pub fn run() -> Result<()> {
  let cli = Cli::parse();
  let cwd = std::env::current_dir()?;
  let cfg = rustbytes::config::load(Some(&cwd))?;
  rustbytes::theme::set_current(cfg.theme.clone());

  match cli.command {
    Commands::Echo(args) => commands::echo::run(&cfg, args),
    Commands::Log(args) => commands::log::run(&cfg, args),
    Commands::Init => commands::init::run(&cwd),
    Commands::Config { json } => commands::config::run(&cfg, json),
  }
}
