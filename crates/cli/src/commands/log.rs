use anyhow::{Context as _, Result, bail};
use clap::Args;

use rustbytes::config::{self, Config};
use rustbytes::logger::{self, Handler, LogLevel, Logger};

#[derive(Debug, Args)]
pub struct LogArgs {
  pub message: String,
  /// Record level (error|warn|info|debug|trace)
  #[arg(long, default_value = "info")]
  pub level: LogLevel,
  /// Logger name recorded with the message
  #[arg(long, default_value = "rustbytes")]
  pub logger: String,
}

pub fn run(cfg: &Config, args: LogArgs) -> Result<()> {
  let Some(path) = config::resolve_log_path(cfg) else {
    bail!("no log file configured; set RUSTBYTES_LOG or `log_file` in the config");
  };
  {
    let handler = Handler::file(&args.logger, &path)
      .with_context(|| format!("open log file {}", path.display()))?;
    let logger = Logger::with_handlers(&args.logger, cfg.log_level, vec![handler]);
    logger.log(args.level, &args.message);
  }
  // Flush the background writer before this short-lived process exits
  logger::shutdown();
  Ok(())
}
