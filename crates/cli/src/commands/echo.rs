use anyhow::Result;
use clap::Args;

use rustbytes::config::Config;
use rustbytes::message::Message;
use rustbytes::theme::{Color, Level};

#[derive(Debug, Args)]
pub struct EchoArgs {
  /// Message text; `divider` and `line` print horizontal rules
  pub text: String,
  /// Semantic level (error|warning|info|success|tip|important|debug)
  #[arg(long, conflicts_with = "color")]
  pub level: Option<Level>,
  /// Color name for plain messages (e.g. red, bright-cyan)
  #[arg(long)]
  pub color: Option<Color>,
  /// Text placed before the message
  #[arg(long)]
  pub prefix: Option<String>,
  /// Text placed after the message
  #[arg(long)]
  pub suffix: Option<String>,
  /// Print to stderr instead of stdout
  #[arg(long)]
  pub stderr: bool,
  /// Exit code used with --level error
  #[arg(long, default_value_t = 1)]
  pub code: i32,
  /// Do not append a trailing newline
  #[arg(short = 'n', long)]
  pub no_newline: bool,
}

pub fn run(cfg: &Config, args: EchoArgs) -> Result<()> {
  if let Some(level) = args.level {
    if cfg.quiet && matches!(level, Level::Info | Level::Success) {
      return Ok(());
    }
    let mut msg = Message::for_level(level, args.text, &cfg.theme).code(args.code);
    if args.stderr {
      msg = msg.to_stderr();
    }
    if args.no_newline {
      msg = msg.no_newline();
    }
    msg.emit(&cfg.theme)?;
    if level == Level::Error {
      std::process::exit(msg.exit_code());
    }
    return Ok(());
  }

  let mut msg = Message::new(args.text);
  if let Some(color) = args.color {
    msg = msg.color(color);
  }
  if let Some(prefix) = args.prefix {
    msg = msg.prefix(prefix);
  }
  if let Some(suffix) = args.suffix {
    msg = msg.suffix(suffix);
  }
  if args.stderr {
    msg = msg.to_stderr();
  }
  if args.no_newline {
    msg = msg.no_newline();
  }
  msg.emit(&cfg.theme)?;
  Ok(())
}
