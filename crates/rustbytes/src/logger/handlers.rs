//! Log record destinations.
//!
//! Handlers are multitons keyed by name, like loggers: asking for an existing
//! name returns the existing handler regardless of kind or path. File
//! handlers append through a non-blocking writer whose background worker
//! flushes when the last handle is dropped.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use owo_colors::OwoColorize as _;
use parking_lot::{Mutex, RwLock};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

use super::{LogLevel, LoggerError, Record};
use crate::theme::{self, Level, Theme};

enum Target {
  Stdout,
  Stderr,
  File {
    writer: Mutex<NonBlocking>,
    _guard: WorkerGuard,
  },
}

struct HandlerInner {
  name: String,
  level: RwLock<LogLevel>,
  target: Target,
}

/// Cheaply clonable handle to a named log destination.
#[derive(Clone)]
pub struct Handler {
  inner: Arc<HandlerInner>,
}

static HANDLERS: Lazy<RwLock<HashMap<String, Handler>>> = Lazy::new(Default::default);

impl Handler {
  /// Get or create a console handler printing to stdout.
  pub fn stdout(name: &str) -> Handler {
    get_or_insert(name, Target::Stdout)
  }

  /// Get or create a console handler printing to stderr.
  pub fn stderr(name: &str) -> Handler {
    get_or_insert(name, Target::Stderr)
  }

  /// Get or create a file handler appending to `path`. Parent directories
  /// are created. If a handler with this name already exists it is returned
  /// as-is and `path` is ignored. Pass `truncate` to start the file fresh
  /// instead of appending.
  pub fn file(name: &str, path: &Path) -> Result<Handler, LoggerError> {
    Self::file_with_options(name, path, false)
  }

  pub fn file_with_options(name: &str, path: &Path, truncate: bool) -> Result<Handler, LoggerError> {
    if let Some(existing) = HANDLERS.read().get(name) {
      return Ok(existing.clone());
    }
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if truncate {
      options.truncate(true);
    } else {
      options.append(true);
    }
    let file = options.open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    Ok(insert(
      name,
      Target::File {
        writer: Mutex::new(writer),
        _guard: guard,
      },
    ))
  }

  pub fn name(&self) -> &str {
    &self.inner.name
  }

  /// Handler-level filter applied after the logger's own (default `Trace`,
  /// i.e. pass everything through).
  pub fn level(&self) -> LogLevel {
    *self.inner.level.read()
  }

  pub fn set_level(&self, level: LogLevel) {
    *self.inner.level.write() = level;
  }

  pub(super) fn handle(&self, record: &Record) {
    if !self.level().allows(record.level) {
      return;
    }
    match &self.inner.target {
      Target::Stdout => {
        anstream::println!("{}", render_console(record, &theme::current()));
      }
      Target::Stderr => {
        anstream::eprintln!("{}", render_console(record, &theme::current()));
      }
      Target::File { writer, .. } => {
        let mut writer = writer.lock();
        let _ = writer.write_all(record.plain().as_bytes());
        let _ = writer.write_all(b"\n");
      }
    }
  }
}

fn get_or_insert(name: &str, target: Target) -> Handler {
  if let Some(existing) = HANDLERS.read().get(name) {
    return existing.clone();
  }
  insert(name, target)
}

fn insert(name: &str, target: Target) -> Handler {
  let mut registry = HANDLERS.write();
  if let Some(existing) = registry.get(name) {
    return existing.clone();
  }
  let handler = Handler {
    inner: Arc::new(HandlerInner {
      name: name.to_string(),
      level: RwLock::new(LogLevel::Trace),
      target,
    }),
  };
  registry.insert(name.to_string(), handler.clone());
  handler
}

pub(super) fn clear_registry() {
  HANDLERS.write().clear();
}

/// Console line: dimmed timestamp, level word tinted with the theme color of
/// the matching semantic level, the rest unstyled.
fn render_console(record: &Record, theme: &Theme) -> String {
  let color = match record.level {
    LogLevel::Error => theme.style(Level::Error).color,
    LogLevel::Warn => theme.style(Level::Warning).color,
    LogLevel::Info => theme.style(Level::Info).color,
    LogLevel::Off | LogLevel::Debug | LogLevel::Trace => theme.style(Level::Debug).color,
  };
  format!(
    "{} {} {}: {}",
    record.timestamp.dimmed(),
    record.level.label().color(color.ansi()),
    record.target,
    record.message
  )
}
