//! Named loggers with pluggable handlers.
//!
//! Loggers are multitons: [`Logger::named`] with the same name always returns
//! a handle to the same logger, and a second creation never re-levels an
//! existing one. Records flow through the logger's level filter, then through
//! each handler's own filter. [`install_global`] bridges a logger into the
//! `log` facade so `log::info!` and friends route through its handlers.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod handlers;

pub use handlers::Handler;

/// Record/filter level. `Off` is only meaningful as a filter.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Off,
  Error,
  Warn,
  #[default]
  Info,
  Debug,
  Trace,
}

impl LogLevel {
  /// Whether a record at `record` level passes a filter set to `self`.
  pub fn allows(self, record: LogLevel) -> bool {
    record != LogLevel::Off && record <= self
  }

  pub fn label(self) -> &'static str {
    match self {
      LogLevel::Off => "OFF",
      LogLevel::Error => "ERROR",
      LogLevel::Warn => "WARN",
      LogLevel::Info => "INFO",
      LogLevel::Debug => "DEBUG",
      LogLevel::Trace => "TRACE",
    }
  }
}

#[derive(Debug, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
  type Err = ParseLogLevelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "off" => Ok(LogLevel::Off),
      "error" => Ok(LogLevel::Error),
      "warn" => Ok(LogLevel::Warn),
      "info" => Ok(LogLevel::Info),
      "debug" => Ok(LogLevel::Debug),
      "trace" => Ok(LogLevel::Trace),
      other => Err(ParseLogLevelError(other.to_string())),
    }
  }
}

#[derive(Debug, Error)]
pub enum LoggerError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

/// One log entry as handed to handlers.
#[derive(Debug, Clone)]
pub struct Record {
  /// UTC, RFC 3339 with second precision
  pub timestamp: String,
  pub level: LogLevel,
  pub target: String,
  pub message: String,
}

impl Record {
  fn new(level: LogLevel, target: String, message: String) -> Self {
    Self {
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
      level,
      target,
      message,
    }
  }

  /// Unstyled line as written by file handlers.
  pub fn plain(&self) -> String {
    format!("{} {} {}: {}", self.timestamp, self.level.label(), self.target, self.message)
  }
}

struct LoggerInner {
  name: String,
  level: RwLock<LogLevel>,
  handlers: RwLock<Vec<Handler>>,
}

/// Cheaply clonable handle to a named logger.
#[derive(Clone)]
pub struct Logger {
  inner: Arc<LoggerInner>,
}

static LOGGERS: Lazy<RwLock<HashMap<String, Logger>>> = Lazy::new(Default::default);

impl Logger {
  /// Get or create the logger with this name at the default `Info` level.
  pub fn named(name: &str) -> Logger {
    Self::with_level(name, LogLevel::Info)
  }

  /// Get or create the logger with this name. The level only applies on
  /// first creation; an existing logger is returned unchanged.
  pub fn with_level(name: &str, level: LogLevel) -> Logger {
    Self::with_handlers(name, level, vec![Handler::stdout("stdout")])
  }

  /// As [`Logger::with_level`], with an explicit handler set instead of the
  /// shared stdout handler.
  pub fn with_handlers(name: &str, level: LogLevel, handlers: Vec<Handler>) -> Logger {
    if let Some(existing) = LOGGERS.read().get(name) {
      return existing.clone();
    }
    let mut registry = LOGGERS.write();
    if let Some(existing) = registry.get(name) {
      return existing.clone();
    }
    let logger = Logger {
      inner: Arc::new(LoggerInner {
        name: name.to_string(),
        level: RwLock::new(level),
        handlers: RwLock::new(handlers),
      }),
    };
    registry.insert(name.to_string(), logger.clone());
    logger
  }

  pub fn name(&self) -> &str {
    &self.inner.name
  }

  pub fn level(&self) -> LogLevel {
    *self.inner.level.read()
  }

  pub fn set_level(&self, level: LogLevel) {
    *self.inner.level.write() = level;
  }

  pub fn add_handler(&self, handler: Handler) {
    self.inner.handlers.write().push(handler);
  }

  pub fn log(&self, level: LogLevel, message: impl Display) {
    if !self.level().allows(level) {
      return;
    }
    let record = Record::new(level, self.inner.name.clone(), message.to_string());
    for handler in self.inner.handlers.read().iter() {
      handler.handle(&record);
    }
  }

  pub fn error(&self, message: impl Display) {
    self.log(LogLevel::Error, message)
  }

  pub fn warn(&self, message: impl Display) {
    self.log(LogLevel::Warn, message)
  }

  pub fn info(&self, message: impl Display) {
    self.log(LogLevel::Info, message)
  }

  pub fn debug(&self, message: impl Display) {
    self.log(LogLevel::Debug, message)
  }

  pub fn trace(&self, message: impl Display) {
    self.log(LogLevel::Trace, message)
  }
}

struct FacadeLogger(Logger);

impl log::Log for FacadeLogger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    self.0.level().allows(from_facade(metadata.level()))
  }

  fn log(&self, record: &log::Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    self.0.log(from_facade(record.level()), record.args());
  }

  fn flush(&self) {}
}

fn from_facade(level: log::Level) -> LogLevel {
  match level {
    log::Level::Error => LogLevel::Error,
    log::Level::Warn => LogLevel::Warn,
    log::Level::Info => LogLevel::Info,
    log::Level::Debug => LogLevel::Debug,
    log::Level::Trace => LogLevel::Trace,
  }
}

fn to_facade_filter(level: LogLevel) -> log::LevelFilter {
  match level {
    LogLevel::Off => log::LevelFilter::Off,
    LogLevel::Error => log::LevelFilter::Error,
    LogLevel::Warn => log::LevelFilter::Warn,
    LogLevel::Info => log::LevelFilter::Info,
    LogLevel::Debug => log::LevelFilter::Debug,
    LogLevel::Trace => log::LevelFilter::Trace,
  }
}

/// Install `logger` as the `log` crate's global logger so the `log::*!`
/// macros route through its handlers. Idempotent in practice (a second
/// install keeps the first; the error is ignored).
pub fn install_global(logger: Logger) {
  log::set_max_level(to_facade_filter(logger.level()));
  let _ = log::set_boxed_logger(Box::new(FacadeLogger(logger)));
}

/// Drop all registered loggers and handlers. File handlers flush their
/// background writers when the last handle goes away, so call this before a
/// short-lived process exits.
pub fn shutdown() {
  LOGGERS.write().clear();
  handlers::clear_registry();
}

#[cfg(test)]
mod tests {
  use serial_test::serial;

  use super::*;

  #[test]
  fn filter_allows_at_or_below_its_level() {
    assert!(LogLevel::Info.allows(LogLevel::Error));
    assert!(LogLevel::Info.allows(LogLevel::Info));
    assert!(!LogLevel::Info.allows(LogLevel::Debug));
    assert!(LogLevel::Trace.allows(LogLevel::Trace));
    assert!(!LogLevel::Off.allows(LogLevel::Error));
    // A filter never admits `Off` as a record level
    assert!(!LogLevel::Trace.allows(LogLevel::Off));
  }

  #[test]
  #[serial]
  fn same_name_returns_same_logger() {
    let a = Logger::with_level("unit-shared", LogLevel::Warn);
    let b = Logger::with_level("unit-shared", LogLevel::Trace);
    // Second creation does not re-level
    assert_eq!(b.level(), LogLevel::Warn);
    a.set_level(LogLevel::Debug);
    assert_eq!(b.level(), LogLevel::Debug);
    shutdown();
  }

  #[test]
  fn facade_levels_map_one_to_one() {
    assert_eq!(from_facade(log::Level::Error), LogLevel::Error);
    assert_eq!(from_facade(log::Level::Trace), LogLevel::Trace);
    assert_eq!(to_facade_filter(LogLevel::Off), log::LevelFilter::Off);
    assert_eq!(to_facade_filter(LogLevel::Warn), log::LevelFilter::Warn);
  }

  #[test]
  fn record_plain_format() {
    let record = Record::new(LogLevel::Info, "app".to_string(), "started".to_string());
    let line = record.plain();
    assert!(line.ends_with("INFO app: started"), "got: {line}");
    let timestamp = line.split(' ').next().unwrap();
    assert!(timestamp.contains('T') && timestamp.ends_with('Z'), "timestamp should be RFC 3339 UTC: {line}");
  }
}
