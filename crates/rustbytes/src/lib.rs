//! Foundation crate for terminal tooling.
//!
//! Provides styled console messages (`message`), named loggers with
//! stdout/stderr/file handlers behind the `log` facade (`logger`), a layered
//! TOML configuration (`config`), and the semantic level/color theme shared
//! by both (`theme`).
//!
//! Quick start:
//! - Load config via `rustbytes::config::load(Some(project_root))` and make
//!   its theme process-wide with `rustbytes::theme::set_current`.
//! - Print semantic messages with the `echo_*!` macros or build them with
//!   `Message` directly.
//! - Obtain a logger with `Logger::named("app")`; the same name always
//!   returns the same logger.

pub mod config;
pub mod logger;
pub mod message;
pub mod theme;

pub use config::Config;
pub use logger::{Handler, LogLevel, Logger};
pub use message::{Message, MessageError};
pub use theme::{Color, Level, Theme};
