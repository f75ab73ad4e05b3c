//! Styled terminal messages.
//!
//! A [`Message`] renders to a single bold, optionally colored line. Messages
//! normally print to stdout (stderr for error-class messages), but a host
//! application can install a sink to capture rendered lines instead, e.g. to
//! show them inside a TUI.

use std::fmt::Display;

use crossbeam_channel::Sender;
use owo_colors::{OwoColorize as _, Style};
use parking_lot::Mutex;
use thiserror::Error;

use crate::theme::{self, Color, Level, Theme};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
  #[error("message cannot be empty")]
  Empty,
}

/// A rendered line captured by the message sink. ANSI styling is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEvent {
  pub stderr: bool,
  pub ansi: String,
}

static SINK: Mutex<Option<Sender<MessageEvent>>> = Mutex::new(None);

pub fn set_sink(sender: Sender<MessageEvent>) {
  *SINK.lock() = Some(sender);
}

pub fn clear_sink() {
  *SINK.lock() = None;
}

/// Returns true when a message sink is currently registered.
pub fn is_sink_set() -> bool {
  SINK.lock().is_some()
}

/// A terminal message with optional color, prefix, suffix, and stream options.
///
/// The texts `divider` and `line` are special: they render as a `=` or `-`
/// rule at the theme's rule width, ignoring prefix and suffix.
#[derive(Clone, Debug)]
pub struct Message {
  text: String,
  color: Option<Color>,
  prefix: Option<String>,
  suffix: Option<String>,
  stderr: bool,
  code: i32,
  no_newline: bool,
}

impl Message {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      color: None,
      prefix: None,
      suffix: None,
      stderr: false,
      code: 1,
      no_newline: false,
    }
  }

  /// Semantic constructor: applies the theme's symbol and uppercase label as
  /// prefix and the theme color; error-class messages target stderr.
  pub fn for_level(level: Level, text: impl Into<String>, theme: &Theme) -> Self {
    let style = theme.style(level);
    let prefix = match &style.symbol {
      Some(symbol) => format!("{symbol} {}:", level.label()),
      None => format!("{}:", level.label()),
    };
    let msg = Self::new(text).prefix(prefix).color(style.color);
    if level == Level::Error { msg.to_stderr() } else { msg }
  }

  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }

  pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
    self.prefix = Some(prefix.into());
    self
  }

  pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
    self.suffix = Some(suffix.into());
    self
  }

  pub fn to_stderr(mut self) -> Self {
    self.stderr = true;
    self
  }

  /// Exit code associated with error-class messages (default 1).
  pub fn code(mut self, code: i32) -> Self {
    self.code = code;
    self
  }

  pub fn no_newline(mut self) -> Self {
    self.no_newline = true;
    self
  }

  pub fn exit_code(&self) -> i32 {
    self.code
  }

  /// Produce the final styled string.
  pub fn render(&self, theme: &Theme) -> Result<String, MessageError> {
    if self.text.is_empty() {
      return Err(MessageError::Empty);
    }
    let body = match self.text.as_str() {
      "divider" => "=".repeat(theme.rule_width),
      "line" => "-".repeat(theme.rule_width),
      text => {
        let mut line = String::new();
        if let Some(prefix) = &self.prefix {
          line.push_str(prefix);
          line.push(' ');
        }
        line.push_str(text);
        if let Some(suffix) = &self.suffix {
          line.push(' ');
          line.push_str(suffix);
        }
        line
      }
    };
    let mut style = Style::new().bold();
    if let Some(color) = self.color {
      style = style.color(color.ansi());
    }
    Ok(format!("{}", body.style(style)))
  }

  /// Render and deliver: to the sink when one is installed, otherwise to
  /// stdout or stderr.
  pub fn emit(&self, theme: &Theme) -> Result<(), MessageError> {
    let ansi = self.render(theme)?;
    deliver(self.stderr, self.no_newline, ansi);
    Ok(())
  }
}

fn deliver(stderr: bool, no_newline: bool, ansi: String) {
  if let Some(tx) = SINK.lock().clone() {
    // Route into the host sink
    let _ = tx.send(MessageEvent { stderr, ansi });
    return;
  }
  match (stderr, no_newline) {
    (true, true) => anstream::eprint!("{ansi}"),
    (true, false) => anstream::eprintln!("{ansi}"),
    (false, true) => anstream::print!("{ansi}"),
    (false, false) => anstream::println!("{ansi}"),
  }
}

/// Emit an error-class message and terminate the process with `code`.
/// This is the only place the library exits; call it from binary boundaries.
pub fn fatal(text: impl Display, code: i32) -> ! {
  let theme = theme::current();
  let _ = Message::for_level(Level::Error, text.to_string(), &theme)
    .code(code)
    .emit(&theme);
  std::process::exit(code)
}

/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style specific
/// values inside otherwise-neutral info messages.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn id(value: impl Display) -> String {
    format!("{}", value.to_string().blue())
  }

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

/// Print a plain bold message with the current theme.
#[macro_export]
macro_rules! echo {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::new(format!($fmt $(, $args )*)).emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_error {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Error,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Warning,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Info,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Success,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_tip {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Tip,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_important {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Important,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

#[macro_export]
macro_rules! echo_debug {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::for_level(
      $crate::theme::Level::Debug,
      format!($fmt $(, $args )*),
      &theme,
    )
    .emit(&theme);
  }};
}

/// Print a `=` rule at the theme's rule width.
#[macro_export]
macro_rules! echo_divider {
  () => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::new("divider").emit(&theme);
  }};
}

/// Print a `-` rule at the theme's rule width.
#[macro_export]
macro_rules! echo_line {
  () => {{
    let theme = $crate::theme::current();
    let _ = $crate::message::Message::new("line").emit(&theme);
  }};
}

#[cfg(test)]
mod tests {
  use crossbeam_channel::unbounded;
  use serial_test::serial;

  use super::*;

  #[test]
  fn empty_message_is_an_error() {
    let theme = Theme::default();
    let err = Message::new("").render(&theme).unwrap_err();
    assert_eq!(err, MessageError::Empty);
  }

  #[test]
  fn prefix_and_suffix_join_with_single_spaces() {
    let theme = Theme::default();
    let out = Message::new("middle")
      .prefix("before")
      .suffix("after")
      .render(&theme)
      .unwrap();
    assert!(out.contains("before middle after"), "got: {out}");
    // The whole line is bold
    assert!(out.contains("\u{1b}["), "expected ANSI styling: {out:?}");
  }

  #[test]
  fn divider_and_line_render_rules_at_theme_width() {
    let theme = Theme::default();
    let divider = Message::new("divider").render(&theme).unwrap();
    assert!(divider.contains(&"=".repeat(68)));
    let line = Message::new("line").render(&theme).unwrap();
    assert!(line.contains(&"-".repeat(68)));

    let narrow = Theme {
      rule_width: 10,
      ..Theme::default()
    };
    let divider = Message::new("divider").render(&narrow).unwrap();
    assert!(divider.contains(&"=".repeat(10)));
    assert!(!divider.contains(&"=".repeat(11)));
  }

  #[test]
  fn for_level_applies_symbol_label_and_color() {
    let theme = Theme::default();
    let out = Message::for_level(Level::Success, "done", &theme).render(&theme).unwrap();
    assert!(out.contains("✔ SUCCESS: done"), "got: {out}");

    // Debug has no symbol, only the label
    let out = Message::for_level(Level::Debug, "peek", &theme).render(&theme).unwrap();
    assert!(out.contains("DEBUG: peek"), "got: {out}");
  }

  #[test]
  #[serial]
  fn sink_captures_events_and_preserves_stderr_flag() {
    let (tx, rx) = unbounded();
    set_sink(tx);
    let theme = Theme::default();

    Message::for_level(Level::Error, "boom", &theme).emit(&theme).unwrap();
    Message::for_level(Level::Info, "fine", &theme).emit(&theme).unwrap();

    let events: Vec<MessageEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    clear_sink();

    assert_eq!(events.len(), 2);
    assert!(events[0].stderr);
    assert!(events[0].ansi.contains("✘ ERROR: boom"));
    assert!(!events[1].stderr);
    assert!(events[1].ansi.contains("✚ INFO: fine"));
  }

  #[test]
  #[serial]
  fn macros_emit_through_sink() {
    let (tx, rx) = unbounded();
    set_sink(tx);

    crate::echo_success!("finished {}", 3);
    crate::echo_divider!();

    let events: Vec<MessageEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    clear_sink();

    assert_eq!(events.len(), 2);
    assert!(events[0].ansi.contains("SUCCESS: finished 3"));
    assert!(events[1].ansi.contains(&"=".repeat(68)));
  }

  #[test]
  fn token_helpers_tint_single_values() {
    let styled = t::path("/tmp/out.log");
    assert!(styled.contains("/tmp/out.log"));
    assert!(styled.contains("\u{1b}["), "expected ANSI styling: {styled:?}");
    assert!(t::ok("ready").contains("ready"));
    assert!(t::err("broken").contains("broken"));
  }

  #[test]
  #[serial]
  fn macros_no_panic_without_sink() {
    clear_sink();
    crate::echo!("A");
    crate::echo_info!("B");
    crate::echo_warn!("C");
    crate::echo_line!();
  }
}
