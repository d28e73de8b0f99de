//! Styling for launcher messages.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support (escapes are stripped when
//!   stdout is not a terminal or `NO_COLOR` is set)
//! - anstyle for the semantic style constants
//!
//! Inline markup inside a message (e.g. a bold path) uses `color_print::cformat!`.

use anstyle::{AnsiColor, Color, Style};

/// Auto-detecting println that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::println;

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

/// Error emoji - use with ERROR style: `println!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji - use with HINT style: `println!("{HINT_EMOJI} {HINT}message{HINT:#}");`
pub const HINT_EMOJI: &str = "💡";

/// Format an error message with emoji and red styling
pub fn error_message(content: impl AsRef<str>) -> String {
    format!("{ERROR_EMOJI} {ERROR}{}{ERROR:#}", content.as_ref())
}

/// Format a hint message with emoji and dim styling
pub fn hint_message(content: impl AsRef<str>) -> String {
    format!("{HINT_EMOJI} {HINT}{}{HINT:#}", content.as_ref())
}
