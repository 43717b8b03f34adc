//! TUI constants: colors and timing.

use ratatui::style::Color;

/// Accent green (#2BA84A).
pub(super) const ACCENT: Color = Color::Rgb(43, 168, 74);

/// Secondary accent — soft cyan (#7EC8E3) for user text and hints.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop). Also bounds how late a
/// chunk reveal can fire.
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Spinner frames for the "thinking" animation (braille pattern, 4 frames).
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Most recent turns sent back to the API as conversation context.
pub(crate) const MAX_CONTEXT_TURNS: usize = 20;
