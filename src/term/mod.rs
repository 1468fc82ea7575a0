//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind a strict abstraction boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on normal exit and on panic.
/// - Terminal code never depends on tutor internals beyond `Key`.
use std::time::Duration;

use ::crossterm::style::Color;

use crate::error::Result;
use crate::key::Key;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> Result<()>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Wait up to `timeout` for a keypress. `None` means nothing arrived.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    /// Write bytes to stdout
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size>;

    /// Clear entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specified position (0-indexed)
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Clear from cursor to end of line
    fn clear_to_end_of_line(&mut self) -> Result<()>;

    fn set_foreground_color(&mut self, color: Color) -> Result<()>;

    fn set_background_color(&mut self, color: Color) -> Result<()>;

    /// Reset colors to default
    fn reset_colors(&mut self) -> Result<()>;

    /// Push buffered output to the screen
    fn flush(&mut self) -> Result<()>;
}

pub mod crossterm;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
