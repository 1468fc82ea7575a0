//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    queue,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crate::constants::errors::{INPUT_FAILED, RENDER_FAILED};
use crate::error::{ErrorType, Result, TutorError};
use crate::key::Key;
use crate::term::{Size, TerminalBackend};

fn render_failed(what: &str, err: std::io::Error) -> TutorError {
    TutorError::new(ErrorType::Renderer, RENDER_FAILED, format!("{what}: {err}"))
}

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    out: Stdout,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    #[must_use]
    pub fn new() -> Self {
        CrosstermBackend {
            out: stdout(),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        // Enable alternate screen buffer (prevents scrolling in main buffer)
        queue!(self.out, terminal::EnterAlternateScreen)
            .map_err(|e| render_failed("Failed to enter alternate screen", e))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| render_failed("Failed to enable raw mode", e))?;
        self.raw_mode_enabled = true;

        queue!(self.out, cursor::Hide).map_err(|e| render_failed("Failed to hide cursor", e))?;
        self.flush()
    }

    fn deinit(&mut self) {
        let _ = queue!(self.out, ResetColor, cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = queue!(self.out, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = self.out.flush();
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        let input_failed =
            |e: std::io::Error| TutorError::new(ErrorType::Io, INPUT_FAILED, e.to_string());

        if !event::poll(timeout).map_err(input_failed)? {
            return Ok(None);
        }
        match event::read().map_err(input_failed)? {
            Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                Ok(Some(translate_key_event(key_event)))
            }
            Event::Resize(cols, rows) => Ok(Some(Key::Resize(cols, rows))),
            // Ignore key releases and other events
            _ => Ok(None),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.out
            .write_all(bytes)
            .map_err(|e| render_failed("Write failed", e))
    }

    fn get_size(&self) -> Result<Size> {
        let (cols, rows) =
            terminal::size().map_err(|e| render_failed("Failed to get terminal size", e))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .map_err(|e| render_failed("Failed to clear screen", e))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
            .map_err(|e| render_failed("Failed to move cursor", e))
    }

    fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.out, cursor::Hide).map_err(|e| render_failed("Failed to hide cursor", e))
    }

    fn show_cursor(&mut self) -> Result<()> {
        queue!(self.out, cursor::Show).map_err(|e| render_failed("Failed to show cursor", e))
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::UntilNewLine))
            .map_err(|e| render_failed("Failed to clear to end of line", e))
    }

    fn set_foreground_color(&mut self, color: Color) -> Result<()> {
        queue!(self.out, SetForegroundColor(color))
            .map_err(|e| render_failed("Failed to set foreground color", e))
    }

    fn set_background_color(&mut self, color: Color) -> Result<()> {
        queue!(self.out, SetBackgroundColor(color))
            .map_err(|e| render_failed("Failed to set background color", e))
    }

    fn reset_colors(&mut self) -> Result<()> {
        queue!(self.out, ResetColor).map_err(|e| render_failed("Failed to reset colors", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| render_failed("Flush failed", e))
    }
}

/// Translate crossterm `KeyEvent` to our Key enum
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Key {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals send Enter as a character
            if ch == '\r' || ch == '\n' {
                return Key::Enter;
            }
            if ctrl {
                Key::Ctrl(ch.to_ascii_lowercase())
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
