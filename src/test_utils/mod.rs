//! Test utilities
//! Shared testing helpers and mocks

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::style::Color;

use crate::error::Result;
use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Mock terminal backend for testing
/// Records all operations for verification
pub struct MockTerminal {
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub foreground_colors: Vec<Color>,
    pub background_colors: Vec<Color>,
    pub cursor_visible: bool,
    pub size: (u16, u16),
    /// Keys handed out by `poll_key`, front first
    pub keys: VecDeque<Key>,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            foreground_colors: Vec::new(),
            background_colors: Vec::new(),
            cursor_visible: true,
            size: (rows, cols),
            keys: VecDeque::new(),
        }
    }

    /// Queue keys for `poll_key`
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn get_written_string(&self) -> String {
        let bytes: Vec<u8> = self.writes.iter().flatten().copied().collect();
        String::from_utf8_lossy(&bytes).to_string()
    }

    /// Clear all recorded operations (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
        self.cursor_moves.clear();
        self.clear_screen_calls = 0;
        self.foreground_colors.clear();
        self.background_colors.clear();
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn deinit(&mut self) {}

    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.cursor_visible = true;
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> Result<()> {
        self.foreground_colors.push(color);
        Ok(())
    }

    fn set_background_color(&mut self, color: Color) -> Result<()> {
        self.background_colors.push(color);
        Ok(())
    }

    fn reset_colors(&mut self) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
