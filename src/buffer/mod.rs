//! Line-oriented text buffer
//!
//! Holds the challenge text as an ordered list of lines plus a 1-based cursor.

/// ## buffer/ Invariants
///
/// - There is always at least one line (possibly empty).
/// - `1 <= cursor.line <= line_count()`.
/// - `cursor.column >= 1`. Horizontal motions keep it within
///   `[1, max(1, len(line))]`; vertical motions carry the column over unchanged.
/// - Lengths and columns count characters, not bytes.
/// - No operation fails; motions past an edge are silent no-ops.
use crate::action::{Count, Motion};
use std::fmt;

/// Cursor position, both coordinates 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub const ORIGIN: Cursor = Cursor { line: 1, column: 1 };

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Cursor { line, column }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::ORIGIN
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl TextBuffer {
    /// Create a buffer holding a single empty line
    #[must_use]
    pub fn new() -> Self {
        TextBuffer {
            lines: vec![String::new()],
            cursor: Cursor::ORIGIN,
        }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.load(text);
        buf
    }

    /// Replace the contents with `text` split on `'\n'` and reset the cursor
    pub fn load(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = Cursor::ORIGIN;
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line under the cursor
    #[must_use]
    pub fn current_line(&self) -> &str {
        &self.lines[self.cursor.line - 1]
    }

    /// Character length of the line under the cursor
    #[must_use]
    pub fn current_line_len(&self) -> usize {
        self.current_line().chars().count()
    }

    /// Apply `motion` `repeat` times, clamping at the buffer edges.
    ///
    /// A repeat of zero leaves the cursor where it is. Each motion is monotone
    /// and stops at its edge, so the repeat is folded into one clamped step.
    pub fn move_cursor(&mut self, motion: Motion, repeat: Count) {
        if repeat == 0 {
            return;
        }
        let line_len = self.current_line_len();
        let Cursor { line, column } = self.cursor;

        match motion {
            Motion::Left => {
                self.cursor.column = column.saturating_sub(repeat).max(1);
            }
            Motion::Right => {
                if column < line_len {
                    self.cursor.column = column.saturating_add(repeat).min(line_len);
                }
            }
            Motion::Down => {
                self.cursor.line = line.saturating_add(repeat).min(self.line_count());
            }
            Motion::Up => {
                self.cursor.line = line.saturating_sub(repeat).max(1);
            }
            Motion::LineEnd => {
                self.cursor.column = line_len.max(1);
            }
        }
    }

    /// Cursor to the first column of the first line
    pub fn jump_top(&mut self) {
        self.cursor = Cursor::ORIGIN;
    }

    /// Cursor to the first column of the last line
    pub fn jump_bottom(&mut self) {
        self.cursor = Cursor::new(self.line_count(), 1);
    }

    /// Remove the space-delimited word under the cursor and return it.
    ///
    /// The current line is split on single spaces. Word `i` is selected when it
    /// is the last word, or when the cursor column is within the length of the
    /// first `i + 1` words joined by single spaces, plus `i`. The remaining
    /// words are joined back with single spaces. The cursor is not moved.
    pub fn delete_word_at_cursor(&mut self) -> String {
        let idx = self.cursor.line - 1;
        if self.lines[idx].is_empty() {
            return String::new();
        }

        let column = self.cursor.column;
        let mut words: Vec<String> = self.lines[idx].split(' ').map(str::to_string).collect();
        let last = words.len() - 1;

        let mut joined_len = 0;
        let mut target = last;
        for (i, word) in words.iter().enumerate() {
            joined_len += word.chars().count() + usize::from(i > 0);
            if i == last || column <= joined_len + i {
                target = i;
                break;
            }
        }

        let removed = words.remove(target);
        self.lines[idx] = words.join(" ");
        removed
    }

    /// Same selection and removal as [`TextBuffer::delete_word_at_cursor`].
    /// Entering insert mode afterwards is the interpreter's job.
    pub fn change_word_at_cursor(&mut self) -> String {
        self.delete_word_at_cursor()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
