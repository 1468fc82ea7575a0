//! Command line management
//! Holds the line the learner is typing and parses `:` commands

pub mod parser;
pub mod registry;
pub mod settings;

/// ## command_line/ Invariants
///
/// - The input line only grows by `push` and shrinks by `backspace` or `take`.
/// - In Normal mode a line starting with `:` is an ex command. Every other
///   line, including any line typed in Insert mode, is a tutor token.
/// - Parsing never mutates settings; assignments are applied by the session.
pub use parser::{Assignment, CommandParser, ExCommand};

use crate::mode::Mode;

/// What a submitted line should be treated as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Trimmed token for the interpreter
    Token(String),
    /// Ex command line, leading `:` kept
    Ex(String),
}

/// The line being typed at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    input: String,
}

impl CommandLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last character. Returns false if the line was already empty.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Take the line, leaving it empty. `mode` is the interpreter's current mode.
    pub fn take(&mut self, mode: Mode) -> Submission {
        let line = std::mem::take(&mut self.input);
        let trimmed = line.trim();
        if mode == Mode::Normal && trimmed.starts_with(':') {
            Submission::Ex(trimmed.to_string())
        } else {
            Submission::Token(trimmed.to_string())
        }
    }
}
