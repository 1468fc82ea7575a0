//! Key representation for tutor input

use crate::constants::keys::ESCAPE;

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+C)
    Ctrl(char),
    /// Editing keys
    Backspace,
    Enter,
    Escape,
    /// System events
    Resize(u16, u16),
    /// Anything the tutor has no use for
    Unknown,
}

impl Key {
    /// Interpreter token for keys that map to one directly.
    ///
    /// A printable character is its own token and Escape becomes the logical
    /// key name. Keys that only drive the host (Enter, Backspace, ...) have none.
    #[must_use]
    pub fn as_token(self) -> Option<String> {
        match self {
            Key::Char(ch) => Some(ch.to_string()),
            Key::Escape => Some(ESCAPE.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
