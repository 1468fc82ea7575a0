//! Editor mode definitions

use std::fmt;

/// Interpreter operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal mode: keystrokes are motions and edit commands
    #[default]
    Normal,
    /// Insert mode: raw text entry, only Escape is significant
    Insert,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Insert => write!(f, "INSERT"),
        }
    }
}
