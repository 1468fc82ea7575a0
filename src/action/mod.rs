//! Cursor motions understood by the text buffer

/// Represents a repeat count for a motion
pub type Count = usize;

/// Represents a motion in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Move left by one character (`h`)
    Left,
    /// Move down by one line (`j`)
    Down,
    /// Move up by one line (`k`)
    Up,
    /// Move right by one character (`l`)
    Right,
    /// Move to the last character of the line (`$`)
    LineEnd,
}

impl Motion {
    /// Motion bound to a single normal-mode character, if any
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'h' => Some(Motion::Left),
            'j' => Some(Motion::Down),
            'k' => Some(Motion::Up),
            'l' => Some(Motion::Right),
            '$' => Some(Motion::LineEnd),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Motion::Left => 'h',
            Motion::Down => 'j',
            Motion::Up => 'k',
            Motion::Right => 'l',
            Motion::LineEnd => '$',
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
