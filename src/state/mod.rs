//! Tutor settings
//! Preferences changed at runtime through `:set`

use crate::constants::settings::DEFAULT_FEEDBACK_DELAY_MS;
use std::fmt;
use std::time::Duration;

/// Host colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const NAMES: &'static [&'static str] = &["dark", "light"];

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorSettings {
    /// Drop a normal-mode command buffer once nothing can match it
    pub reset_on_invalid: bool,
    /// Pause after a correct answer before the next challenge is shown
    pub feedback_delay_ms: usize,
    /// Show the hint after this many wrong answers (0 = never)
    pub autohint: usize,
    pub theme: Theme,
}

impl TutorSettings {
    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms as u64)
    }
}

impl Default for TutorSettings {
    fn default() -> Self {
        TutorSettings {
            reset_on_invalid: false,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            autohint: 0,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
