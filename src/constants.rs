//! Global constants for the tutor

pub mod keys {
    /// Logical key name submitted when the learner presses Esc
    pub const ESCAPE: &str = "Escape";
    /// The single-character production that enters insert mode
    pub const INSERT: &str = "i";
}

pub mod feedback {
    pub const CORRECT: &str = "Correct! Moving to the next challenge...";
    pub const INCORRECT: &str = "Incorrect. Try again!";
    pub const COMPLETED: &str = "Congratulations! You've completed all challenges!";
    pub const PROGRESS_RESET: &str = "Progress reset";
}

pub mod notifications {
    use std::time::Duration;

    pub const INFO_TTL: Duration = Duration::from_secs(5);
    pub const WARNING_TTL: Duration = Duration::from_secs(8);
    pub const ERROR_TTL: Duration = Duration::from_secs(10);
    pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
}

pub mod settings {
    /// Milliseconds the host pauses on a correct answer before showing the next challenge
    pub const DEFAULT_FEEDBACK_DELAY_MS: usize = 1500;
    pub const MAX_FEEDBACK_DELAY_MS: usize = 10_000;
    pub const MAX_AUTOHINT: usize = 100;
}

pub mod ui {
    /// Width reserved for the line number gutter, including its trailing space
    pub const GUTTER_WIDTH: u16 = 4;
    /// Rows used below the text: status, prompt, command, feedback
    pub const FOOTER_ROWS: u16 = 4;
    /// How long the event loop waits for a key before checking timers
    pub const POLL_TIMEOUT_MS: u64 = 50;
}

pub mod logging {
    /// Environment variable holding the tracing filter
    pub const ENV_FILTER: &str = "RIFT_TUTOR_LOG";
    pub const DEFAULT_FILTER: &str = "warn";
    pub const LOG_FILE: &str = "rift-tutor.log";
}

pub mod errors {
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const EMPTY_COURSE: &str = "EMPTY_COURSE";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const AMBIGUOUS_COMMAND: &str = "AMBIGUOUS_COMMAND";
    pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
    pub const RENDER_FAILED: &str = "RENDER_FAILED";
    pub const INPUT_FAILED: &str = "INPUT_FAILED";
}
