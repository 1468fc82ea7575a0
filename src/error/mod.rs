//! Centralized error handling for the tutor
//! Defines common error types, severity levels, and error codes
//!
//! The interpreter and text buffer never fail; these errors only come out of
//! the layers around them (settings, ex commands, course setup, terminal I/O).

use std::fmt;

pub mod manager;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but the tutor can continue
    Warning,
    /// Standard error - operation failed but the session continues
    Error,
    /// Critical error - the session cannot continue
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Terminal or other I/O errors
    Io,
    /// Ex command parsing errors
    Parse,
    /// Configuration or settings errors
    Settings,
    /// Rendering or terminal backend errors
    Renderer,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Settings => write!(f, "Settings"),
            Self::Renderer => write!(f, "Renderer"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured tutor error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (see `constants::errors`)
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl TutorError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for TutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for TutorError {}

impl From<String> for TutorError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for TutorError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for TutorError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, crate::constants::errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for tutor operations
pub type Result<T> = std::result::Result<T, TutorError>;
