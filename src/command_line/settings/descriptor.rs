//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::constants::errors::{SETTING_PARSE_ERROR, SETTING_VALIDATION_ERROR, UNKNOWN_SETTING};
use crate::error::{ErrorType, TutorError};
use crate::state::TutorSettings;

/// Typed value after parsing and validation.
/// Setters receive this, never raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Integer(usize),
    /// Canonical enum identifier
    Enum(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// true/false, on/off, yes/no, 1/0
    Boolean,
    /// Integer with optional inclusive bounds
    Integer {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// One of a static list of identifiers, matched case-insensitively
    Enum {
        variants: &'static [&'static str],
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl From<SettingError> for TutorError {
    fn from(err: SettingError) -> Self {
        match err {
            SettingError::ParseError(msg) => {
                TutorError::new(ErrorType::Parse, SETTING_PARSE_ERROR, msg)
            }
            SettingError::ValidationError(msg) => {
                TutorError::new(ErrorType::Settings, SETTING_VALIDATION_ERROR, msg)
            }
            SettingError::UnknownOption(name) => TutorError::new(
                ErrorType::Settings,
                UNKNOWN_SETTING,
                format!("Unknown option: {name}"),
            ),
        }
    }
}

/// Setter function signature.
/// Receives a parsed and validated `SettingValue`.
pub type SettingSetter = fn(&mut TutorSettings, SettingValue) -> Result<(), SettingError>;

#[derive(Debug, Clone)]
pub struct SettingDescriptor {
    /// Canonical setting name
    pub name: &'static str,
    /// Short aliases (e.g., &["roi"])
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub ty: SettingType,
    pub set: SettingSetter,
}
