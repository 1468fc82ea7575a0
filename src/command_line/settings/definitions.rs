//! Settings definitions
//! Declarative registry of all :set options

use crate::command_line::settings::descriptor::{
    SettingDescriptor, SettingError, SettingType, SettingValue,
};
use crate::command_line::settings::registry::SettingsRegistry;
use crate::constants::settings::{MAX_AUTOHINT, MAX_FEEDBACK_DELAY_MS};
use crate::state::{Theme, TutorSettings};

fn set_reset_on_invalid(
    settings: &mut TutorSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.reset_on_invalid = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_feedback_delay(settings: &mut TutorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(ms) => {
            settings.feedback_delay_ms = ms;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected integer".to_string())),
    }
}

fn set_autohint(settings: &mut TutorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            settings.autohint = n;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected integer".to_string())),
    }
}

fn set_theme(settings: &mut TutorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Enum(name) => {
            settings.theme = Theme::from_name(&name)
                .ok_or_else(|| SettingError::ValidationError(format!("Unknown theme: {name}")))?;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected enum".to_string())),
    }
}

pub const SETTINGS: &[SettingDescriptor] = &[
    SettingDescriptor {
        name: "resetoninvalid",
        aliases: &["roi"],
        description: "Discard a normal-mode command that can no longer match",
        ty: SettingType::Boolean,
        set: set_reset_on_invalid,
    },
    SettingDescriptor {
        name: "feedbackdelay",
        aliases: &["fd"],
        description: "Milliseconds to show feedback before the next challenge",
        ty: SettingType::Integer {
            min: Some(0),
            max: Some(MAX_FEEDBACK_DELAY_MS),
        },
        set: set_feedback_delay,
    },
    SettingDescriptor {
        name: "autohint",
        aliases: &["ah"],
        description: "Show the hint after this many wrong answers (0 disables)",
        ty: SettingType::Integer {
            min: Some(0),
            max: Some(MAX_AUTOHINT),
        },
        set: set_autohint,
    },
    SettingDescriptor {
        name: "theme",
        aliases: &["th"],
        description: "Colour theme of the terminal tutor",
        ty: SettingType::Enum {
            variants: Theme::NAMES,
        },
        set: set_theme,
    },
];

#[must_use]
pub fn create_settings_registry() -> SettingsRegistry {
    SettingsRegistry::new(SETTINGS)
}
