//! Settings registry
//! Holds setting descriptors, resolves option names and applies typed values

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use crate::command_line::registry::{CommandDef, CommandRegistry, MatchResult};
use crate::state::TutorSettings;

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option registry building (for the parser)
/// - Setting execution
#[derive(Debug, Clone, Copy)]
pub struct SettingsRegistry {
    settings: &'static [SettingDescriptor],
}

impl SettingsRegistry {
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    /// Build a `CommandRegistry` for option name matching (aliases, prefixes)
    #[must_use]
    pub fn build_option_registry(&self) -> CommandRegistry {
        self.settings.iter().fold(CommandRegistry::new(), |registry, desc| {
            let def = desc
                .aliases
                .iter()
                .fold(CommandDef::new(desc.name), |def, alias| def.with_alias(*alias));
            registry.register(def)
        })
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor] {
        self.settings
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => match value.to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Integer { min, max } => {
                let val = value.parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
            SettingType::Enum { variants } => {
                let val_lower = value.to_lowercase();
                variants
                    .iter()
                    .find(|v| v.to_lowercase() == val_lower)
                    .map(|canonical| SettingValue::Enum((*canonical).to_string()))
                    .ok_or_else(|| {
                        SettingError::ParseError(format!(
                            "Invalid enum value: {value}. Valid values: {variants:?}"
                        ))
                    })
            }
        }
    }

    /// Execute a setting by name with a string value
    ///
    /// Flow:
    /// 1. Resolve option name (aliases, prefixes, ambiguity)
    /// 2. Find descriptor by matched name
    /// 3. Parse the string value using its `SettingType`
    /// 4. Call the setter with the typed value
    pub fn execute_setting(
        &self,
        name: &str,
        value: &str,
        settings: &mut TutorSettings,
    ) -> Result<(), SettingError> {
        let matched_name = match self.build_option_registry().match_command(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::ValidationError(format!(
                    "Ambiguous option '{prefix}': matches {}",
                    matches.join(", ")
                )));
            }
            MatchResult::Unknown(_) => {
                return Err(SettingError::UnknownOption(name.to_string()));
            }
        };

        let desc = self
            .settings
            .iter()
            .find(|d| d.name == matched_name)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))?;

        let typed_value = Self::parse_value(&desc.ty, value)?;
        (desc.set)(settings, typed_value)?;
        tracing::debug!(target: "settings", option = desc.name, value, "setting applied");
        Ok(())
    }
}
