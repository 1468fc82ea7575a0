//! Command parser
//! Parses `:` command line input into structured commands

use crate::command_line::registry::{CommandDef, CommandRegistry, MatchResult};
use crate::command_line::settings::{create_settings_registry, SettingsRegistry};
use crate::constants::errors::{AMBIGUOUS_COMMAND, MISSING_ARGUMENT, UNKNOWN_COMMAND};
use crate::error::{ErrorType, Result, TutorError};

/// One `name=value` pair of a `:set` line, with the name already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub option: String,
    pub value: String,
}

/// Parsed command representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    Quit,
    /// Show the hint for the current challenge
    Hint,
    /// Start the course over
    Reset,
    /// Switch between dark and light themes
    Theme,
    Set(Vec<Assignment>),
}

pub struct CommandParser {
    registry: CommandRegistry,
    settings_registry: SettingsRegistry,
}

impl CommandParser {
    #[must_use]
    pub fn new(registry: CommandRegistry, settings_registry: SettingsRegistry) -> Self {
        CommandParser {
            registry,
            settings_registry,
        }
    }

    /// Registry of the commands the tutor understands
    #[must_use]
    pub fn default_registry() -> CommandRegistry {
        CommandRegistry::new()
            .register(CommandDef::new("hint"))
            .register(CommandDef::new("quit").with_alias("q"))
            .register(CommandDef::new("reset"))
            .register(CommandDef::new("set"))
            .register(CommandDef::new("theme"))
    }

    /// Parse a command line string
    ///
    /// Input format: `:command [args...]`; the leading colon is optional.
    pub fn parse(&self, input: &str) -> Result<ExCommand> {
        let input = input.trim();
        let input = input.strip_prefix(':').unwrap_or(input).trim();

        let mut parts = input.split_whitespace();
        let Some(command_name) = parts.next() else {
            return Err(TutorError::new(
                ErrorType::Parse,
                UNKNOWN_COMMAND,
                "Empty command",
            ));
        };
        let args: Vec<&str> = parts.collect();

        let name = Self::resolve(&self.registry, command_name, "command", AMBIGUOUS_COMMAND)
            .map_err(|err| {
                err.unwrap_or_else(|| {
                    TutorError::new(
                        ErrorType::Parse,
                        UNKNOWN_COMMAND,
                        format!("Not a tutor command: {command_name}"),
                    )
                })
            })?;

        match name.as_str() {
            "hint" => Ok(ExCommand::Hint),
            "quit" => Ok(ExCommand::Quit),
            "reset" => Ok(ExCommand::Reset),
            "theme" => Ok(ExCommand::Theme),
            "set" => self.parse_set_command(&args),
            _ => Err(TutorError::new(
                ErrorType::Parse,
                UNKNOWN_COMMAND,
                format!("Not a tutor command: {command_name}"),
            )),
        }
    }

    /// Parse `:set` arguments
    ///
    /// Supports, per argument:
    /// - `option` (boolean on)
    /// - `nooption` (boolean off)
    /// - `option=value` (assignment)
    fn parse_set_command(&self, args: &[&str]) -> Result<ExCommand> {
        if args.is_empty() {
            return Err(TutorError::new(
                ErrorType::Parse,
                MISSING_ARGUMENT,
                "Usage: :set option[=value] ...",
            ));
        }

        let options = self.settings_registry.build_option_registry();
        args.iter()
            .map(|arg| Self::parse_assignment(&options, arg))
            .collect::<Result<Vec<_>>>()
            .map(ExCommand::Set)
    }

    fn parse_assignment(options: &CommandRegistry, arg: &str) -> Result<Assignment> {
        if let Some((name, value)) = arg.split_once('=') {
            return Ok(Assignment {
                option: Self::resolve_option(options, name)?,
                value: value.to_string(),
            });
        }

        if let Some(name) = arg.to_lowercase().strip_prefix("no").filter(|n| !n.is_empty()) {
            if let Ok(option) = Self::resolve_option(options, name) {
                return Ok(Assignment {
                    option,
                    value: "false".to_string(),
                });
            }
        }

        Ok(Assignment {
            option: Self::resolve_option(options, arg)?,
            value: "true".to_string(),
        })
    }

    fn resolve_option(options: &CommandRegistry, name: &str) -> Result<String> {
        Self::resolve(options, name, "option", AMBIGUOUS_COMMAND).map_err(|err| match err {
            Some(ambiguous) => ambiguous,
            None => crate::command_line::settings::SettingError::UnknownOption(name.to_string())
                .into(),
        })
    }

    /// Resolve `input` to a canonical name. `Err(None)` means nothing matched.
    fn resolve(
        registry: &CommandRegistry,
        input: &str,
        what: &str,
        ambiguous_code: &str,
    ) -> std::result::Result<String, Option<TutorError>> {
        match registry.match_command(input) {
            MatchResult::Exact(name) | MatchResult::Prefix(name) => Ok(name),
            MatchResult::Ambiguous { prefix, matches } => Err(Some(TutorError::new(
                ErrorType::Parse,
                ambiguous_code,
                format!("Ambiguous {what} '{prefix}': matches {}", matches.join(", ")),
            ))),
            MatchResult::Unknown(_) => Err(None),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Self::default_registry(), create_settings_registry())
    }
}
