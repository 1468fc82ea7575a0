//! Command registry
//! Name matching for ex commands and `:set` options: exact, alias, or unambiguous prefix

/// Result of matching a command input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match found (command name or explicit alias)
    Exact(String),
    /// Unambiguous prefix match
    Prefix(String),
    /// Multiple commands match
    Ambiguous { prefix: String, matches: Vec<String> },
    /// No match found
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Canonical command name
    pub name: String,
    pub aliases: Vec<String>,
}

impl CommandDef {
    pub fn new(name: impl Into<String>) -> Self {
        CommandDef {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn register(mut self, cmd: CommandDef) -> Self {
        self.commands.push(cmd);
        self
    }

    /// Match an input string to a command
    ///
    /// Matching order:
    /// 1. Exact match against command name or explicit alias
    /// 2. Single command whose name or alias starts with the input
    /// 3. Ambiguous if several do, unknown if none
    #[must_use]
    pub fn match_command(&self, input: &str) -> MatchResult {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return MatchResult::Unknown(input);
        }

        for cmd in &self.commands {
            if cmd.name.to_lowercase() == input
                || cmd.aliases.iter().any(|a| a.to_lowercase() == input)
            {
                return MatchResult::Exact(cmd.name.clone());
            }
        }

        let matches: Vec<String> = self
            .commands
            .iter()
            .filter(|cmd| {
                cmd.name.to_lowercase().starts_with(&input)
                    || cmd
                        .aliases
                        .iter()
                        .any(|a| a.to_lowercase().starts_with(&input))
            })
            .map(|cmd| cmd.name.clone())
            .collect();

        match matches.len() {
            0 => MatchResult::Unknown(input),
            1 => MatchResult::Prefix(matches[0].clone()),
            _ => MatchResult::Ambiguous {
                prefix: input,
                matches,
            },
        }
    }

    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }
}
