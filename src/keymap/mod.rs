//! Fixed key sequences of the tutor grammar
//!
//! Counted motions are scanned by the dispatcher; everything with a fixed
//! spelling (`i`, `gg`, `G`, `dw`, `cw`, and the bare motion keys) lives here.

pub mod trie;

pub use self::trie::{MatchResult, TrieNode};
use crate::action::Motion;
use crate::command::Command;
use std::collections::HashMap;

/// Context a binding is active in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Checked first, in every mode
    Global,
    Normal,
    Insert,
}

/// `KeyMap` stores mappings from (Context, key sequence) -> Command
#[derive(Debug, Clone)]
pub struct KeyMap {
    mappings: HashMap<KeyContext, TrieNode>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// The bindings the tutor teaches
    #[must_use]
    pub fn tutor_defaults() -> Self {
        let mut map = Self::new();
        map.register_str(KeyContext::Global, "i", Command::EnterInsertMode);

        for motion in [
            Motion::Left,
            Motion::Down,
            Motion::Up,
            Motion::Right,
            Motion::LineEnd,
        ] {
            map.register(KeyContext::Normal, motion.as_char(), Command::motion(motion));
        }
        map.register_str(KeyContext::Normal, "gg", Command::JumpTop);
        map.register_str(KeyContext::Normal, "G", Command::JumpBottom);
        map.register_str(KeyContext::Normal, "dw", Command::DeleteWord);
        map.register_str(KeyContext::Normal, "cw", Command::ChangeWord);
        map
    }

    /// Register a single-key binding
    pub fn register(&mut self, context: KeyContext, key: char, command: Command) {
        self.register_sequence(context, &[key], command);
    }

    /// Register a sequence binding
    pub fn register_sequence(&mut self, context: KeyContext, keys: &[char], command: Command) {
        self.mappings
            .entry(context)
            .or_default()
            .insert(keys, command);
    }

    pub fn register_str(&mut self, context: KeyContext, keys: &str, command: Command) {
        let keys: Vec<char> = keys.chars().collect();
        self.register_sequence(context, &keys, command);
    }

    /// Look up a key sequence in one context only
    #[must_use]
    pub fn lookup_in(&self, context: KeyContext, keys: &[char]) -> MatchResult<'_> {
        self.mappings
            .get(&context)
            .map_or(MatchResult::None, |trie| trie.lookup(keys))
    }

    /// Look up a key sequence, falling back to the Global context
    #[must_use]
    pub fn lookup(&self, context: KeyContext, keys: &[char]) -> MatchResult<'_> {
        match self.lookup_in(context, keys) {
            MatchResult::None if context != KeyContext::Global => {
                self.lookup_in(KeyContext::Global, keys)
            }
            found => found,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::tutor_defaults()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
