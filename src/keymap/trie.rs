use crate::command::Command;
use std::collections::HashMap;

/// Result of looking up a key sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// Exact match found
    Exact(&'a Command),
    /// Sequence is a valid prefix of longer bindings but has no command itself
    Prefix,
    /// Sequence has a command AND is a prefix of longer bindings
    Ambiguous(&'a Command),
    /// No match found
    None,
}

/// A node in the key sequence trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    command: Option<Command>,
}

impl TrieNode {
    /// Insert a sequence into the trie
    pub fn insert(&mut self, keys: &[char], command: Command) {
        match keys.split_first() {
            None => self.command = Some(command),
            Some((key, rest)) => self.children.entry(*key).or_default().insert(rest, command),
        }
    }

    /// Look up a sequence
    pub fn lookup(&self, keys: &[char]) -> MatchResult<'_> {
        let Some((key, rest)) = keys.split_first() else {
            return match (&self.command, self.children.is_empty()) {
                (Some(command), true) => MatchResult::Exact(command),
                (Some(command), false) => MatchResult::Ambiguous(command),
                (None, false) => MatchResult::Prefix,
                (None, true) => MatchResult::None,
            };
        };

        match self.children.get(key) {
            Some(child) => child.lookup(rest),
            None => MatchResult::None,
        }
    }
}
