//! Modal command interpreter
//! Accumulates tokens into a command buffer and dispatches completed productions

/// ## command/ Invariants
///
/// - The command buffer only ever holds an unmatched, in-progress prefix.
/// - Each call to `consume` appends exactly one token and fires at most one
///   production, then clears the buffer if it fired.
/// - `"i"` is checked before anything mode specific, so it wins even in insert mode.
/// - In insert mode only the `Escape` token (or `"i"`) is significant.
/// - Nothing here fails; an unmatched buffer simply waits for more input.
use crate::action::{Count, Motion};
use crate::buffer::TextBuffer;
use crate::constants::keys::ESCAPE;
use crate::executor::execute_command;
use crate::keymap::{KeyContext, KeyMap, MatchResult};
use crate::mode::Mode;

/// A completed production of the tutor grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `[count]h`, `[count]j`, `[count]k`, `[count]l`, `[count]$`
    Move { motion: Motion, count: Count },
    /// `gg`
    JumpTop,
    /// `G`
    JumpBottom,
    /// `dw`
    DeleteWord,
    /// `cw`
    ChangeWord,
    /// `i`
    EnterInsertMode,
    /// `Escape` while inserting
    ExitInsertMode,
}

impl Command {
    /// Uncounted motion
    #[must_use]
    pub const fn motion(motion: Motion) -> Self {
        Command::Move { motion, count: 1 }
    }

    /// Mode the interpreter is in after this command runs
    #[must_use]
    pub fn next_mode(self, current: Mode) -> Mode {
        match self {
            Command::EnterInsertMode | Command::ChangeWord => Mode::Insert,
            Command::ExitInsertMode => Mode::Normal,
            _ => current,
        }
    }
}

/// What the command buffer looks like after a token was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// A production fired and the buffer was emptied
    Cleared,
    /// The buffer is a prefix of at least one production
    Pending,
    /// No production can start with the buffer
    Invalid,
}

/// Result of feeding one token to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The token exactly as typed; this is what solutions are checked against
    pub emitted: String,
    /// Production that fired on this token
    pub command: Option<Command>,
    /// Word removed by `dw` or `cw`
    pub removed: Option<String>,
    pub state: BufferState,
}

enum Resolution {
    Fire(Command),
    Wait,
    Dead,
}

/// Command dispatcher state
#[derive(Debug, Clone)]
pub struct Dispatcher {
    mode: Mode,
    pending: String,
    keymap: KeyMap,
    reset_on_invalid: bool,
}

impl Dispatcher {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self::with_keymap(mode, KeyMap::tutor_defaults())
    }

    #[must_use]
    pub fn with_keymap(mode: Mode, keymap: KeyMap) -> Self {
        Dispatcher {
            mode,
            pending: String::new(),
            keymap,
            reset_on_invalid: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending.clear();
    }

    /// Contents of the command buffer
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Discard the command buffer without leaving the current mode
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Back to normal mode with an empty buffer
    pub fn reset(&mut self) {
        self.set_mode(Mode::Normal);
    }

    /// Drop a normal-mode buffer as soon as it can no longer match
    pub fn set_reset_on_invalid(&mut self, enabled: bool) {
        self.reset_on_invalid = enabled;
    }

    #[must_use]
    pub fn reset_on_invalid(&self) -> bool {
        self.reset_on_invalid
    }

    /// Append `token` to the command buffer and run whatever production it completes.
    pub fn consume(&mut self, token: &str, text: &mut TextBuffer) -> Dispatch {
        self.pending.push_str(token);
        tracing::trace!(target: "interpreter", token, pending = %self.pending, mode = %self.mode, "consume");

        let mut removed = None;
        let (command, state) = match self.resolve(token) {
            Resolution::Fire(command) => {
                removed = execute_command(command, text);
                let mode = command.next_mode(self.mode);
                if mode != self.mode {
                    tracing::debug!(target: "interpreter", from = %self.mode, to = %mode, "mode change");
                }
                self.set_mode(mode);
                tracing::debug!(target: "interpreter", ?command, cursor = %text.cursor(), "dispatched");
                (Some(command), BufferState::Cleared)
            }
            Resolution::Wait => (None, BufferState::Pending),
            Resolution::Dead => {
                tracing::debug!(target: "interpreter", pending = %self.pending, "no production can match");
                if self.reset_on_invalid {
                    self.pending.clear();
                }
                (None, BufferState::Invalid)
            }
        };

        Dispatch {
            emitted: token.to_string(),
            command,
            removed,
            state,
        }
    }

    fn resolve(&self, token: &str) -> Resolution {
        let keys: Vec<char> = self.pending.chars().collect();

        if let MatchResult::Exact(command) | MatchResult::Ambiguous(command) =
            self.keymap.lookup_in(KeyContext::Global, &keys)
        {
            return Resolution::Fire(*command);
        }

        match self.mode {
            Mode::Insert if token == ESCAPE => Resolution::Fire(Command::ExitInsertMode),
            Mode::Insert => Resolution::Wait,
            Mode::Normal => self.resolve_normal(&keys),
        }
    }

    /// `digits* rest`: with no digits `rest` is looked up as is; with digits it
    /// must be exactly a motion key.
    fn resolve_normal(&self, keys: &[char]) -> Resolution {
        let digits = keys.iter().take_while(|c| c.is_ascii_digit()).count();
        let (count, rest) = keys.split_at(digits);

        let found = self.keymap.lookup(KeyContext::Normal, rest);
        if count.is_empty() {
            return match found {
                MatchResult::Exact(command) | MatchResult::Ambiguous(command) => {
                    Resolution::Fire(*command)
                }
                MatchResult::Prefix => Resolution::Wait,
                MatchResult::None => Resolution::Dead,
            };
        }

        match (rest, found) {
            ([], _) => Resolution::Wait,
            (
                [_],
                MatchResult::Exact(Command::Move { motion, .. })
                | MatchResult::Ambiguous(Command::Move { motion, .. }),
            ) => Resolution::Fire(Command::Move {
                motion: *motion,
                count: parse_count(count),
            }),
            _ => Resolution::Dead,
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Mode::Normal)
    }
}

/// Decimal digits to a count, saturating at `usize::MAX`
fn parse_count(digits: &[char]) -> Count {
    digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0usize, |acc, d| acc.saturating_mul(10).saturating_add(d as usize))
}
