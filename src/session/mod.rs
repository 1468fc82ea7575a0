//! Tutor session
//! Ties the interpreter, the text buffer and the course together

/// ## session/ Invariants
///
/// - The dispatcher and the course never see each other; the session hands
///   each emitted command from one to the other.
/// - Every submitted token produces one verdict notification.
/// - After a correct answer the next challenge's text is loaded once the
///   feedback delay has passed. Mode and pending input carry over.
/// - Errors from ex commands are routed through the error manager and never
///   abort the session.
use std::time::Instant;

use crate::buffer::TextBuffer;
use crate::command::{BufferState, Dispatcher};
use crate::command_line::settings::{create_settings_registry, SettingsRegistry};
use crate::command_line::{CommandParser, ExCommand};
use crate::constants::feedback::{COMPLETED, CORRECT, INCORRECT, PROGRESS_RESET};
use crate::course::{Course, Verdict};
use crate::error::manager::ErrorManager;
use crate::error::TutorError;
use crate::mode::Mode;
use crate::notification::NotificationManager;
use crate::state::TutorSettings;

/// Result of submitting one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The token as typed
    pub emitted: String,
    pub state: BufferState,
    pub verdict: Verdict,
}

/// Whether the host should keep running after an ex command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct TutorSession {
    buffer: TextBuffer,
    dispatcher: Dispatcher,
    course: Course,
    settings: TutorSettings,
    errors: ErrorManager,
    parser: CommandParser,
    settings_registry: SettingsRegistry,
    last_command: Option<String>,
    /// Deadline for loading the next challenge after a correct answer
    next_load_at: Option<Instant>,
}

impl TutorSession {
    #[must_use]
    pub fn new(course: Course, settings: TutorSettings) -> Self {
        let mut session = TutorSession {
            buffer: TextBuffer::new(),
            dispatcher: Dispatcher::default(),
            course,
            settings,
            errors: ErrorManager::new(),
            parser: CommandParser::default(),
            settings_registry: create_settings_registry(),
            last_command: None,
            next_load_at: None,
        };
        session.load_current();
        session
    }

    /// Seed the buffer from the current challenge
    pub fn load_current(&mut self) {
        let challenge = self.course.current();
        tracing::info!(target: "course", index = self.course.index(), prompt = challenge.prompt, "loading challenge");
        self.buffer.load(challenge.text);
        self.last_command = None;
        self.next_load_at = None;
    }

    /// Feed one token to the interpreter and check it against the current challenge
    pub fn submit(&mut self, token: &str) -> Outcome {
        self.submit_at(token, Instant::now())
    }

    pub fn submit_at(&mut self, token: &str, now: Instant) -> Outcome {
        // A pending load belongs to the challenge that was just solved
        if self.next_load_at.is_some() {
            self.load_current();
        }

        self.dispatcher
            .set_reset_on_invalid(self.settings.reset_on_invalid);
        let dispatch = self.dispatcher.consume(token, &mut self.buffer);
        self.last_command = Some(dispatch.emitted.clone());

        let verdict = self.course.check(&dispatch.emitted);
        match verdict {
            Verdict::Correct => {
                self.errors.notifications_mut().success(CORRECT);
                let delay = self.settings.feedback_delay();
                if delay.is_zero() {
                    self.load_current();
                    // keep the answer visible in the status line
                    self.last_command = Some(dispatch.emitted.clone());
                } else {
                    self.next_load_at = Some(now + delay);
                }
            }
            Verdict::Incorrect => {
                self.errors.notifications_mut().error(INCORRECT);
                let threshold = self.settings.autohint;
                if threshold > 0 && self.course.attempts() == threshold {
                    tracing::debug!(target: "course", attempts = threshold, "autohint");
                    self.hint();
                }
            }
            Verdict::Completed => {
                self.errors.notifications_mut().success(COMPLETED);
            }
        }

        Outcome {
            emitted: dispatch.emitted,
            state: dispatch.state,
            verdict,
        }
    }

    /// Load the next challenge if its feedback delay has passed.
    /// Returns true when the buffer changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.next_load_at {
            Some(deadline) if now >= deadline => {
                self.load_current();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.next_load_at.is_some()
    }

    pub fn hint(&mut self) {
        let hint = self.course.hint();
        self.errors.notifications_mut().info(hint);
    }

    /// Start the course over from the first challenge
    pub fn reset_progress(&mut self) {
        self.course.reset();
        self.dispatcher.reset();
        self.load_current();
        self.errors.notifications_mut().info(PROGRESS_RESET);
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        tracing::debug!(target: "settings", theme = %self.settings.theme, "theme toggled");
    }

    /// Parse and run a `:` command line
    pub fn execute_ex(&mut self, line: &str) -> Flow {
        match self.try_execute_ex(line) {
            Ok(flow) => flow,
            Err(err) => {
                self.errors.handle(err);
                Flow::Continue
            }
        }
    }

    fn try_execute_ex(&mut self, line: &str) -> Result<Flow, TutorError> {
        match self.parser.parse(line)? {
            ExCommand::Quit => return Ok(Flow::Quit),
            ExCommand::Hint => self.hint(),
            ExCommand::Reset => self.reset_progress(),
            ExCommand::Theme => self.toggle_theme(),
            ExCommand::Set(assignments) => {
                for assignment in assignments {
                    self.settings_registry.execute_setting(
                        &assignment.option,
                        &assignment.value,
                        &mut self.settings,
                    )?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.dispatcher.mode()
    }

    #[must_use]
    pub fn pending(&self) -> &str {
        self.dispatcher.pending()
    }

    #[must_use]
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn settings(&self) -> &TutorSettings {
        &self.settings
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationManager {
        self.errors.notifications()
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        self.errors.notifications_mut()
    }
}

impl Default for TutorSession {
    fn default() -> Self {
        Self::new(Course::default(), TutorSettings::default())
    }
}
