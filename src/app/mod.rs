//! Tutor application
//! Event loop tying the terminal, the typed line and the session together

/// ## app/ Invariants
///
/// - The terminal is initialised before the first frame and restored on drop.
/// - Keys only edit the typed line, except Enter, Escape and Ctrl-C.
/// - Enter submits the whole line as one token. In Normal mode `:` lines go
///   to the ex parser instead.
/// - Escape submits the `Escape` token without touching the typed line.
use std::time::Duration;

use crate::command_line::{CommandLine, Submission};
use crate::constants::keys::ESCAPE;
use crate::constants::ui::POLL_TIMEOUT_MS;
use crate::error::Result;
use crate::key::Key;
use crate::render::Renderer;
use crate::session::{Flow, TutorSession};
use crate::term::TerminalBackend;

pub struct Tutor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    session: TutorSession,
    input: CommandLine,
    renderer: Renderer,
    should_quit: bool,
}

impl<T: TerminalBackend> Tutor<T> {
    pub fn new(mut terminal: T, session: TutorSession) -> Result<Self> {
        terminal.init()?;
        Ok(Tutor {
            term: terminal,
            session,
            input: CommandLine::new(),
            renderer: Renderer::new(),
            should_quit: false,
        })
    }

    /// Run the main loop until the learner quits
    pub fn run(&mut self) -> Result<()> {
        self.renderer.render(&mut self.term, &self.session, &self.input)?;
        while !self.should_quit {
            self.step()?;
        }
        tracing::info!(target: "app", "quit");
        Ok(())
    }

    /// One loop iteration: wait briefly for a key, advance timers, redraw
    pub fn step(&mut self) -> Result<()> {
        if let Some(key) = self
            .term
            .poll_key(Duration::from_millis(POLL_TIMEOUT_MS))?
        {
            self.handle_key(key);
        }

        self.session.tick();
        self.session.notifications_mut().prune_expired();
        self.renderer.render(&mut self.term, &self.session, &self.input)?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) {
        tracing::trace!(target: "app", ?key, "key");
        match key {
            Key::Ctrl('c') => self.should_quit = true,
            Key::Char(ch) => self.input.push(ch),
            Key::Backspace => {
                self.input.backspace();
            }
            Key::Escape => {
                self.session.submit(ESCAPE);
            }
            Key::Enter => match self.input.take(self.session.mode()) {
                Submission::Token(token) => {
                    let outcome = self.session.submit(&token);
                    tracing::debug!(target: "app", token, verdict = ?outcome.verdict, "submitted");
                }
                Submission::Ex(line) => {
                    if self.session.execute_ex(&line) == Flow::Quit {
                        self.should_quit = true;
                    }
                }
            },
            Key::Resize(..) => self.renderer.invalidate(),
            Key::Ctrl(_) | Key::Unknown => {}
        }
    }

    #[must_use]
    pub fn session(&self) -> &TutorSession {
        &self.session
    }

    #[must_use]
    pub fn input(&self) -> &CommandLine {
        &self.input
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl<T: TerminalBackend> Drop for Tutor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
