//! Course progress and solution checking
//!
//! Owns the challenge index. The dispatcher never sees it; the session hands
//! every emitted command to [`Course::check`] after the dispatcher has run.

use crate::challenge::{Challenge, CHALLENGES};
use crate::constants::errors::EMPTY_COURSE;
use crate::error::{ErrorType, Result, TutorError};

/// Outcome of checking an emitted command against the current challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Solved; the course moved on to the next challenge
    Correct,
    /// Not the solution; the course stays where it is
    Incorrect,
    /// The last challenge has been solved
    Completed,
}

#[derive(Debug, Clone)]
pub struct Course {
    challenges: Vec<Challenge>,
    index: usize,
    completed: bool,
    attempts: usize,
}

impl Course {
    pub fn new(challenges: Vec<Challenge>) -> Result<Self> {
        if challenges.is_empty() {
            return Err(TutorError::critical(
                ErrorType::Internal,
                EMPTY_COURSE,
                "A course needs at least one challenge",
            ));
        }
        Ok(Course {
            challenges,
            index: 0,
            completed: false,
            attempts: 0,
        })
    }

    /// Challenge the learner is working on (the last one once completed)
    #[must_use]
    pub fn current(&self) -> &Challenge {
        &self.challenges[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Wrong answers given on the current challenge
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// `(n, total)` where `n` is the 1-based number of the current challenge
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        ((self.index + 1).min(self.len()), self.len())
    }

    /// Fraction of the progress bar to fill, in `(0, 1]`
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        let (done, total) = self.progress();
        done as f64 / total as f64
    }

    #[must_use]
    pub fn hint(&self) -> &'static str {
        self.current().hint
    }

    /// Compare `emitted` with the current solution and advance on a match
    pub fn check(&mut self, emitted: &str) -> Verdict {
        if self.completed {
            return Verdict::Completed;
        }

        if emitted != self.current().solution {
            self.attempts += 1;
            tracing::debug!(target: "course", challenge = self.index, emitted, attempts = self.attempts, "incorrect");
            return Verdict::Incorrect;
        }

        self.attempts = 0;
        if self.index + 1 == self.len() {
            self.completed = true;
            tracing::info!(target: "course", challenges = self.len(), "course completed");
            return Verdict::Completed;
        }

        self.index += 1;
        tracing::info!(target: "course", challenge = self.index, "advanced");
        Verdict::Correct
    }

    /// Start over from the first challenge
    pub fn reset(&mut self) {
        self.index = 0;
        self.completed = false;
        self.attempts = 0;
    }
}

impl Default for Course {
    fn default() -> Self {
        Course {
            challenges: CHALLENGES.to_vec(),
            index: 0,
            completed: false,
            attempts: 0,
        }
    }
}
