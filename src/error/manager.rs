//! Error Manager
//! Routes errors into the notification queue shown to the learner

use crate::error::{ErrorSeverity, TutorError};
use crate::notification::NotificationManager;

/// Manages errors and their presentation to the user
#[derive(Debug)]
pub struct ErrorManager {
    notifications: NotificationManager,
}

impl ErrorManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifications: NotificationManager::new(),
        }
    }

    pub fn handle(&mut self, err: TutorError) {
        tracing::warn!(target: "error", code = %err.code, kind = %err.kind, "{}", err.message);
        let message = err.message;
        match err.severity {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                self.notifications.error(message);
            }
            ErrorSeverity::Warning => {
                self.notifications.warn(message);
            }
            ErrorSeverity::Info => {
                self.notifications.info(message);
            }
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        &mut self.notifications
    }
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new()
    }
}
