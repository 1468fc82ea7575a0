//! Notification system
//! Queue of feedback messages shown to the learner (verdicts, hints, errors)

use crate::constants::notifications::{ERROR_TTL, INFO_TTL, SUCCESS_TTL, WARNING_TTL};
use crate::error::ErrorSeverity;
use std::time::{Duration, Instant};

/// Types of notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Warning,
    Error,
    Success,
}

impl From<ErrorSeverity> for NotificationType {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => NotificationType::Info,
            ErrorSeverity::Warning => NotificationType::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => NotificationType::Error,
        }
    }
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier
    pub id: u64,
    /// The message content
    pub message: String,
    /// The type/severity of the notification
    pub kind: NotificationType,
    /// When the notification was created
    pub timestamp: Instant,
    /// Optional time-to-live. If None, it persists until manually dismissed.
    pub ttl: Option<Duration>,
}

impl Notification {
    pub fn new(
        id: u64,
        kind: NotificationType,
        message: impl Into<String>,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            timestamp: Instant::now(),
            ttl,
        }
    }

    /// Check if the notification has expired
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.duration_since(self.timestamp) > ttl,
            None => false,
        }
    }
}

/// Manages active notifications
#[derive(Debug)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: u64,
    /// Monotonic generation counter for change detection
    pub generation: u64,
}

impl NotificationManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            generation: 0,
        }
    }

    /// Add a notification
    pub fn add(
        &mut self,
        kind: NotificationType,
        message: impl Into<String>,
        ttl: Option<Duration>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications
            .push(Notification::new(id, kind, message, ttl));
        self.generation += 1;
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Info, message, Some(INFO_TTL))
    }

    pub fn warn(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Warning, message, Some(WARNING_TTL))
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Error, message, Some(ERROR_TTL))
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Success, message, Some(SUCCESS_TTL))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }

    /// Most recently added notification still in the queue
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Prune expired notifications
    pub fn prune_expired(&mut self) {
        self.prune_expired_at(Instant::now());
    }

    pub fn prune_expired_at(&mut self, now: Instant) {
        let old_len = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired(now));
        if self.notifications.len() != old_len {
            self.generation += 1;
        }
    }

    /// Remove a notification by ID
    pub fn remove(&mut self, id: u64) {
        if let Some(pos) = self.notifications.iter().position(|n| n.id == id) {
            self.notifications.remove(pos);
            self.generation += 1;
        }
    }

    pub fn clear_all(&mut self) {
        if !self.notifications.is_empty() {
            self.notifications.clear();
            self.generation += 1;
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
