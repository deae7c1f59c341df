//! Transient user notifications (the snackbar).
//!
//! At most one notification is visible. Showing a new one replaces both the
//! message and its expiry deadline, so an older deadline can never clear a
//! newer message early.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

/// Shown when adding a schema with no candidate selected.
pub const MSG_SELECT_SCHEMA_FIRST: &str =
    "Please select a schema from the \"Add schema to segment\" dropdown first";
/// Shown when saving with a blank segment name.
pub const MSG_NAME_REQUIRED: &str = "Please enter a segment name in the text field above";
/// Shown when saving with no schema rows.
pub const MSG_SCHEMA_REQUIRED: &str =
    "Please add at least one schema: Select from dropdown and click \"+ Add new schema\"";
/// Shown after the collaborator accepted the segment.
pub const MSG_SAVED: &str = "Segment saved successfully!";
/// Shown when the submission failed for any reason.
pub const MSG_SAVE_FAILED: &str = "Error saving segment. Please try again.";

/// Visual intent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Green snackbar.
    Success,
    /// Red snackbar.
    Error,
}

/// A message shown to the user for a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown in the snackbar.
    pub message: String,
    /// Success or error styling.
    pub kind: NotificationKind,
}

impl Notification {
    /// Success notification with `message`.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    /// Error notification with `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Holder for the single visible notification and its deadline.
///
/// # Cardinality
/// - Empty: 1 state
/// - Showing: one notification with exactly one pending expiry
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<(Notification, Instant)>,
}

impl NotificationSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, replacing any visible one and restarting the countdown.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now + NOTIFICATION_LIFETIME));
    }

    /// Clear the notification if its deadline has passed.
    ///
    /// Returns `true` when a notification was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, deadline)) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clear the notification immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// When the visible notification expires.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, d)| *d)
    }
}
