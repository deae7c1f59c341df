//! The segment builder controller.
//!
//! Owns the draft, modal visibility, the pending "add schema" candidate and
//! the notification slot. Every mutation goes through one of the operations
//! below; the rendering layer only sees [`BuilderSnapshot`]s.
//!
//! # Modal state machine
//!
//! | From   | Event                                   | To     |
//! |--------|-----------------------------------------|--------|
//! | Closed | `open_modal`                            | Open   |
//! | Open   | `cancel`                                | Closed |
//! | Open   | `save` succeeds                         | Closed |
//! | Open   | `save` fails (validation or submission) | Open   |

use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use super::clock::{Clock, SystemClock};
use super::draft::SegmentDraft;
use crate::model::notification::{MSG_SAVED, MSG_SAVE_FAILED};
use crate::model::{
    Notification, NotificationSlot, SchemaCatalog, SchemaOption, ValidationError,
};
use crate::submit::SegmentSubmitter;

/// Result of a [`SegmentBuilder::save`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Collaborator accepted the segment; draft reset, modal closed.
    Saved,
    /// Rejected locally; no network call was made.
    Invalid(ValidationError),
    /// Submission failed; draft and modal left untouched for retry.
    Failed,
}

/// One schema row as the rendering layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    /// Option currently chosen in this row.
    pub selected: SchemaOption,
    /// Options this row may switch to, including its own selection.
    pub available: Vec<SchemaOption>,
}

/// Read-only view of the builder for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSnapshot {
    /// Whether the modal is visible.
    pub modal_open: bool,
    /// Draft name as typed.
    pub name: String,
    /// Added schema rows in display order.
    pub rows: Vec<RowSnapshot>,
    /// Candidate waiting to be added, if any.
    pub pending: Option<SchemaOption>,
    /// Options the pending selector offers.
    pub pending_available: Vec<SchemaOption>,
    /// Visible notification, if any.
    pub notification: Option<Notification>,
}

/// Segment builder view model.
pub struct SegmentBuilder {
    catalog: SchemaCatalog,
    draft: SegmentDraft,
    modal_open: bool,
    pending: Option<SchemaOption>,
    notification: NotificationSlot,
    submitter: Box<dyn SegmentSubmitter>,
    clock: Box<dyn Clock>,
}

impl SegmentBuilder {
    /// Create a builder with an empty draft and the modal closed.
    pub fn new(catalog: SchemaCatalog, submitter: Box<dyn SegmentSubmitter>) -> Self {
        Self {
            catalog,
            draft: SegmentDraft::default(),
            modal_open: false,
            pending: None,
            notification: NotificationSlot::new(),
            submitter,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source used for notification deadlines.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ===== Queries =====

    /// Catalog every selector draws from.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Segment being edited.
    pub fn draft(&self) -> &SegmentDraft {
        &self.draft
    }

    /// Whether the modal is visible.
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Candidate for the next `add_schema`.
    pub fn pending(&self) -> Option<SchemaOption> {
        self.pending
    }

    /// Visible notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    /// When the visible notification expires, if one is shown.
    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notification.deadline()
    }

    /// How long the event loop may wait before the next [`tick`](Self::tick).
    ///
    /// Never longer than `max`, and never past the notification deadline, so
    /// an expired notification is cleared on the first wake after its deadline.
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        match self.notification.deadline() {
            Some(deadline) => max.min(deadline.saturating_duration_since(self.clock.now())),
            None => max,
        }
    }

    /// Options row `row` may select: catalog minus values used by other rows.
    ///
    /// Returns an empty list for a row that does not exist.
    pub fn available_for_row(&self, row: usize) -> Vec<SchemaOption> {
        if row >= self.draft.schemas.len() {
            return Vec::new();
        }
        self.catalog
            .available_excluding(self.draft.values_except(Some(row)))
    }

    /// Options the pending selector offers: catalog minus every used value.
    pub fn available_for_pending(&self) -> Vec<SchemaOption> {
        self.catalog.available_excluding(self.draft.values_except(None))
    }

    /// Capture everything the view needs for one frame.
    pub fn snapshot(&self) -> BuilderSnapshot {
        let rows = self
            .draft
            .schemas
            .iter()
            .enumerate()
            .map(|(i, selected)| RowSnapshot {
                selected: *selected,
                available: self.available_for_row(i),
            })
            .collect();

        BuilderSnapshot {
            modal_open: self.modal_open,
            name: self.draft.name.clone(),
            rows,
            pending: self.pending,
            pending_available: self.available_for_pending(),
            notification: self.notification.current().cloned(),
        }
    }

    // ===== Operations =====

    /// Reveal the modal. The draft is left as it is.
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Replace the draft name verbatim.
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.draft.name = text.into();
    }

    /// Set the "about to be added" candidate.
    ///
    /// An empty `value` clears the candidate. A value that is unknown or
    /// already used is ignored.
    pub fn select_pending_schema(&mut self, value: &str) {
        if value.is_empty() {
            self.pending = None;
            return;
        }

        match self
            .available_for_pending()
            .into_iter()
            .find(|o| o.value == value)
        {
            Some(option) => self.pending = Some(option),
            None => debug!(value, "Ignoring unavailable pending schema"),
        }
    }

    /// Append the pending candidate as a new row.
    ///
    /// With no candidate, shows an error notification and changes nothing.
    pub fn add_schema(&mut self) -> Result<(), ValidationError> {
        let candidate = self
            .pending
            .filter(|c| self.available_for_pending().contains(c));

        let Some(option) = candidate else {
            self.pending = None;
            return Err(self.reject(ValidationError::NoCandidateSelected));
        };

        self.draft.schemas.push(option);
        self.pending = None;
        debug!(value = option.value, rows = self.draft.schemas.len(), "Schema added");
        Ok(())
    }

    /// Point row `row` at the option matching `new_value`.
    ///
    /// No-op when the row does not exist or `new_value` is used by another row.
    pub fn change_schema(&mut self, row: usize, new_value: &str) {
        let Some(option) = self
            .available_for_row(row)
            .into_iter()
            .find(|o| o.value == new_value)
        else {
            debug!(row, new_value, "Ignoring unavailable schema change");
            return;
        };

        self.draft.schemas[row] = option;

        // The candidate list must never offer a value that is now in use.
        if self.pending == Some(option) {
            self.pending = None;
        }
    }

    /// Remove row `row`, shifting later rows up. No-op when out of range.
    pub fn remove_schema(&mut self, row: usize) {
        if row < self.draft.schemas.len() {
            let removed = self.draft.schemas.remove(row);
            debug!(value = removed.value, row, "Schema removed");
        }
    }

    /// Validate and submit the draft.
    ///
    /// Checks run in order (name, then schema count) and stop at the first
    /// failure. The submission runs to completion before this returns, so two
    /// saves can never overlap.
    pub fn save(&mut self) -> SaveOutcome {
        if !self.draft.has_name() {
            return SaveOutcome::Invalid(self.reject(ValidationError::EmptyName));
        }
        if self.draft.schemas.is_empty() {
            return SaveOutcome::Invalid(self.reject(ValidationError::NoSchemas));
        }

        let payload = self.draft.to_payload();
        match self.submitter.submit(&payload) {
            Ok(()) => {
                info!(
                    segment_name = %payload.segment_name,
                    schema_count = payload.schema.len(),
                    "Segment saved"
                );
                self.notify(Notification::success(MSG_SAVED));
                self.reset();
                self.modal_open = false;
                SaveOutcome::Saved
            }
            Err(err) => {
                error!(error = %err, "Saving segment failed");
                self.notify(Notification::error(MSG_SAVE_FAILED));
                SaveOutcome::Failed
            }
        }
    }

    /// Close the modal and discard the draft.
    pub fn cancel(&mut self) {
        self.modal_open = false;
        self.reset();
    }

    /// Expire the notification if its lifetime has elapsed.
    ///
    /// Returns `true` when something was cleared (a redraw is needed).
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.notification.tick(now)
    }

    /// Hide the visible notification without waiting for it to expire.
    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    // ===== Internals =====

    fn notify(&mut self, notification: Notification) {
        let now = self.clock.now();
        self.notification.show(notification, now);
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        debug!(error = ?err, "Validation failed");
        self.notify(Notification::error(err.to_string()));
        err
    }

    fn reset(&mut self) {
        self.draft = SegmentDraft::default();
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
