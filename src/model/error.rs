//! Error types for the segment builder.
//!
//! Two families exist:
//!
//! - [`ValidationError`] - local input problems (empty name, no schemas, no
//!   candidate selected). Never reaches the network. Reported to the user
//!   through a transient error notification carrying the variant's message.
//! - [`SubmitError`] - the remote call failed (non-2xx status or transport
//!   failure). The cause is logged; the user only sees a generic message and
//!   the draft is kept so the save can be retried.
//!
//! Neither family is fatal. Terminal and configuration failures live next to
//! the code that produces them (`TuiError`, `ConfigError`, `LoggingError`).

use thiserror::Error;

use super::notification::{MSG_NAME_REQUIRED, MSG_SCHEMA_REQUIRED, MSG_SELECT_SCHEMA_FIRST};

/// Input rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `add_schema` invoked with no pending candidate.
    #[error("{}", MSG_SELECT_SCHEMA_FIRST)]
    NoCandidateSelected,

    /// Segment name is empty after trimming whitespace.
    #[error("{}", MSG_NAME_REQUIRED)]
    EmptyName,

    /// No schema rows have been added.
    #[error("{}", MSG_SCHEMA_REQUIRED)]
    NoSchemas,
}

/// Failure of the remote submission call.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Collaborator answered with a non-2xx status.
    #[error("Segment endpoint responded with status {0}")]
    Status(u16),

    /// Request never completed (DNS, connect, timeout, TLS...).
    #[error("Segment request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
