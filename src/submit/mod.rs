//! Remote submission of a finished segment (impure shell).
//!
//! The builder only knows the [`SegmentSubmitter`] trait; the HTTP
//! implementation lives in [`http`].

pub mod http;

pub use http::HttpSubmitter;

use crate::model::{SegmentPayload, SubmitError};

/// Delivers a segment payload to the collaborator.
///
/// `Ok(())` means the collaborator accepted it (2xx). Any other outcome is a
/// [`SubmitError`].
pub trait SegmentSubmitter {
    /// Send `payload`, blocking until the collaborator answers or the request fails.
    fn submit(&self, payload: &SegmentPayload) -> Result<(), SubmitError>;
}
