//! HTTP POST implementation of [`SegmentSubmitter`].

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use super::SegmentSubmitter;
use crate::model::{SegmentPayload, SubmitError};

/// Posts segment payloads as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Create a submitter for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Transport` if the HTTP client cannot be built
    /// (e.g. TLS backend initialization failure).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// URL payloads are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SegmentSubmitter for HttpSubmitter {
    fn submit(&self, payload: &SegmentPayload) -> Result<(), SubmitError> {
        debug!(
            endpoint = %self.endpoint,
            schema_count = payload.schema.len(),
            "Posting segment"
        );

        let response = self.http.post(&self.endpoint).json(payload).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        info!(status = status.as_u16(), "Segment accepted");
        Ok(())
    }
}
