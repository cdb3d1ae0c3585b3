//! Gated submission of documents to the registry endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::error::{MarkgateError, Result};
use crate::ratelimit::RateLimiter;

use super::document::Document;

/// Outcome of a submission that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The registry accepted the document.
    Accepted(StatusCode),
    /// The registry answered 401. The submission is treated as accepted;
    /// the caller is notified through a warning-level log event.
    AcceptedWithAuthWarning,
}

/// Submits documents to the registry, one gated request per call.
///
/// Every submission first waits for a permit from the shared
/// [`RateLimiter`], then issues exactly one HTTP POST. Nothing is
/// retried; every failure is returned to the caller as a typed error.
pub struct DocumentSubmitter {
    /// HTTP client shared across submissions
    client: reqwest::Client,
    /// URL of the document-creation resource
    endpoint: String,
    /// Shared admission gate
    limiter: Arc<RateLimiter>,
}

impl DocumentSubmitter {
    /// Create a new submitter against the configured endpoint.
    pub fn new(config: &RegistryConfig, limiter: Arc<RateLimiter>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            limiter,
        })
    }

    /// Submit one document, signed with the caller's detached signature.
    ///
    /// Waits for rate limiter admission (unbounded), serializes the
    /// document, sends it, and classifies the response. Cancellation only
    /// affects the admission wait; once the request is issued the call
    /// runs to completion or transport failure.
    ///
    /// # Errors
    ///
    /// [`MarkgateError::Canceled`] if the admission wait was aborted,
    /// [`MarkgateError::Transport`] if no response was obtained, and
    /// [`MarkgateError::Rejected`] for any non-success, non-401 status.
    pub async fn submit(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<SubmissionOutcome> {
        self.limiter.acquire().await?;
        trace!(doc_id = ?document.doc_id, "Admitted; serializing document");

        let body = serde_json::to_vec(document)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(signature)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(
                doc_id = ?document.doc_id,
                status = %status,
                "Registry reported an authorization problem; submission treated as accepted"
            );
            return Ok(SubmissionOutcome::AcceptedWithAuthWarning);
        }
        if status.is_success() {
            debug!(doc_id = ?document.doc_id, status = %status, "Document accepted");
            return Ok(SubmissionOutcome::Accepted(status));
        }
        Err(MarkgateError::Rejected(status))
    }
}
