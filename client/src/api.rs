/// HTTP client for the contact API
/// Posts submissions and maps transport and server rejections into a
/// typed error the form state machine can act on

use shared::{ContactAck, ContactErrorBody, ContactSubmission, FieldErrors};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("Network timeout")]
    Timeout,
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
    #[error("Submission rejected ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
        details: Option<FieldErrors>,
    },
}

impl ClientError {
    /// True for failures where no server response was read at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::RequestFailed(_) | ClientError::Timeout)
    }
}

/// Contact API client
pub struct ContactApiClient {
    endpoint: String,
    client: reqwest::Client,
    request_timeout: Duration,
}

impl ContactApiClient {
    /// Default bound on the outbound call; expiry reads as a transport
    /// failure.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, request_timeout: Duration) -> Self {
        let client = reqwest::ClientBuilder::new()
            .timeout(request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ContactApiClient {
            endpoint: endpoint.into(),
            client,
            request_timeout,
        }
    }

    /// Submit one contact record to `POST /api/contact`.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck, ClientError> {
        let url = format!("{}/api/contact", self.endpoint.trim_end_matches('/'));
        debug!("Submitting contact form to {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let ack: ContactAck = response.json().await.map_err(|e| {
                ClientError::InvalidResponse(format!("Failed to parse acknowledgement: {}", e))
            })?;
            return Ok(ack);
        }

        // Non-2xx with a readable body carries the server's own message;
        // anything else falls back to the status line.
        let body: Option<ContactErrorBody> = response.json().await.ok();
        let (message, details) = match body {
            Some(body) => (body.error, body.details),
            None => (format!("HTTP {}", status.as_u16()), None),
        };

        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
            details,
        })
    }
}
