// src/models.rs
// Shared data types for the contact submission pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by wire field name.
///
/// Only failing fields appear, and each entry carries at least one
/// message. `BTreeMap` keeps serialization order deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// One contact-form record as it travels over the wire.
///
/// Immutable once constructed; there is no update path and no identity
/// beyond the request that carried it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: String,
    pub message: String,
}

impl ContactSubmission {
    /// Empty record — the client form's reset state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.company.is_empty()
            && self.project_type.is_empty()
            && self.message.is_empty()
    }
}

/// A sanitized submission stamped with the server-side receive time.
/// This is the value handed to the recording sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSubmission {
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub submission: ContactSubmission,
}

/// Success acknowledgement body for `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Confirmation text returned on every accepted submission.
pub const SUBMISSION_ACK_MESSAGE: &str =
    "Form submitted successfully. We'll get back to you soon!";

impl ContactAck {
    pub fn new() -> Self {
        Self {
            success: true,
            message: SUBMISSION_ACK_MESSAGE.to_string(),
        }
    }
}

impl Default for ContactAck {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body for `POST /api/contact` rejections.
///
/// `details` is present only on validation failures (400); parse and
/// recording failures (500) carry the generic `error` string alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}
