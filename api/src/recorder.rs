//! Recording sink for accepted submissions
//!
//! The handler hands every sanitized submission to a `SubmissionRecorder`.
//! A real deployment would dispatch email or insert into a datastore;
//! the reference sink writes a structured log line. A sink failure is
//! fatal for the request: a submission that cannot be recorded must not
//! be acknowledged as success.

use async_trait::async_trait;
use shared::RecordedSubmission;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("recording sink unavailable: {0}")]
    SinkUnavailable(String),
}

#[async_trait]
pub trait SubmissionRecorder: Send + Sync {
    async fn record(&self, submission: &RecordedSubmission) -> Result<(), RecordingError>;
}

/// Reference sink: logs the sanitized submission with its receive time.
pub struct LogRecorder;

#[async_trait]
impl SubmissionRecorder for LogRecorder {
    async fn record(&self, record: &RecordedSubmission) -> Result<(), RecordingError> {
        tracing::info!(
            received_at = %record.received_at.to_rfc3339(),
            name = %record.submission.name,
            email = %record.submission.email,
            company = %record.submission.company,
            project_type = %record.submission.project_type,
            message = %record.submission.message,
            "contact form submission"
        );
        Ok(())
    }
}

/// In-process sink that captures submissions for inspection. Used by the
/// integration tests to observe what the handler actually records.
#[derive(Default)]
pub struct MemoryRecorder {
    submissions: Mutex<Vec<RecordedSubmission>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RecordedSubmission> {
        self.submissions.lock().expect("recorder poisoned").clone()
    }
}

#[async_trait]
impl SubmissionRecorder for MemoryRecorder {
    async fn record(&self, record: &RecordedSubmission) -> Result<(), RecordingError> {
        self.submissions
            .lock()
            .map_err(|_| RecordingError::SinkUnavailable("memory sink poisoned".to_string()))?
            .push(record.clone());
        Ok(())
    }
}

/// Sink that always fails; exercises the recording-failure path in tests.
pub struct FailingRecorder;

#[async_trait]
impl SubmissionRecorder for FailingRecorder {
    async fn record(&self, _record: &RecordedSubmission) -> Result<(), RecordingError> {
        Err(RecordingError::SinkUnavailable("sink offline".to_string()))
    }
}
