use crate::recorder::SubmissionRecorder;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub recorder: Arc<dyn SubmissionRecorder>,
}

impl AppState {
    pub fn new(recorder: Arc<dyn SubmissionRecorder>) -> Self {
        Self {
            started_at: Instant::now(),
            recorder,
        }
    }
}
