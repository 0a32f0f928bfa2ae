use chrono::{DateTime, Utc};

use super::JobStatus;

/// Partial update applied by the worker. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub status: Option<JobStatus>,
    pub artifact_url: Option<String>,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.artifact_url.is_none()
            && self.error.is_none()
            && self.completed_at.is_none()
    }
}
