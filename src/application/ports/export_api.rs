use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{ExportTarget, JobStatus};

/// Client view of the export HTTP API.
#[async_trait]
pub trait ExportApi: Send + Sync {
    async fn submit(
        &self,
        markdown: &str,
        target: ExportTarget,
    ) -> Result<SubmittedExport, ExportApiError>;

    async fn fetch_job(&self, job_id: &str) -> Result<Option<JobSnapshot>, ExportApiError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedExport {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    pub id: String,
    pub status: String,
    pub target: String,
    pub artifact_url: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    /// Unknown status strings are treated as still in flight.
    pub fn status(&self) -> Option<JobStatus> {
        self.status.parse().ok()
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_some_and(|s| s.is_terminal())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportApiError {
    #[error("export api request failed: {0}")]
    RequestFailed(String),
    #[error("invalid export api response: {0}")]
    InvalidResponse(String),
    #[error("export api rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}
