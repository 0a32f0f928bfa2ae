use chrono::{DateTime, Utc};

use super::{ExportTarget, JobId, JobStatus, JobUpdate};

pub const ANONYMOUS_USER_ID: &str = "anonymous";
pub const GENERIC_TEMPLATE_ID: &str = "generic";

/// Fields supplied when a job is submitted; everything else is server-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExportJob {
    pub user_id: String,
    pub markdown: String,
    pub target: ExportTarget,
    pub template_id: String,
}

impl NewExportJob {
    pub fn anonymous(markdown: String, target: ExportTarget) -> Self {
        Self {
            user_id: ANONYMOUS_USER_ID.to_string(),
            markdown,
            target,
            template_id: GENERIC_TEMPLATE_ID.to_string(),
        }
    }

    pub fn with_template(mut self, template_id: String) -> Self {
        self.template_id = template_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub id: JobId,
    pub user_id: String,
    pub markdown: String,
    pub target: ExportTarget,
    pub template_id: String,
    pub status: JobStatus,
    pub artifact_url: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExportJob {
    pub fn new(input: NewExportJob) -> Self {
        Self {
            id: JobId::generate(),
            user_id: input.user_id,
            markdown: input.markdown,
            target: input.target,
            template_id: input.template_id,
            status: JobStatus::Pending,
            artifact_url: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Overwrites only the fields present in `update`. Transition legality is not checked.
    pub fn apply(&mut self, update: &JobUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(artifact_url) = &update.artifact_url {
            self.artifact_url = Some(artifact_url.clone());
        }
        if let Some(error) = &update.error {
            self.error = Some(error.clone());
        }
        if let Some(completed_at) = update.completed_at {
            self.completed_at = Some(completed_at);
        }
    }
}
