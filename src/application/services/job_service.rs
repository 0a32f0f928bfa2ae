use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{ExportJob, JobId, JobStatus, JobUpdate, NewExportJob};

pub const DEFAULT_LIST_LIMIT: usize = 20;
pub const DEFAULT_PENDING_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Clamps a caller-supplied page size into `[1, MAX_LIMIT]`.
pub fn clamp_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) => n.clamp(1, MAX_LIMIT as i64) as usize,
        None => default,
    }
}

#[derive(Debug)]
pub enum ClaimOutcome {
    Claimed(ExportJob),
    NotPending(ExportJob),
    NotFound,
}

/// Job lifecycle use-cases behind the HTTP API.
pub struct JobService {
    job_repository: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(job_repository: Arc<dyn JobRepository>) -> Self {
        Self { job_repository }
    }

    #[instrument(skip(self, input), fields(target = %input.target, template_id = %input.template_id))]
    pub async fn create_export(&self, input: NewExportJob) -> Result<ExportJob, RepositoryError> {
        let job = ExportJob::new(input);
        self.job_repository.create(&job).await?;

        tracing::info!(
            job_id = %job.id,
            markdown_chars = job.markdown.chars().count(),
            "Export job created"
        );

        Ok(job)
    }

    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn get_job(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError> {
        self.job_repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_jobs(&self, limit: usize) -> Result<Vec<ExportJob>, RepositoryError> {
        self.job_repository.list(limit).await
    }

    #[instrument(skip(self))]
    pub async fn pending_jobs(&self, limit: usize) -> Result<Vec<ExportJob>, RepositoryError> {
        self.job_repository
            .list_by_status(JobStatus::Pending, limit)
            .await
    }

    /// Checks existence first so that an unknown id never reaches the write path.
    #[instrument(skip(self, update), fields(job_id = %id, status = ?update.status))]
    pub async fn update_job(
        &self,
        id: &JobId,
        update: JobUpdate,
    ) -> Result<Option<ExportJob>, RepositoryError> {
        let Some(existing) = self.job_repository.get_by_id(id).await? else {
            tracing::debug!("Update for unknown job");
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(existing));
        }

        if let Some(next) = update.status {
            if existing.status.is_terminal() && next != existing.status {
                tracing::warn!(
                    from = %existing.status,
                    to = %next,
                    "Status change requested on a terminal job"
                );
            }
        }

        let updated = self.job_repository.update(id, &update).await?;
        if let Some(job) = &updated {
            tracing::info!(status = %job.status, "Export job updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn claim_job(&self, id: &JobId) -> Result<ClaimOutcome, RepositoryError> {
        if let Some(job) = self.job_repository.claim(id).await? {
            tracing::info!("Export job claimed");
            return Ok(ClaimOutcome::Claimed(job));
        }

        match self.job_repository.get_by_id(id).await? {
            Some(job) => Ok(ClaimOutcome::NotPending(job)),
            None => Ok(ClaimOutcome::NotFound),
        }
    }
}
