use async_trait::async_trait;

use crate::domain::{ExportJob, JobId, JobStatus, JobUpdate};

use super::RepositoryError;

/// Persistence contract for export jobs. Absence is reported as `None`, never as an error.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &ExportJob) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError>;

    /// Newest-first by `created_at`.
    async fn list(&self, limit: usize) -> Result<Vec<ExportJob>, RepositoryError>;

    /// Newest-first by `created_at`.
    async fn list_by_status(
        &self,
        status: JobStatus,
        limit: usize,
    ) -> Result<Vec<ExportJob>, RepositoryError>;

    async fn update(
        &self,
        id: &JobId,
        update: &JobUpdate,
    ) -> Result<Option<ExportJob>, RepositoryError>;

    /// Atomically moves a `pending` job to `processing`. Returns `None` when no
    /// pending job with this id exists.
    async fn claim(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError>;
}
