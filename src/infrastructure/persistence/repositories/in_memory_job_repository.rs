use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{ExportJob, JobId, JobStatus, JobUpdate};

/// Process-local job store. Jobs are kept in insertion order so that equal
/// `created_at` values still list newest-first.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<Vec<ExportJob>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

fn newest_first<'a>(
    jobs: impl DoubleEndedIterator<Item = &'a ExportJob>,
    limit: usize,
) -> Vec<ExportJob> {
    let mut selected: Vec<&ExportJob> = jobs.rev().collect();
    // stable: ties keep reverse insertion order
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected.into_iter().take(limit).cloned().collect()
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &ExportJob) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        if jobs.iter().any(|j| j.id == job.id) {
            return Err(RepositoryError::DuplicateId(job.id.to_string()));
        }
        jobs.push(job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError> {
        Ok(self.jobs.read().await.iter().find(|j| &j.id == id).cloned())
    }

    async fn list(&self, limit: usize) -> Result<Vec<ExportJob>, RepositoryError> {
        Ok(newest_first(self.jobs.read().await.iter(), limit))
    }

    async fn list_by_status(
        &self,
        status: JobStatus,
        limit: usize,
    ) -> Result<Vec<ExportJob>, RepositoryError> {
        let jobs = self.jobs.read().await;
        Ok(newest_first(jobs.iter().filter(|j| j.status == status), limit))
    }

    async fn update(
        &self,
        id: &JobId,
        update: &JobUpdate,
    ) -> Result<Option<ExportJob>, RepositoryError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|j| &j.id == id).map(|job| {
            job.apply(update);
            job.clone()
        }))
    }

    async fn claim(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs
            .iter_mut()
            .find(|j| &j.id == id && j.status == JobStatus::Pending)
            .map(|job| {
                job.status = JobStatus::Processing;
                job.clone()
            }))
    }
}
