use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::application::ports::{ExportApi, ExportApiError, JobSnapshot};
use crate::domain::{ExportTarget, JobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Ready { artifact_url: Option<String> },
    Failed { error: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Api(#[from] ExportApiError),
    #[error("job disappeared while polling: {0}")]
    JobNotFound(String),
}

/// Submits an export and polls its status at a fixed interval until it is terminal.
pub struct JobPoller<A: ?Sized> {
    api: Arc<A>,
    poll_interval: Duration,
}

impl<A> JobPoller<A>
where
    A: ExportApi + ?Sized,
{
    pub fn new(api: Arc<A>, poll_interval: Duration) -> Self {
        Self { api, poll_interval }
    }

    pub async fn submit_and_wait(
        &self,
        markdown: &str,
        target: ExportTarget,
    ) -> Result<PollOutcome, PollError> {
        let submitted = self.api.submit(markdown, target).await?;
        tracing::info!(job_id = %submitted.job_id, status = %submitted.status, "Export submitted");
        self.wait_for(&submitted.job_id).await
    }

    /// Polls until the job reaches `completed` or `failed`. The first poll is immediate.
    /// A fetch slower than the interval pushes later polls back instead of bunching them.
    pub async fn wait_for(&self, job_id: &str) -> Result<PollOutcome, PollError> {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let snapshot = self
                .api
                .fetch_job(job_id)
                .await?
                .ok_or_else(|| PollError::JobNotFound(job_id.to_string()))?;

            tracing::debug!(job_id, status = %snapshot.status, "Polled export job");

            if let Some(outcome) = outcome_of(snapshot) {
                return Ok(outcome);
            }
        }
    }
}

fn outcome_of(snapshot: JobSnapshot) -> Option<PollOutcome> {
    match snapshot.status()? {
        JobStatus::Completed => Some(PollOutcome::Ready {
            artifact_url: snapshot.artifact_url,
        }),
        JobStatus::Failed => Some(PollOutcome::Failed {
            error: snapshot.error,
        }),
        JobStatus::Pending | JobStatus::Processing => None,
    }
}
