use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{ExportJob, ExportTarget, JobId, JobStatus, JobUpdate};

const JOB_COLUMNS: &str = "id, user_id, markdown, target, template_id, status, artifact_url, error, created_at, completed_at";

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ExportJobRow {
    id: String,
    user_id: String,
    markdown: String,
    target: String,
    template_id: String,
    status: String,
    artifact_url: Option<String>,
    error: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExportJobRow {
    fn into_job(self) -> Result<ExportJob, RepositoryError> {
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            id: self.id.clone(),
            reason,
        };
        let target = self.target.parse::<ExportTarget>().map_err(corrupt)?;
        let status = self.status.parse::<JobStatus>().map_err(corrupt)?;

        Ok(ExportJob {
            id: JobId::from_string(self.id),
            user_id: self.user_id,
            markdown: self.markdown,
            target,
            template_id: self.template_id,
            status,
            artifact_url: self.artifact_url,
            error: self.error,
            created_at: self.created_at,
            completed_at: self.completed_at,
        })
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn into_jobs(rows: Vec<ExportJobRow>) -> Result<Vec<ExportJob>, RepositoryError> {
    rows.into_iter().map(ExportJobRow::into_job).collect()
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &ExportJob) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO export_jobs (id, user_id, markdown, target, template_id, status, artifact_url, error, created_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(job.id.as_str())
        .bind(job.user_id.as_str())
        .bind(job.markdown.as_str())
        .bind(job.target.as_str())
        .bind(job.template_id.as_str())
        .bind(job.status.as_str())
        .bind(job.artifact_url.as_deref())
        .bind(job.error.as_deref())
        .bind(job.created_at)
        .bind(job.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::DuplicateId(job.id.to_string())
            }
            other => query_failed(other),
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn get_by_id(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError> {
        let row: Option<ExportJobRow> = sqlx::query_as(&format!(
            "SELECT {JOB_COLUMNS} FROM export_jobs WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.map(ExportJobRow::into_job).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: usize) -> Result<Vec<ExportJob>, RepositoryError> {
        let rows: Vec<ExportJobRow> = sqlx::query_as(&format!(
            "SELECT {JOB_COLUMNS} FROM export_jobs ORDER BY created_at DESC, seq DESC LIMIT $1"
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        into_jobs(rows)
    }

    #[instrument(skip(self), fields(status = %status))]
    async fn list_by_status(
        &self,
        status: JobStatus,
        limit: usize,
    ) -> Result<Vec<ExportJob>, RepositoryError> {
        let rows: Vec<ExportJobRow> = sqlx::query_as(&format!(
            "SELECT {JOB_COLUMNS} FROM export_jobs WHERE status = $1 ORDER BY created_at DESC, seq DESC LIMIT $2"
        ))
        .bind(status.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        into_jobs(rows)
    }

    #[instrument(skip(self, update), fields(job_id = %id, status = ?update.status))]
    async fn update(
        &self,
        id: &JobId,
        update: &JobUpdate,
    ) -> Result<Option<ExportJob>, RepositoryError> {
        let row: Option<ExportJobRow> = sqlx::query_as(&format!(
            r#"
            UPDATE export_jobs
            SET status = COALESCE($2, status),
                artifact_url = COALESCE($3, artifact_url),
                error = COALESCE($4, error),
                completed_at = COALESCE($5, completed_at)
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id.as_str())
        .bind(update.status.map(|s| s.as_str()))
        .bind(update.artifact_url.as_deref())
        .bind(update.error.as_deref())
        .bind(update.completed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.map(ExportJobRow::into_job).transpose()
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn claim(&self, id: &JobId) -> Result<Option<ExportJob>, RepositoryError> {
        let row: Option<ExportJobRow> = sqlx::query_as(&format!(
            r#"
            UPDATE export_jobs
            SET status = $2
            WHERE id = $1 AND status = $3
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id.as_str())
        .bind(JobStatus::Processing.as_str())
        .bind(JobStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.map(ExportJobRow::into_job).transpose()
    }
}
