use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::RepositoryError;
use crate::domain::ExportJob;
use crate::presentation::validation::ValidationError;

/// Wire form of an export job. Unset optionals serialise as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub user_id: String,
    pub markdown: String,
    pub target: String,
    pub template_id: String,
    pub status: String,
    pub artifact_url: Option<String>,
    pub error: Option<String>,
    pub created_at: String,
    pub completed_at: Option<String>,
}

impl From<ExportJob> for JobResponse {
    fn from(job: ExportJob) -> Self {
        Self {
            id: job.id.to_string(),
            user_id: job.user_id,
            markdown: job.markdown,
            target: job.target.as_str().to_string(),
            template_id: job.template_id,
            status: job.status.as_str().to_string(),
            artifact_url: job.artifact_url,
            error: job.error,
            created_at: job.created_at.to_rfc3339(),
            completed_at: job.completed_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
}

impl JobListResponse {
    pub fn new(jobs: Vec<ExportJob>) -> Self {
        Self {
            jobs: jobs.into_iter().map(JobResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub fn bad_request(error: ValidationError) -> Response {
    tracing::debug!(field = ?error.field, message = %error.message, "Request validation failed");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: error.message,
            field: error.field,
        }),
    )
        .into_response()
}

pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "Job not found".to_string(),
            field: None,
        }),
    )
        .into_response()
}

pub fn conflict(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse {
            message: message.into(),
            field: None,
        }),
    )
        .into_response()
}

/// Logs the cause; the client only ever sees a generic message.
pub fn internal_error(error: RepositoryError) -> Response {
    tracing::error!(error = %error, "Job store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: "Internal server error".to_string(),
            field: None,
        }),
    )
        .into_response()
}
