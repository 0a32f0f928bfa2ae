use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use super::responses::{bad_request, internal_error};
use crate::presentation::state::AppState;
use crate::presentation::validation::{ValidationError, validate_create_export};

#[derive(Serialize)]
pub struct CreateExportResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

/// `POST /api/export`. Answers 200 rather than 201; web clients depend on it.
#[tracing::instrument(skip(state, body))]
pub async fn create_export_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(ValidationError::body(rejection.body_text())),
    };

    let input = match validate_create_export(&body, &state.export_settings) {
        Ok(input) => input,
        Err(e) => return bad_request(e),
    };

    match state.job_service.create_export(input).await {
        Ok(job) => (
            StatusCode::OK,
            Json(CreateExportResponse {
                job_id: job.id.to_string(),
                status: job.status.as_str().to_string(),
                message: "Job created successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}
