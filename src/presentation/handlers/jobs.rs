use std::num::IntErrorKind;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use super::responses::{
    JobListResponse, JobResponse, bad_request, conflict, internal_error, not_found,
};
use crate::application::services::{
    ClaimOutcome, DEFAULT_LIST_LIMIT, DEFAULT_PENDING_LIMIT, clamp_limit,
};
use crate::domain::JobId;
use crate::presentation::state::AppState;
use crate::presentation::validation::{ValidationError, validate_job_update};

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    limit: Option<String>,
}

impl LimitQuery {
    /// Non-numeric limits fall back to the default instead of failing the request.
    fn resolve(&self, default: usize) -> usize {
        let requested = self.limit.as_deref().and_then(parse_limit);
        clamp_limit(requested, default)
    }
}

/// Numbers too large for `i64` saturate so they still clamp to the nearest bound.
fn parse_limit(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_job_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.job_service.get_job(&JobId::from_string(id)).await {
        Ok(Some(job)) => Json(JobResponse::from(job)).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Response {
    match state
        .job_service
        .list_jobs(query.resolve(DEFAULT_LIST_LIMIT))
        .await
    {
        Ok(jobs) => Json(JobListResponse::new(jobs)).into_response(),
        Err(e) => internal_error(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn pending_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Response {
    match state
        .job_service
        .pending_jobs(query.resolve(DEFAULT_PENDING_LIMIT))
        .await
    {
        Ok(jobs) => Json(JobListResponse::new(jobs)).into_response(),
        Err(e) => internal_error(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn update_job_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(ValidationError::body(rejection.body_text())),
    };

    let update = match validate_job_update(&body) {
        Ok(update) => update,
        Err(e) => return bad_request(e),
    };

    match state
        .job_service
        .update_job(&JobId::from_string(id), update)
        .await
    {
        Ok(Some(job)) => Json(JobResponse::from(job)).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn claim_job_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.job_service.claim_job(&JobId::from_string(id)).await {
        Ok(ClaimOutcome::Claimed(job)) => Json(JobResponse::from(job)).into_response(),
        Ok(ClaimOutcome::NotPending(job)) => {
            conflict(format!("Job is not pending (status: {})", job.status))
        }
        Ok(ClaimOutcome::NotFound) => not_found(),
        Err(e) => internal_error(e),
    }
}
