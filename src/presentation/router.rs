use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    claim_job_handler, create_export_handler, get_job_handler, health_handler, list_jobs_handler,
    pending_jobs_handler, update_job_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/export", post(create_export_handler))
        .route("/api/jobs", get(list_jobs_handler))
        .route("/api/jobs/pending", get(pending_jobs_handler))
        .route(
            "/api/jobs/{id}",
            get(get_job_handler).patch(update_job_handler),
        )
        .route("/api/jobs/{id}/claim", post(claim_job_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
