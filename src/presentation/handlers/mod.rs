mod export;
mod health;
mod jobs;
mod responses;

pub use export::{CreateExportResponse, create_export_handler};
pub use health::health_handler;
pub use jobs::{
    claim_job_handler, get_job_handler, list_jobs_handler, pending_jobs_handler,
    update_job_handler,
};
pub use responses::{ErrorResponse, JobListResponse, JobResponse};
