mod export_api;
mod job_repository;
mod repository_error;

pub use export_api::{ExportApi, ExportApiError, JobSnapshot, SubmittedExport};
pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
