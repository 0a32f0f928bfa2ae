use std::sync::Arc;

use crate::application::services::JobService;
use crate::presentation::config::ExportSettings;

/// Shared handler context. Constructed once in `main` (or per test) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<JobService>,
    pub export_settings: Arc<ExportSettings>,
}

impl AppState {
    pub fn new(job_service: Arc<JobService>, export_settings: ExportSettings) -> Self {
        Self {
            job_service,
            export_settings: Arc::new(export_settings),
        }
    }
}
