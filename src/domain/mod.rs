mod export_job;
mod export_target;
mod job_id;
mod job_status;
mod job_update;

pub use export_job::{ANONYMOUS_USER_ID, ExportJob, GENERIC_TEMPLATE_ID, NewExportJob};
pub use export_target::ExportTarget;
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use job_update::JobUpdate;
