
pub use test_postgres::TestPostgres;

use mdexport::domain::{ExportJob, ExportTarget, NewExportJob};

pub fn pending_job(markdown: &str, target: ExportTarget) -> ExportJob {
    ExportJob::new(NewExportJob::anonymous(markdown.to_string(), target))
}
