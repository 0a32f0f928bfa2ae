use chrono::{TimeZone, Utc};
use mdexport::domain::{
    ANONYMOUS_USER_ID, ExportJob, ExportTarget, GENERIC_TEMPLATE_ID, JobStatus, JobUpdate,
    NewExportJob,
};

#[test]
fn given_anonymous_submission_when_creating_job_then_server_fields_are_defaulted() {
    let before = Utc::now();
    let job = ExportJob::new(NewExportJob::anonymous("# Hi".to_string(), ExportTarget::Pdf));

    assert_eq!(job.user_id, ANONYMOUS_USER_ID);
    assert_eq!(job.template_id, GENERIC_TEMPLATE_ID);
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.markdown, "# Hi");
    assert_eq!(job.target, ExportTarget::Pdf);
    assert!(job.artifact_url.is_none());
    assert!(job.error.is_none());
    assert!(job.completed_at.is_none());
    assert!(job.created_at >= before);
}

#[test]
fn given_template_when_creating_job_then_template_is_kept() {
    let input = NewExportJob::anonymous("# Report".to_string(), ExportTarget::Email)
        .with_template("report".to_string());

    assert_eq!(ExportJob::new(input).template_id, "report");
}

#[test]
fn given_partial_update_when_applying_then_only_present_fields_change() {
    let mut job = ExportJob::new(NewExportJob::anonymous("# Hi".to_string(), ExportTarget::Pdf));
    let created_at = job.created_at;

    job.apply(&JobUpdate {
        status: Some(JobStatus::Failed),
        error: Some("render timeout".to_string()),
        ..JobUpdate::default()
    });

    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.error.as_deref(), Some("render timeout"));
    assert!(job.artifact_url.is_none());
    assert!(job.completed_at.is_none());
    assert_eq!(job.created_at, created_at);
}

#[test]
fn given_completion_update_when_applying_then_artifact_and_timestamp_are_set() {
    let mut job = ExportJob::new(NewExportJob::anonymous("# Hi".to_string(), ExportTarget::Pdf));
    let completed_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    job.apply(&JobUpdate {
        status: Some(JobStatus::Completed),
        artifact_url: Some("https://example/out.pdf".to_string()),
        completed_at: Some(completed_at),
        ..JobUpdate::default()
    });

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.artifact_url.as_deref(), Some("https://example/out.pdf"));
    assert_eq!(job.completed_at, Some(completed_at));
}

#[test]
fn given_default_update_when_checking_then_is_empty() {
    assert!(JobUpdate::default().is_empty());
    assert!(
        !JobUpdate {
            error: Some("x".to_string()),
            ..JobUpdate::default()
        }
        .is_empty()
    );
}
