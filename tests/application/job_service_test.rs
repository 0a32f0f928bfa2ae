use std::sync::Arc;

use mdexport::application::ports::JobRepository;
use mdexport::application::services::{
    ClaimOutcome, DEFAULT_PENDING_LIMIT, JobService, MAX_LIMIT, clamp_limit,
};
use mdexport::domain::{ExportTarget, JobId, JobStatus, JobUpdate, NewExportJob};
use mdexport::infrastructure::persistence::InMemoryJobRepository;

fn service() -> (JobService, Arc<InMemoryJobRepository>) {
    let repository = Arc::new(InMemoryJobRepository::new());
    (JobService::new(repository.clone()), repository)
}

fn submission(markdown: &str) -> NewExportJob {
    NewExportJob::anonymous(markdown.to_string(), ExportTarget::Pdf)
}

#[test]
fn given_missing_limit_when_clamping_then_uses_default() {
    assert_eq!(clamp_limit(None, DEFAULT_PENDING_LIMIT), 10);
}

#[test]
fn given_out_of_range_limits_when_clamping_then_bounded_to_one_and_max() {
    assert_eq!(clamp_limit(Some(0), 10), 1);
    assert_eq!(clamp_limit(Some(-5), 10), 1);
    assert_eq!(clamp_limit(Some(1000), 10), MAX_LIMIT);
    assert_eq!(clamp_limit(Some(42), 10), 42);
}

#[tokio::test]
async fn given_submission_when_creating_export_then_job_is_persisted_pending() {
    let (service, repository) = service();

    let job = service.create_export(submission("# Hi")).await.unwrap();

    let stored = repository.get_by_id(&job.id).await.unwrap().unwrap();
    assert_eq!(stored, job);
    assert_eq!(stored.status, JobStatus::Pending);
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_returns_none_and_stores_nothing() {
    let (service, repository) = service();

    let result = service
        .update_job(
            &JobId::from_string("job_0_missing00"),
            JobUpdate {
                status: Some(JobStatus::Completed),
                ..JobUpdate::default()
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn given_empty_update_when_updating_then_returns_job_unchanged() {
    let (service, _) = service();
    let job = service.create_export(submission("# Hi")).await.unwrap();

    let result = service
        .update_job(&job.id, JobUpdate::default())
        .await
        .unwrap();

    assert_eq!(result, Some(job));
}

#[tokio::test]
async fn given_terminal_job_when_status_is_reverted_then_update_is_still_applied() {
    let (service, _) = service();
    let job = service.create_export(submission("# Hi")).await.unwrap();
    let to = |status| JobUpdate {
        status: Some(status),
        ..JobUpdate::default()
    };

    service
        .update_job(&job.id, to(JobStatus::Completed))
        .await
        .unwrap();
    let reverted = service
        .update_job(&job.id, to(JobStatus::Pending))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(reverted.status, JobStatus::Pending);
}

#[tokio::test]
async fn given_pending_job_when_claiming_twice_then_second_claim_is_rejected() {
    let (service, _) = service();
    let job = service.create_export(submission("# Hi")).await.unwrap();

    let first = service.claim_job(&job.id).await.unwrap();
    let second = service.claim_job(&job.id).await.unwrap();

    match first {
        ClaimOutcome::Claimed(claimed) => assert_eq!(claimed.status, JobStatus::Processing),
        other => panic!("expected claim, got {:?}", other),
    }
    match second {
        ClaimOutcome::NotPending(current) => assert_eq!(current.status, JobStatus::Processing),
        other => panic!("expected not pending, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unknown_id_when_claiming_then_not_found() {
    let (service, _) = service();

    let outcome = service
        .claim_job(&JobId::from_string("job_0_missing00"))
        .await
        .unwrap();

    assert!(matches!(outcome, ClaimOutcome::NotFound));
}

#[tokio::test]
async fn given_mixed_jobs_when_listing_pending_then_newest_pending_first() {
    let (service, _) = service();
    let oldest = service.create_export(submission("# 1")).await.unwrap();
    let claimed = service.create_export(submission("# 2")).await.unwrap();
    let newest = service.create_export(submission("# 3")).await.unwrap();
    service.claim_job(&claimed.id).await.unwrap();

    let pending = service.pending_jobs(10).await.unwrap();

    let ids: Vec<_> = pending.iter().map(|j| j.id.clone()).collect();
    assert_eq!(ids, vec![newest.id, oldest.id]);
}
