use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mdexport::application::ports::{ExportApi, ExportApiError};
use mdexport::application::services::{JobPoller, PollOutcome};
use mdexport::domain::ExportTarget;
use mdexport::infrastructure::client::HttpExportClient;

fn job_body(status: &str, artifact_url: Option<&str>) -> serde_json::Value {
    json!({
        "id": "job_1_abcdefghi",
        "userId": "anonymous",
        "markdown": "# Hi",
        "target": "pdf",
        "templateId": "generic",
        "status": status,
        "artifactUrl": artifact_url,
        "error": null,
        "createdAt": "2024-01-01T00:00:00+00:00",
        "completedAt": null
    })
}

#[tokio::test]
async fn given_valid_submission_when_submitting_then_returns_job_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/export"))
        .and(body_json(json!({"markdown": "# Hi", "target": "pdf"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job_1_abcdefghi",
            "status": "pending",
            "message": "Job created successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpExportClient::new(server.uri());
    let submitted = client.submit("# Hi", ExportTarget::Pdf).await.unwrap();

    assert_eq!(submitted.job_id, "job_1_abcdefghi");
    assert_eq!(submitted.status, "pending");
}

#[tokio::test]
async fn given_validation_failure_when_submitting_then_returns_rejected_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/export"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "Required", "field": "markdown"})),
        )
        .mount(&server)
        .await;

    let client = HttpExportClient::new(server.uri());
    let result = client.submit("", ExportTarget::Pdf).await;

    match result {
        Err(ExportApiError::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Required");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unknown_job_when_fetching_then_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/job_0_missing00"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Job not found"})))
        .mount(&server)
        .await;

    let client = HttpExportClient::new(server.uri());

    assert!(client.fetch_job("job_0_missing00").await.unwrap().is_none());
}

#[tokio::test]
async fn given_trailing_slash_base_url_when_fetching_then_path_is_joined_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/job_1_abcdefghi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body("processing", None)))
        .mount(&server)
        .await;

    let client = HttpExportClient::new(format!("{}/", server.uri()));
    let job = client.fetch_job("job_1_abcdefghi").await.unwrap().unwrap();

    assert_eq!(job.status, "processing");
    assert!(!job.is_terminal());
}

#[tokio::test]
async fn given_server_that_completes_job_when_polling_over_http_then_returns_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/export"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job_1_abcdefghi",
            "status": "pending",
            "message": "Job created successfully"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/job_1_abcdefghi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body("pending", None)))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/job_1_abcdefghi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_body("completed", Some("https://example/out.pdf"))),
        )
        .mount(&server)
        .await;

    let client = Arc::new(HttpExportClient::new(server.uri()));
    let poller = JobPoller::new(client, Duration::from_millis(10));

    let outcome = poller
        .submit_and_wait("# Hi", ExportTarget::Pdf)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PollOutcome::Ready {
            artifact_url: Some("https://example/out.pdf".to_string())
        }
    );
}
