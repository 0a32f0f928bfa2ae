use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExportApi, ExportApiError, JobSnapshot, SubmittedExport};
use crate::domain::ExportTarget;

/// reqwest adapter for the export HTTP API.
pub struct HttpExportClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateExportBody<'a> {
    markdown: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpExportClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn rejection(response: reqwest::Response) -> ExportApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    ExportApiError::Rejected { status, message }
}

#[async_trait]
impl ExportApi for HttpExportClient {
    async fn submit(
        &self,
        markdown: &str,
        target: ExportTarget,
    ) -> Result<SubmittedExport, ExportApiError> {
        let response = self
            .client
            .post(self.url("/api/export"))
            .json(&CreateExportBody {
                markdown,
                target: target.as_str(),
            })
            .send()
            .await
            .map_err(|e| ExportApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ExportApiError::InvalidResponse(e.to_string()))
    }

    async fn fetch_job(&self, job_id: &str) -> Result<Option<JobSnapshot>, ExportApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/jobs/{}", job_id)))
            .send()
            .await
            .map_err(|e| ExportApiError::RequestFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| ExportApiError::InvalidResponse(e.to_string()))
    }
}
