// src/language/azure.rs

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::LanguageConfig;
use crate::errors::{Result, SummarizeError};
use crate::language::{AnalysisService, JobSnapshot, JobSubmission};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "operation-location";

/// A client for the Azure AI Language `analyze-text` job API.
pub struct AzureLanguageClient {
    client: Client,
    config: LanguageConfig,
}

impl AzureLanguageClient {
    /// Creates a new `AzureLanguageClient`.
    pub fn new(client: Client, config: LanguageConfig) -> Self {
        Self { client, config }
    }

    /// Builds a client with its own connection pool and the configured
    /// request timeout.
    pub fn from_config(config: LanguageConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::new(client, config))
    }

    fn jobs_url(&self) -> String {
        format!("{}/language/analyze-text/jobs", self.config.endpoint)
    }

    fn job_url(&self, job_id: &str) -> String {
        format!("{}/{}", self.jobs_url(), job_id)
    }
}

async fn error_body(resp: Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "Could not read error body".to_string())
}

#[async_trait]
impl AnalysisService for AzureLanguageClient {
    async fn create_job(&self, submission: &JobSubmission) -> Result<String> {
        let url = self.jobs_url();
        log::debug!("Submitting analysis job to {}", url);

        let resp = self
            .client
            .post(&url)
            .query(&[("api-version", self.config.api_version.as_str())])
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = resp.status();
        log::debug!("Job submission response status: {}", status);

        if !status.is_success() {
            return Err(SummarizeError::Submission {
                message: format!("service rejected the job with status {}", status.as_u16()),
                status: Some(status.as_u16()),
                body: Some(error_body(resp).await),
            });
        }

        let location = resp
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .ok_or_else(|| SummarizeError::Submission {
                message: "response is missing the operation-location header".to_string(),
                status: Some(status.as_u16()),
                body: None,
            })?
            .to_str()
            .map_err(|_| SummarizeError::Submission {
                message: "operation-location header is not valid text".to_string(),
                status: Some(status.as_u16()),
                body: None,
            })?;

        Ok(location.to_string())
    }

    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot> {
        let resp = self
            .client
            .get(self.job_url(job_id))
            .query(&[("api-version", self.config.api_version.as_str())])
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                body: error_body(resp).await,
            });
        }

        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| SummarizeError::UnexpectedResponse(text.clone()))?;
        JobSnapshot::from_value(body)
    }
}
