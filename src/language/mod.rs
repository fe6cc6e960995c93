// src/language/mod.rs

use async_trait::async_trait;

use crate::errors::Result;

pub mod azure;
pub mod models;

pub use azure::AzureLanguageClient;
pub use models::{JobSnapshot, JobStatus, JobSubmission};

/// The remote side of an asynchronous text-analysis job.
///
/// Implementations only move bytes: they create a job and report its status.
/// Interpreting the location reference and deciding when to stop polling is
/// the job poller's business.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Creates a job and returns the raw location reference the service
    /// answered with (the `operation-location` header for Azure).
    async fn create_job(&self, submission: &JobSubmission) -> Result<String>;

    /// Fetches the current status snapshot of a job.
    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot>;
}
