// src/poller.rs
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::errors::{Result, SummarizeError};
use crate::language::{AnalysisService, JobSnapshot, JobStatus, JobSubmission};

/// How the wait between two status checks grows.
#[derive(Debug, Clone, PartialEq)]
pub enum Backoff {
    /// Always wait `PollPolicy::interval`.
    Fixed,
    /// Multiply the interval by `factor` after every attempt, never waiting
    /// longer than `max_interval`.
    Exponential { factor: f64, max_interval: Duration },
}

/// Knobs of the polling loop. The default reproduces the classic contract:
/// 30 attempts, one second apart.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    pub backoff: Backoff,
    /// Random spread applied to each delay, as a ratio in `[0, 1)`.
    pub jitter: f64,
    /// Extra tries for a status query that failed at the transport level.
    /// Zero means a single network error aborts the job.
    pub transport_retries: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(1),
            backoff: Backoff::Fixed,
            jitter: 0.0,
            transport_retries: 2,
        }
    }
}

impl PollPolicy {
    /// Delay after the `attempt`-th status check (1-based), before jitter.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        match &self.backoff {
            Backoff::Fixed => self.interval,
            Backoff::Exponential {
                factor,
                max_interval,
            } => {
                if self.interval.is_zero() {
                    return Duration::ZERO;
                }
                let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
                let secs = self.interval.as_secs_f64() * factor.powi(exponent);
                Duration::from_secs_f64(secs.min(max_interval.as_secs_f64()))
            }
        }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay(attempt);
        if self.jitter <= 0.0 || base.is_zero() {
            return base;
        }
        let mut rng = rand::thread_rng();
        let spread = rng.gen_range(-self.jitter..=self.jitter);
        Duration::from_secs_f64(base.as_secs_f64() * (1.0 + spread))
    }
}

/// Extracts the job id from a location reference such as
/// `https://host/language/analyze-text/jobs/abc123?api-version=2022-10-01-preview`.
pub fn job_id_from_location(location: &str) -> Option<String> {
    let last_segment = location.rsplit('/').next()?;
    let job_id = last_segment.split('?').next()?.trim();
    if job_id.is_empty() {
        None
    } else {
        Some(job_id.to_string())
    }
}

/// Connection failures and timeouts. Anything the service answered is final.
fn is_retryable(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}

/// Drives a remote asynchronous job from submission to a terminal state.
#[derive(Clone)]
pub struct JobPoller {
    service: Arc<dyn AnalysisService>,
    policy: PollPolicy,
}

impl JobPoller {
    pub fn new(service: Arc<dyn AnalysisService>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Submits `text` for extractive summarization and returns the job handle.
    pub async fn submit(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(SummarizeError::Validation);
        }

        let submission = JobSubmission::extractive_summary(text);
        let location = self.service.create_job(&submission).await?;

        let job_id =
            job_id_from_location(&location).ok_or_else(|| SummarizeError::Submission {
                message: format!("cannot extract a job id from location '{}'", location),
                status: None,
                body: None,
            })?;

        log::info!("Job submitted: {}", job_id);
        Ok(job_id)
    }

    /// Checks the job status up to `max_attempts` times and returns the
    /// snapshot as soon as the job succeeds.
    pub async fn poll(&self, job_id: &str, max_attempts: u32) -> Result<JobSnapshot> {
        for attempt in 1..=max_attempts {
            let snapshot = self.fetch_status(job_id).await?;
            log::debug!(
                "Job {} status: {} (attempt {}/{})",
                job_id,
                snapshot.status,
                attempt,
                max_attempts
            );

            match snapshot.status {
                JobStatus::Succeeded => {
                    log::info!("Job {} succeeded after {} attempt(s)", job_id, attempt);
                    return Ok(snapshot);
                }
                JobStatus::Failed => {
                    log::warn!("Job {} reported failure", job_id);
                    return Err(SummarizeError::JobFailed {
                        job_id: job_id.to_string(),
                        errors: snapshot.errors(),
                    });
                }
                _ => {}
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.delay(attempt)).await;
            }
        }

        log::warn!("Job {} still pending after {} attempts", job_id, max_attempts);
        Err(SummarizeError::PollTimeout {
            job_id: job_id.to_string(),
            attempts: max_attempts,
        })
    }

    /// Submit, then poll with the configured budget.
    pub async fn summarize(&self, text: &str) -> Result<JobSnapshot> {
        let job_id = self.submit(text).await?;
        self.poll(&job_id, self.policy.max_attempts).await
    }

    async fn fetch_status(&self, job_id: &str) -> Result<JobSnapshot> {
        let mut retries = 0;
        loop {
            match self.service.job_status(job_id).await {
                Err(SummarizeError::Transport(e))
                    if is_retryable(&e) && retries < self.policy.transport_retries =>
                {
                    retries += 1;
                    log::warn!(
                        "Status check for job {} failed ({}), retry {}/{}",
                        job_id,
                        e,
                        retries,
                        self.policy.transport_retries
                    );
                    tokio::time::sleep(self.policy.interval).await;
                }
                other => return other,
            }
        }
    }
}
