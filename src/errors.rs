// src/errors.rs
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Text is required")]
    Validation,

    #[error("Job submission failed: {message}")]
    Submission {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("Job {job_id} failed")]
    JobFailed {
        job_id: String,
        errors: Option<Value>,
    },

    #[error("Job polling timeout: job {job_id} still pending after {attempts} attempts")]
    PollTimeout { job_id: String, attempts: u32 },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;

impl SummarizeError {
    /// Payload reported back to API callers alongside the generic error message.
    ///
    /// Prefers whatever the remote service sent us (parsed as JSON when it is
    /// JSON), and falls back to the error's own message.
    pub fn details(&self) -> Value {
        match self {
            SummarizeError::Submission { body: Some(body), .. }
            | SummarizeError::Api { body, .. } => remote_body(body),
            SummarizeError::JobFailed {
                errors: Some(errors),
                ..
            } => errors.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

fn remote_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
