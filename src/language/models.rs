// src/language/models.rs
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::{Result, SummarizeError};

pub const DISPLAY_NAME: &str = "Text Summarization Task";
pub const DOCUMENT_ID: &str = "1";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const SENTENCE_COUNT: u32 = 3;

/// Request body for `POST /language/analyze-text/jobs`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobSubmission {
    pub display_name: String,
    pub analysis_input: AnalysisInput,
    pub tasks: Vec<Task>,
}

#[derive(Serialize, Debug, Clone)]
pub struct AnalysisInput {
    pub documents: Vec<Document>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Document {
    pub id: String,
    pub language: String,
    pub text: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Task {
    pub kind: String,
    pub parameters: TaskParameters,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskParameters {
    pub sentence_count: u32,
}

impl JobSubmission {
    /// A single-document extractive summarization job.
    pub fn extractive_summary(text: &str) -> Self {
        Self {
            display_name: DISPLAY_NAME.to_string(),
            analysis_input: AnalysisInput {
                documents: vec![Document {
                    id: DOCUMENT_ID.to_string(),
                    language: DEFAULT_LANGUAGE.to_string(),
                    text: text.to_string(),
                }],
            },
            tasks: vec![Task {
                kind: "ExtractiveSummarization".to_string(),
                parameters: TaskParameters {
                    sentence_count: SENTENCE_COUNT,
                },
            }],
        }
    }
}

/// Job status as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Cancelling,
    Cancelled,
    PartiallyCompleted,
    Other(String),
}

impl JobStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "notStarted" => JobStatus::NotStarted,
            "running" => JobStatus::Running,
            "succeeded" => JobStatus::Succeeded,
            "failed" => JobStatus::Failed,
            "cancelling" => JobStatus::Cancelling,
            "cancelled" => JobStatus::Cancelled,
            "partiallyCompleted" => JobStatus::PartiallyCompleted,
            other => JobStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::NotStarted => "notStarted",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
            JobStatus::Cancelling => "cancelling",
            JobStatus::Cancelled => "cancelled",
            JobStatus::PartiallyCompleted => "partiallyCompleted",
            JobStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer to a status query. Serializes back to exactly the body the
/// service sent, so callers see results untouched.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub body: Value,
}

impl JobSnapshot {
    pub fn from_value(body: Value) -> Result<Self> {
        let status = body
            .get("status")
            .and_then(|s| s.as_str())
            .map(JobStatus::parse)
            .ok_or_else(|| SummarizeError::UnexpectedResponse(body.to_string()))?;
        Ok(Self { status, body })
    }

    /// The `errors` array the service attaches to failed jobs, if any.
    pub fn errors(&self) -> Option<Value> {
        self.body
            .get("errors")
            .filter(|e| !e.is_null())
            .cloned()
    }
}

impl Serialize for JobSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_wire_format() {
        let submission = JobSubmission::extractive_summary("Hello world. This is a test.");
        let body = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            body,
            json!({
                "displayName": "Text Summarization Task",
                "analysisInput": {
                    "documents": [
                        {"id": "1", "language": "en", "text": "Hello world. This is a test."}
                    ]
                },
                "tasks": [
                    {"kind": "ExtractiveSummarization", "parameters": {"sentenceCount": 3}}
                ]
            })
        );
    }

    #[test]
    fn test_snapshot_keeps_body_verbatim() {
        let body = json!({
            "jobId": "abc123",
            "status": "succeeded",
            "tasks": {"completed": 1, "items": []}
        });
        let snapshot = JobSnapshot::from_value(body.clone()).unwrap();

        assert_eq!(snapshot.status, JobStatus::Succeeded);
        assert_eq!(serde_json::to_value(&snapshot).unwrap(), body);
    }

    #[test]
    fn test_snapshot_without_status_is_rejected() {
        let err = JobSnapshot::from_value(json!({"jobId": "abc123"})).unwrap_err();
        assert!(matches!(err, SummarizeError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = JobStatus::parse("paused");
        assert_eq!(status, JobStatus::Other("paused".to_string()));
        assert_eq!(status.to_string(), "paused");
        assert_eq!(JobStatus::parse("notStarted").as_str(), "notStarted");
    }

    #[test]
    fn test_errors_payload() {
        let failed = JobSnapshot::from_value(json!({
            "status": "failed",
            "errors": [{"code": "InvalidRequest"}]
        }))
        .unwrap();
        assert_eq!(failed.errors(), Some(json!([{"code": "InvalidRequest"}])));

        let running = JobSnapshot::from_value(json!({"status": "running", "errors": null})).unwrap();
        assert_eq!(running.errors(), None);
    }
}
