// src/api/error.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde_json::json;

use crate::errors::SummarizeError;

const BODY_LIMIT_BYTES: usize = 1 << 20;

impl ResponseError for SummarizeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SummarizeError::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SummarizeError::Validation => {
                HttpResponse::BadRequest().json(json!({ "error": self.to_string() }))
            }
            _ => HttpResponse::build(self.status_code()).json(json!({
                "error": "Failed to summarize text",
                "details": self.details(),
            })),
        }
    }
}

/// Body extractor settings: malformed JSON gets the same `{ error }` shape as
/// every other client error. A body that is not declared as JSON carries no
/// text at all.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let response = match err {
                JsonPayloadError::ContentType => SummarizeError::Validation.error_response(),
                _ => HttpResponse::BadRequest().json(json!({
                    "error": "Invalid JSON body",
                    "details": err.to_string(),
                })),
            };
            InternalError::from_response(err, response).into()
        })
}
