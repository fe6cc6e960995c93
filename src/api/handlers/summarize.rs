// src/api/handlers/summarize.rs
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::api::AppState;
use crate::errors::SummarizeError;
use crate::language::JobSnapshot;

#[derive(Clone, Deserialize)]
pub struct SummarizeRequest {
    /// Kept loose so a non-string `text` is a missing-text error, not a
    /// body parse error.
    #[serde(default)]
    pub text: Option<Value>,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub data: JobSnapshot,
}

pub async fn summarize(
    state: web::Data<AppState>,
    req: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, SummarizeError> {
    let request_id = Uuid::new_v4();

    let text = match req.into_inner().text {
        Some(Value::String(text)) if !text.trim().is_empty() => text,
        _ => return Err(SummarizeError::Validation),
    };

    log::info!("[{}] Summarizing {} characters", request_id, text.chars().count());

    match state.poller.summarize(&text).await {
        Ok(snapshot) => {
            log::info!("[{}] Summary ready", request_id);
            Ok(HttpResponse::Ok().json(SummarizeResponse {
                success: true,
                data: snapshot,
            }))
        }
        Err(e) => {
            log::error!("[{}] Error: {}", request_id, e);
            Err(e)
        }
    }
}
