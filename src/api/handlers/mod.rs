// src/api/handlers/mod.rs
mod health;
mod summarize;

pub use health::health_check;
pub use summarize::{summarize, SummarizeRequest, SummarizeResponse};
