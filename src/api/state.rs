// src/api/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::language::{AnalysisService, AzureLanguageClient};
use crate::poller::JobPoller;

#[derive(Clone)]
pub struct AppState {
    pub poller: JobPoller,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = AzureLanguageClient::from_config(config.language.clone())?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// State backed by an arbitrary analysis service.
    pub fn with_service(config: &AppConfig, service: Arc<dyn AnalysisService>) -> Self {
        Self {
            poller: JobPoller::new(service, config.poll.clone()),
        }
    }
}
