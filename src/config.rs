// src/config.rs
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{Result, SummarizeError};
use crate::poller::{Backoff, PollPolicy};

pub const DEFAULT_API_VERSION: &str = "2022-10-01-preview";
pub const DEFAULT_PORT: u16 = 3000;

/// Connection settings for the Azure AI Language service.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub request_timeout: Duration,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub language: LanguageConfig,
    pub port: u16,
    pub poll: PollPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// The endpoint and key have no fallback and must be present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = required(&lookup, "AZURE_LANGUAGE_ENDPOINT")?
            .trim_end_matches('/')
            .to_string();
        let api_key = required(&lookup, "AZURE_LANGUAGE_KEY")?;
        let api_version = lookup("AZURE_LANGUAGE_API_VERSION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let timeout_secs: u64 = parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(SummarizeError::Config(
                "HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let language = LanguageConfig {
            endpoint,
            api_key,
            api_version,
            request_timeout: Duration::from_secs(timeout_secs),
        };

        Ok(AppConfig {
            language,
            port,
            poll: poll_policy(&lookup)?,
        })
    }
}

fn poll_policy<F>(lookup: &F) -> Result<PollPolicy>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = PollPolicy::default();

    let max_attempts: u32 = parse_or(lookup, "POLL_MAX_ATTEMPTS", defaults.max_attempts)?;
    if max_attempts == 0 {
        return Err(SummarizeError::Config(
            "POLL_MAX_ATTEMPTS must be at least 1".to_string(),
        ));
    }

    let interval_ms: u64 = parse_or(lookup, "POLL_INTERVAL_MS", 1000)?;

    let backoff = match lookup("POLL_BACKOFF").as_deref().map(str::trim) {
        None | Some("") | Some("fixed") => Backoff::Fixed,
        Some("exponential") => {
            let factor: f64 = parse_or(lookup, "POLL_BACKOFF_FACTOR", 2.0)?;
            if !factor.is_finite() || factor < 1.0 {
                return Err(SummarizeError::Config(
                    "POLL_BACKOFF_FACTOR must be a number >= 1.0".to_string(),
                ));
            }
            let max_ms: u64 = parse_or(lookup, "POLL_MAX_INTERVAL_MS", 30_000)?;
            Backoff::Exponential {
                factor,
                max_interval: Duration::from_millis(max_ms),
            }
        }
        Some(other) => {
            return Err(SummarizeError::Config(format!(
                "POLL_BACKOFF must be 'fixed' or 'exponential', got '{}'",
                other
            )));
        }
    };

    let jitter: f64 = parse_or(lookup, "POLL_JITTER", defaults.jitter)?;
    if !(0.0..1.0).contains(&jitter) {
        return Err(SummarizeError::Config(
            "POLL_JITTER must be in the range [0, 1)".to_string(),
        ));
    }

    let transport_retries: u32 =
        parse_or(lookup, "POLL_TRANSPORT_RETRIES", defaults.transport_retries)?;

    Ok(PollPolicy {
        max_attempts,
        interval: Duration::from_millis(interval_ms),
        backoff,
        jitter,
        transport_retries,
    })
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SummarizeError::Config(format!("{} must be set", key)))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
            SummarizeError::Config(format!("{} has an invalid value: '{}'", key, raw))
        }),
        _ => Ok(default),
    }
}
