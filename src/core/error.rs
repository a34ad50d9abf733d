//! # Error Types
//!
//! Typed failures for each collaborator so the binary can decide which ones
//! end the run and which ones are only logged.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use thiserror::Error;

use super::config::REQUIRED_VARS;

/// Required process configuration is missing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Missing one or more environment variables ({}); not set: {}",
    REQUIRED_VARS.join(", "),
    .missing.join(", ")
)]
pub struct ConfigError {
    pub missing: Vec<&'static str>,
}

/// Failure querying the record source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to record source failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("record source returned an unreadable body: {0}")]
    Decode(String),
}

/// Failure posting a notification.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request to notification sink failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

impl DeliveryError {
    /// Short error code suitable for a single log line.
    pub fn code(&self) -> String {
        match self {
            DeliveryError::Http(e) => e
                .status()
                .map(|s| format!("http_{}", s.as_u16()))
                .unwrap_or_else(|| "transport_error".to_string()),
            DeliveryError::Api(code) => code.clone(),
        }
    }

    /// Code plus transport detail, for the delivery failure log line.
    pub fn describe(&self) -> String {
        match self {
            DeliveryError::Http(e) => format!("{}: {e}", self.code()),
            DeliveryError::Api(code) => code.clone(),
        }
    }
}

/// A milestone date is present but is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("time data '{value}' does not match format '%Y-%m-%d': {reason}")]
pub struct DateParseError {
    pub value: String,
    pub reason: String,
}

/// Anything that ends a reminder run early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Notion API Error: {0}")]
    Source(#[from] SourceError),
    #[error("invalid milestone date in record {record_id}")]
    DateParse {
        record_id: String,
        #[source]
        source: DateParseError,
    },
}
