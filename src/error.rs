//! Error types for each stage of the relay pipeline.
//!
//! Only [`ConfigError`] is fatal. Everything produced inside a poll cycle is
//! collected into [`CycleError`] and handled at the loop boundary.

use thiserror::Error;

/// Startup configuration problems. The process must not enter the loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingCredential(&'static str),
    #[error("environment variable {name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures while requesting the review API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to review API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("review API returned HTTP {status}")]
    Upstream { status: u16 },
    #[error("review API body is not valid JSON: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status carried by an upstream failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

/// Payload or submission record does not have the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unexpected payload shape: {0}")]
    Shape(String),
    #[error("missing key {0:?}")]
    MissingKey(&'static str),
    #[error("unknown review status {0:?}")]
    UnknownStatus(String),
}

/// Delivery to the chat failed. Logged, never escalated.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("sendMessage request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("sendMessage rejected: {0}")]
    Rejected(String),
}

/// Anything that aborts a single poll cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
