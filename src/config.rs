//! Relay configuration, read once from the process environment.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
pub const TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
pub const RETRY_TIME_SECS: &str = "RETRY_TIME_SECS";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_TIME: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three secrets the relay cannot run without.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Reject startup when any credential is empty or whitespace.
    pub fn check(&self) -> Result<(), ConfigError> {
        let fields = [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingCredential(name));
            }
        }
        Ok(())
    }
}

// Tokens must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Immutable configuration passed into the client, notifier and loop.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_time: Duration,
    pub request_timeout: Duration,
}

impl RelayConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials {
            practicum_token: lookup(PRACTICUM_TOKEN).unwrap_or_default(),
            telegram_token: lookup(TELEGRAM_TOKEN).unwrap_or_default(),
            telegram_chat_id: lookup(TELEGRAM_CHAT_ID).unwrap_or_default(),
        };
        credentials.check()?;

        let endpoint = non_empty(lookup(PRACTICUM_ENDPOINT));
        let telegram_api_url = match non_empty(lookup(TELEGRAM_API_URL)) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => DEFAULT_TELEGRAM_API_URL.to_string(),
        };
        let retry_time = parse_secs(RETRY_TIME_SECS, lookup(RETRY_TIME_SECS))?;
        let request_timeout = parse_secs(REQUEST_TIMEOUT_SECS, lookup(REQUEST_TIMEOUT_SECS))?;

        Ok(Self {
            credentials,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url,
            retry_time: retry_time.unwrap_or(DEFAULT_RETRY_TIME),
            request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_secs(name: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    let reason = match raw.parse::<u64>() {
        Ok(0) => "must be greater than zero".to_string(),
        Ok(secs) => return Ok(Some(Duration::from_secs(secs))),
        Err(e) => e.to_string(),
    };
    Err(ConfigError::InvalidValue {
        name,
        value: raw,
        reason,
    })
}
