use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use crate::config::RelayConfig;
use crate::error::FetchError;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("review-relay/", env!("CARGO_PKG_VERSION"));

/// Source of review status payloads.
pub trait ReviewSource {
    /// Fetch the raw payload for changes since `from_date` (unix seconds).
    fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}

/// Blocking client for the homework status endpoint.
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &RelayConfig) -> Result<Self, FetchError> {
        let http = create_http_client(config.request_timeout).map_err(FetchError::Transport)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.credentials.practicum_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build an HTTP client with bounded connect and request timeouts.
pub(crate) fn create_http_client(request_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .user_agent(USER_AGENT)
        .build()
}

impl ReviewSource for PracticumClient {
    fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "requesting review statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(FetchError::Transport)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
