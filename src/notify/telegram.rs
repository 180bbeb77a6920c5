//! Telegram Bot API transport.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::Messenger;
use crate::api::client::create_http_client;
use crate::config::RelayConfig;
use crate::error::NotifyError;

/// Telegram rejects longer message texts.
pub const MAX_MESSAGE_CHARS: usize = 4096;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends messages to a single chat through a bot.
pub struct TelegramNotifier {
    http: Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &RelayConfig) -> Result<Self, NotifyError> {
        let http = create_http_client(config.request_timeout).map_err(NotifyError::Transport)?;
        let api_url = &config.telegram_api_url;
        let token = &config.credentials.telegram_token;
        let send_url = format!("{api_url}/bot{token}/sendMessage");
        Ok(Self {
            http,
            send_url,
            chat_id: config.credentials.telegram_chat_id.clone(),
        })
    }

    fn send_chunk(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
        };
        let resp = self
            .http
            .post(&self.send_url)
            .json(&payload)
            .send()
            .map_err(NotifyError::Transport)?;

        let status = resp.status();
        let body: TgResponse = match resp.json() {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(NotifyError::Rejected(status.to_string()));
            }
            Err(e) => return Err(NotifyError::Transport(e)),
        };

        if body.ok && status.is_success() {
            return Ok(());
        }
        let reason = body.description.unwrap_or_else(|| status.to_string());
        Err(NotifyError::Rejected(reason))
    }
}

impl Messenger for TelegramNotifier {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        for chunk in split_message(message, MAX_MESSAGE_CHARS) {
            self.send_chunk(&chunk)?;
        }
        Ok(())
    }
}

/// Split `text` into pieces of at most `limit` characters.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
