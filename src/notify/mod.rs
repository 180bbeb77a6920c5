//! Chat notifications.
//!
//! Delivery is best-effort: [`notify`] logs failures and never propagates
//! them, so a chat outage cannot stop the poll loop.

pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::error::NotifyError;

/// Something that can deliver a text message to the configured chat.
pub trait Messenger {
    fn send(&self, message: &str) -> Result<(), NotifyError>;
}

impl<M: Messenger + ?Sized> Messenger for &M {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        (**self).send(message)
    }
}

/// Send `message`, logging the outcome. Returns whether delivery succeeded.
pub fn notify<M: Messenger + ?Sized>(messenger: &M, message: &str) -> bool {
    match messenger.send(message) {
        Ok(()) => {
            tracing::info!(text = message, "message sent");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to send message");
            false
        }
    }
}
