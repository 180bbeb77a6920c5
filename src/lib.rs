//! Relay homework review status changes to a Telegram chat.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod notify;
pub mod relay;

pub use catalog::ReviewStatus;
pub use config::{Credentials, RelayConfig};
pub use error::{ConfigError, CycleError, FetchError, NotifyError, ValidationError};
pub use relay::{CycleOutcome, Relay};
