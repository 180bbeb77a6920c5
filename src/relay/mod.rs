//! Poll loop relaying review status changes to the chat.
//!
//! Each cycle requests changes since the cursor, validates the payload,
//! formats the newest submission and sends it. Any failure inside a cycle is
//! logged, the cursor is reset to the current time, and the loop sleeps as
//! usual. Only the first entry of `homeworks` is ever looked at; older entries
//! batched into the same response are dropped.

use std::time::Duration;

use crate::api::client::ReviewSource;
use crate::api::response;
use crate::error::CycleError;
use crate::format::format_status;
use crate::notify::{notify, Messenger};

/// Source of the current unix timestamp in seconds.
pub type Clock = fn() -> i64;

pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}

/// What a single poll cycle did.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Response was valid but carried no submissions.
    Idle,
    /// A status message was built and handed to the messenger.
    Notified { message: String, sent: bool },
    /// The cycle was aborted; the cursor has been reset.
    Failed(CycleError),
}

impl CycleOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, CycleOutcome::Failed(_))
    }
}

/// Owns the cursor and drives fetch, validate, format and notify.
pub struct Relay<S, M> {
    source: S,
    messenger: M,
    retry_time: Duration,
    clock: Clock,
    cursor: i64,
}

impl<S: ReviewSource, M: Messenger> Relay<S, M> {
    pub fn new(source: S, messenger: M, retry_time: Duration) -> Self {
        Self::with_clock(source, messenger, retry_time, system_clock)
    }

    pub fn with_clock(source: S, messenger: M, retry_time: Duration, clock: Clock) -> Self {
        Self {
            source,
            messenger,
            retry_time,
            clock,
            cursor: clock(),
        }
    }

    /// Start of the next query window, in unix seconds.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn retry_time(&self) -> Duration {
        self.retry_time
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Poll forever, sleeping `retry_time` after every cycle.
    pub fn run(&mut self) -> ! {
        tracing::info!(
            cursor = self.cursor,
            retry_secs = self.retry_time().as_secs(),
            "relay started"
        );
        loop {
            self.run_cycle();
            std::thread::sleep(self.retry_time());
        }
    }

    /// Run one poll cycle without sleeping.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Program failure: {e}");
                self.cursor = (self.clock)();
                CycleOutcome::Failed(e)
            }
        }
    }

    fn poll(&mut self) -> Result<CycleOutcome, CycleError> {
        let payload = self.source.fetch(self.cursor)?;
        let response = response::decode(&payload)?;

        let outcome = match response.latest() {
            None => {
                tracing::debug!("no homework updates");
                CycleOutcome::Idle
            }
            Some(record) => {
                let message = format_status(record)?;
                let sent = notify(&self.messenger, &message);
                CycleOutcome::Notified { message, sent }
            }
        };

        if let Some(current_date) = response.current_date {
            self.cursor = current_date;
        }
        Ok(outcome)
    }
}
