use anyhow::{Context, Result};
use clap::Parser;
use review_relay::api::PracticumClient;
use review_relay::logging::init_logging;
use review_relay::notify::TelegramNotifier;
use review_relay::{Relay, RelayConfig};

/// Credentials are read from PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID,
/// optionally via a `.env` file in the working directory.
#[derive(Parser)]
#[command(name = "review-relay")]
#[command(about = "Relay homework review status changes to Telegram", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_logging();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {e}; refusing to start");
            return Err(e).context("Invalid configuration");
        }
    };

    let client = PracticumClient::new(&config).context("Failed to create review API client")?;
    let notifier = TelegramNotifier::new(&config).context("Failed to create Telegram client")?;
    tracing::info!(endpoint = client.endpoint(), "polling review API");

    let mut relay = Relay::new(client, notifier, config.retry_time);
    relay.run()
}
