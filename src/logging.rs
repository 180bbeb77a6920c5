use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber writing to stdout.
///
/// `RUST_LOG` overrides the default `info` filter. Returns false when a
/// subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
