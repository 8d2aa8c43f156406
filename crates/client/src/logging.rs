//! Tracing setup for the console client.
//!
//! Logs go to stderr so they never interleave with the prompt on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LogFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used.
pub fn setup_logging(fallback: &LogFilter) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback.0))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
