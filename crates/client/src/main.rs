//! Shooting gallery console client.
//!
//! # Examples
//!
//! ```bash
//! # Built-in gallery, random seed
//! cargo run -p hunt-client
//!
//! # Bundled data directory, fixed seed, debug logs on stderr
//! HUNT_DATA_DIR=data HUNT_SEED=42 RUST_LOG=debug cargo run -p hunt-client
//! ```

use anyhow::Result;
use hunt_client::{Client, ClientConfig, LogFilter, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Setup logging first so configuration warnings are visible
    logging::setup_logging(&LogFilter::from_env())?;

    // 2. Load configuration from environment
    let config = ClientConfig::from_env();
    tracing::debug!(?config, "starting client");

    // 3. Build and run
    let mut client = Client::builder().config(config).build()?;
    tracing::info!(seed = client.seed(), "replay with HUNT_SEED");

    let stdin = std::io::stdin();
    client.run(stdin.lock(), std::io::stdout())?;

    Ok(())
}
