//! Client builder resolving content and seed.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use game_content::{ContentFactory, standard_catalog};
use game_core::{Catalog, GameConfig, GameSession};

use crate::Client;
use crate::config::ClientConfig;

/// Builder for constructing a Client.
///
/// # Resolution order
///
/// - **Catalog**: explicit [`ClientBuilder::catalog`], else `catalog.ron` in the
///   configured data directory, else the built-in gallery
/// - **Seed**: `ClientConfig::seed`, else `rng_seed` from `config.toml`, else the clock
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    catalog: Option<Catalog>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this catalog instead of loading one.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured data directory cannot be loaded.
    pub fn build(self) -> Result<Client> {
        let (catalog, game_config) = match &self.config.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let game_config = factory
                    .load_config()
                    .with_context(|| format!("loading config from {}", dir.display()))?;
                let catalog = match self.catalog {
                    Some(catalog) => catalog,
                    None => factory
                        .load_catalog()
                        .with_context(|| format!("loading catalog from {}", dir.display()))?,
                };
                (catalog, game_config)
            }
            None => (
                self.catalog.unwrap_or_else(standard_catalog),
                GameConfig::default(),
            ),
        };

        let seed = match self.config.seed {
            Some(seed) => seed,
            None => game_config.seed_or(clock_seed()),
        };
        tracing::info!(seed, weapons = catalog.weapon_count(), "session prepared");

        Ok(Client::new(GameSession::seeded(catalog, seed), seed))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_wins() {
        let client = ClientBuilder::new()
            .config(ClientConfig::default().with_seed(17))
            .build()
            .unwrap();
        assert_eq!(client.seed(), 17);
        assert_eq!(client.session().catalog(), &standard_catalog());
    }

    #[test]
    fn config_file_seed_used_when_no_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "rng_seed = 88\n").unwrap();

        let client = ClientBuilder::new()
            .config(ClientConfig::default().with_data_dir(dir.path()))
            .catalog(standard_catalog())
            .build()
            .unwrap();
        assert_eq!(client.seed(), 88);
    }

    #[test]
    fn missing_catalog_in_data_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClientBuilder::new()
            .config(ClientConfig::default().with_data_dir(dir.path()))
            .build();
        assert!(result.is_err());
    }
}
