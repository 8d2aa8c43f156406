//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a console session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `catalog.ron` / `config.toml`. `None` uses the built-in gallery.
    pub data_dir: Option<PathBuf>,
    /// Seed override; takes precedence over the seed in `config.toml`.
    pub seed: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: LogFilter,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUNT_DATA_DIR` - Content directory (default: built-in catalog)
    /// - `HUNT_SEED` - RNG seed for a reproducible session (default: config file, then clock)
    /// - `HUNT_LOG` - Default log level when `RUST_LOG` is unset (default: warn)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("HUNT_DATA_DIR").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("HUNT_SEED");

        config.log_filter = LogFilter::from_env();

        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Fallback directive for the tracing subscriber.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogFilter(pub String);

impl LogFilter {
    /// Reads `HUNT_LOG`, falling back to `warn`.
    pub fn from_env() -> Self {
        env::var("HUNT_LOG").map(Self).unwrap_or_default()
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self("warn".to_owned())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    parse_env_value(key, &env::var(key).ok()?)
}

/// Parses a set variable, warning instead of silently dropping a bad value.
fn parse_env_value<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = raw, "ignoring unparseable environment variable");
            None
        }
    }
}
