/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed for the session's random source.
    ///
    /// `None` lets the front end pick one (typically from the clock), which
    /// makes every session different. Fix it to replay a session exactly.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
        }
    }

    /// Returns the configured seed, or `fallback` if none is set.
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.rng_seed.unwrap_or(fallback)
    }
}
