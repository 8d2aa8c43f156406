//! Uniform target selection.

use super::EngineError;
use crate::env::{RngOracle, Target};

/// Picks which target appears for the next shot.
///
/// Borrowed view over the target catalog; every call consumes exactly one
/// `pick` from the random source.
#[derive(Clone, Copy, Debug)]
pub struct TargetSpawner<'a> {
    targets: &'a [Target],
}

impl<'a> TargetSpawner<'a> {
    pub fn new(targets: &'a [Target]) -> Self {
        Self { targets }
    }

    /// Selects a target uniformly at random.
    ///
    /// Returns the catalog index alongside the target. Fails only when the
    /// catalog has no targets.
    pub fn spawn<R>(&self, rng: &mut R) -> Result<(usize, &'a Target), EngineError>
    where
        R: RngOracle + ?Sized,
    {
        if self.targets.is_empty() {
            return Err(EngineError::NoTargetsAvailable);
        }

        // Oracles should pick in `0..len`; wrap anything past the end.
        let index = rng.pick(self.targets.len()) % self.targets.len();
        Ok((index, &self.targets[index]))
    }
}
