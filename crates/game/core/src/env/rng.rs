//! RNG oracle for deterministic random number generation.
//!
//! The engine never reaches for a global generator. Every random decision
//! (which target appears, whether the shot connects) is drawn from an
//! [`RngOracle`] handed to the session by its owner.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed (or the
//! same script), they must produce the same sequence of values in the order
//! the engine requests them. This is what makes sessions replayable.

use std::collections::VecDeque;

/// Random source consumed by the engine.
///
/// Draws are stateful: each call advances the stream.
pub trait RngOracle {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw a uniform value in `[0, 1)`.
    ///
    /// Used for hit resolution against a weapon's hit probability.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Pick a uniform index in `[0, len)`.
    ///
    /// Callers must not pass `len == 0`; implementations return `0` in that case.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // Multiply-shift range reduction.
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state);
        rng.state = rng.state.wrapping_add(seed);
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Scripted random source that replays fixed sequences.
///
/// Target picks and unit draws are kept in separate queues so a replay can
/// state "spawn Deer, then roll 0.7" directly. When a queue runs dry the
/// fallback generator takes over, so a short script never stalls a session.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    draws: VecDeque<f64>,
    fallback: PcgRng,
}

impl ScriptedRng {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        draws: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            draws: draws.into_iter().collect(),
            fallback: PcgRng::new(0),
        }
    }

    /// Returns true once every scripted value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty() && self.draws.is_empty()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.fallback.next_u32()
    }

    fn next_unit(&mut self) -> f64 {
        match self.draws.pop_front() {
            Some(draw) => draw,
            None => self.fallback.next_unit(),
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        match self.picks.pop_front() {
            // Scripted indices wrap so a script never points past the catalog.
            Some(index) if len > 0 => index % len,
            Some(_) => 0,
            None => self.fallback.pick(len),
        }
    }
}
