//! Read-only session environment.
//!
//! The catalog describes what can be equipped and what can appear; the RNG
//! oracle supplies every random draw. Neither appears in [`crate::GameState`],
//! so the same catalog can back any number of sessions.
mod catalog;
mod rng;
mod targets;
mod weapons;

pub use catalog::Catalog;
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use targets::{Points, Target, TargetId};
pub use weapons::{Weapon, WeaponConfigError, WeaponId};
