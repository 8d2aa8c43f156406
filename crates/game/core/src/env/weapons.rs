//! Weapon definitions and hit resolution.

use crate::error::{ErrorSeverity, GameError};

/// Stable identifier for a weapon in the catalog (e.g. `"rifle"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponId(pub String);

impl WeaponId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WeaponId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A firearm the player can equip.
///
/// # Invariants
///
/// - `hit_probability` is finite and lies in `[0, 1)`
/// - Immutable after construction; deserialized weapons go through [`Weapon::new`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WeaponDef"))]
pub struct Weapon {
    id: WeaponId,
    hit_probability: f64,
}

impl Weapon {
    /// Creates a weapon, rejecting probabilities outside `[0, 1)`.
    pub fn new(id: impl Into<String>, hit_probability: f64) -> Result<Self, WeaponConfigError> {
        let id = WeaponId::new(id);
        if !hit_probability.is_finite() || !(0.0..1.0).contains(&hit_probability) {
            return Err(WeaponConfigError::InvalidHitProbability {
                weapon: id,
                hit_probability,
            });
        }

        Ok(Self {
            id,
            hit_probability,
        })
    }

    pub fn id(&self) -> &WeaponId {
        &self.id
    }

    pub fn hit_probability(&self) -> f64 {
        self.hit_probability
    }

    /// Resolves one shot against a uniform draw in `[0, 1)`.
    ///
    /// Hits iff `draw < hit_probability`, so a draw equal to the probability misses.
    pub fn fire(&self, draw: f64) -> bool {
        draw < self.hit_probability
    }
}

/// Raw weapon entry as written in catalog files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WeaponDef {
    id: String,
    hit_probability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<WeaponDef> for Weapon {
    type Error = WeaponConfigError;

    fn try_from(def: WeaponDef) -> Result<Self, Self::Error> {
        Weapon::new(def.id, def.hit_probability)
    }
}

/// Errors raised while constructing a [`Weapon`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WeaponConfigError {
    #[error("invalid weapon config: '{weapon}' has hit probability {hit_probability}, expected [0, 1)")]
    InvalidHitProbability {
        weapon: WeaponId,
        hit_probability: f64,
    },
}

impl GameError for WeaponConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHitProbability { .. } => "INVALID_WEAPON_CONFIG",
        }
    }
}
