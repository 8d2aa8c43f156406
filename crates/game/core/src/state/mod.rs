//! Authoritative session state representation.
//!
//! This module owns the data that changes during a session: the phase of the
//! state machine, the player's loadout and score, and the score ledger.
//! Callers may read it freely but mutate it exclusively through the engine.
mod ledger;

pub use ledger::ScoreLedger;

/// Phase of the session state machine.
///
/// Transitions are monotone: `NotStarted → SelectingWeapon → Active → Ended`,
/// with `SelectingWeapon → Ended` allowed for players who quit before choosing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    SelectingWeapon,
    Active,
    /// Terminal.
    Ended,
}

impl SessionPhase {
    /// Returns true if `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: SessionPhase) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::SelectingWeapon)
                | (Self::SelectingWeapon, Self::Active)
                | (Self::SelectingWeapon, Self::Ended)
                | (Self::Active, Self::Ended)
        )
    }
}

/// The player's loadout and running score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Catalog index of the equipped weapon. Set once per session.
    pub equipped_weapon: Option<usize>,
    /// Mirrors [`ScoreLedger::total`].
    pub score: u64,
}

/// Canonical snapshot of a session's mutable state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: SessionPhase,
    pub player: PlayerState,
    pub ledger: ScoreLedger,
    /// Shots resolved so far (hits and misses).
    pub shots_fired: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> u64 {
        self.ledger.len() as u64
    }

    /// Checks the invariants that must hold between commands.
    ///
    /// Used by the engine's debug assertions and by tests.
    pub fn is_consistent(&self) -> bool {
        let score_matches = self.player.score == self.ledger.total();
        let hits_bounded = self.hits() <= self.shots_fired;
        let weapon_bound = match self.phase {
            SessionPhase::Active => self.player.equipped_weapon.is_some(),
            SessionPhase::NotStarted => self.player.equipped_weapon.is_none(),
            _ => true,
        };
        score_matches && hits_bounded && weapon_bound
    }
}
