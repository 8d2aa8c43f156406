//! Commands accepted by the engine and the events it reports back.
//!
//! Front ends speak to a session exclusively through these types: they submit
//! a [`Command`] and render the resulting [`GameEvent`]. Nothing in the engine
//! prints or prompts.

use crate::env::{Points, Target, TargetId, WeaponId};
use crate::state::GameState;

/// Requests a caller can issue against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Start,
    /// Zero-based index into the weapon catalog.
    SelectWeapon(usize),
    PerformShot,
    EndSession,
}

/// Result of a single resolved shot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub hit: bool,
    /// The target that appeared for this shot.
    pub target: Target,
    /// Points credited to the ledger; `None` on a miss.
    pub points_earned: Option<Points>,
}

/// Final (or current) score report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub final_score: u64,
    pub history: Vec<Points>,
    pub shots_fired: u64,
    pub hits: u64,
}

impl SessionSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            final_score: state.ledger.total(),
            history: state.ledger.history().to_vec(),
            shots_fired: state.shots_fired,
            hits: state.hits(),
        }
    }
}

/// Structured notifications emitted by a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The session moved to weapon selection; `weapons` lists the menu in catalog order.
    SessionStarted { weapons: Vec<WeaponId> },

    WeaponSelected { weapon_id: WeaponId },

    /// Selection failed; the session is still waiting for a valid choice.
    WeaponSelectionRejected { reason: String },

    ShotResolved {
        hit: bool,
        target_id: TargetId,
        points_earned: Option<Points>,
    },

    SessionEnded {
        final_score: u64,
        history: Vec<Points>,
    },
}

impl From<&ShotOutcome> for GameEvent {
    fn from(outcome: &ShotOutcome) -> Self {
        GameEvent::ShotResolved {
            hit: outcome.hit,
            target_id: outcome.target.id().clone(),
            points_earned: outcome.points_earned,
        }
    }
}

impl From<&SessionSnapshot> for GameEvent {
    fn from(snapshot: &SessionSnapshot) -> Self {
        GameEvent::SessionEnded {
            final_score: snapshot.final_score,
            history: snapshot.history.clone(),
        }
    }
}
