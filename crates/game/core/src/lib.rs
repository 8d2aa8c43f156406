//! Deterministic rules for the shooting gallery.
//!
//! `game-core` defines the canonical session state machine, weapon and target
//! values, and the score ledger. It exposes pure APIs that front ends drive
//! with [`engine::Command`]s and render from [`engine::GameEvent`]s. All state
//! mutation flows through [`engine::GameEngine`], and every random draw comes
//! from an injected [`env::RngOracle`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    Command, CommandKind, EngineError, GameEngine, GameEvent, SessionSnapshot, ShotOutcome,
    TargetSpawner,
};
pub use env::{
    Catalog, PcgRng, Points, RngOracle, ScriptedRng, Target, TargetId, Weapon, WeaponConfigError,
    WeaponId,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use session::GameSession;
pub use state::{GameState, PlayerState, ScoreLedger, SessionPhase};
