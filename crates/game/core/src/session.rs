//! Owning wrapper around a session.
//!
//! [`GameEngine`] borrows everything it touches, which suits tests and
//! replays. Front ends usually want one value that owns the state, the catalog
//! and the random source for the lifetime of a play-through; that is
//! [`GameSession`].

use crate::engine::{Command, EngineError, GameEngine, GameEvent, SessionSnapshot, ShotOutcome};
use crate::env::{Catalog, PcgRng, RngOracle, Weapon};
use crate::state::{GameState, SessionPhase};

/// One play-through: state, catalog and random source bundled together.
#[derive(Debug)]
pub struct GameSession<R: RngOracle = PcgRng> {
    state: GameState,
    catalog: Catalog,
    rng: R,
}

impl GameSession<PcgRng> {
    /// Creates a session drawing from a PCG stream seeded with `seed`.
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::new(catalog, PcgRng::new(seed))
    }
}

impl<R: RngOracle> GameSession<R> {
    pub fn new(catalog: Catalog, rng: R) -> Self {
        Self {
            state: GameState::new(),
            catalog,
            rng,
        }
    }

    fn engine(&mut self) -> GameEngine<'_, R> {
        GameEngine::new(&mut self.state, &self.catalog, &mut self.rng)
    }

    pub fn start(&mut self) -> Result<GameEvent, EngineError> {
        self.engine().start()
    }

    pub fn select_weapon(&mut self, index: usize) -> Result<GameEvent, EngineError> {
        self.engine().select_weapon(index)
    }

    pub fn perform_shot(&mut self) -> Result<ShotOutcome, EngineError> {
        self.engine().perform_shot()
    }

    pub fn end_session(&mut self) -> Result<SessionSnapshot, EngineError> {
        self.engine().end_session()
    }

    /// See [`GameEngine::execute`].
    pub fn execute(&mut self, command: Command) -> Result<GameEvent, EngineError> {
        self.engine().execute(command)
    }

    pub fn scoreboard(&self) -> SessionSnapshot {
        SessionSnapshot::from_state(&self.state)
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.state
            .player
            .equipped_weapon
            .and_then(|index| self.catalog.weapon(index))
    }
}
