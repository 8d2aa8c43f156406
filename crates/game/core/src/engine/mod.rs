//! Session state machine and shot resolution.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. It enforces the
//! phase transitions, draws from the injected [`RngOracle`] for spawning and
//! firing, and keeps the ledger and score in step.

mod errors;
mod events;
mod spawner;

pub use errors::{CommandKind, EngineError};
pub use events::{Command, GameEvent, SessionSnapshot, ShotOutcome};
pub use spawner::TargetSpawner;

use crate::env::{Catalog, RngOracle, Weapon};
use crate::error::ErrorContext;
use crate::state::{GameState, SessionPhase};

/// Game engine that applies commands to a borrowed session state.
///
/// The engine holds no state of its own: build one around the state, catalog
/// and random source for each command (or batch of commands) and drop it.
///
/// # Invariants
///
/// - `player.score == ledger.total()` after every shot; a caller-built state
///   with a stale score is resynced from the ledger on the next hit
/// - A failed command leaves the state untouched
/// - The random source is consumed only by `perform_shot`: one pick, then one draw
pub struct GameEngine<'a, R: RngOracle + ?Sized> {
    state: &'a mut GameState,
    catalog: &'a Catalog,
    rng: &'a mut R,
}

impl<'a, R: RngOracle + ?Sized> GameEngine<'a, R> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, catalog: &'a Catalog, rng: &'a mut R) -> Self {
        Self {
            state,
            catalog,
            rng,
        }
    }

    /// Opens weapon selection.
    pub fn start(&mut self) -> Result<GameEvent, EngineError> {
        if self.state.phase != SessionPhase::NotStarted {
            return Err(EngineError::AlreadyStarted {
                context: self.context(),
            });
        }

        self.transition(SessionPhase::SelectingWeapon);

        Ok(GameEvent::SessionStarted {
            weapons: self
                .catalog
                .weapons()
                .iter()
                .map(|weapon| weapon.id().clone())
                .collect(),
        })
    }

    /// Equips the weapon at `index` and activates the session.
    ///
    /// An out-of-range index leaves the session in weapon selection so the
    /// caller can ask again.
    pub fn select_weapon(&mut self, index: usize) -> Result<GameEvent, EngineError> {
        self.require_phase(CommandKind::SelectWeapon, &[SessionPhase::SelectingWeapon])?;

        let Some(weapon) = self.catalog.weapon(index) else {
            tracing::debug!(
                index,
                available = self.catalog.weapon_count(),
                "weapon selection rejected"
            );
            return Err(EngineError::InvalidWeaponSelection {
                index,
                available: self.catalog.weapon_count(),
            });
        };
        let weapon_id = weapon.id().clone();

        self.state.player.equipped_weapon = Some(index);
        self.transition(SessionPhase::Active);
        tracing::debug!(weapon = %weapon_id, "weapon equipped");

        Ok(GameEvent::WeaponSelected { weapon_id })
    }

    /// Spawns a target and fires the equipped weapon at it.
    pub fn perform_shot(&mut self) -> Result<ShotOutcome, EngineError> {
        self.require_phase(CommandKind::PerformShot, &[SessionPhase::Active])?;
        let weapon = self.equipped_weapon()?;
        let catalog = self.catalog;

        let (_, target) = TargetSpawner::new(catalog.targets()).spawn(&mut *self.rng)?;
        let draw = self.rng.next_unit();
        let hit = weapon.fire(draw);

        self.state.shots_fired += 1;
        let points_earned = if hit {
            let points = target.resolve_hit();
            self.state.ledger.record(points);
            self.state.player.score = self.state.ledger.total();
            Some(points)
        } else {
            None
        };

        tracing::trace!(
            weapon = %weapon.id(),
            target = %target.id(),
            draw,
            hit,
            "shot resolved"
        );

        Ok(ShotOutcome {
            hit,
            target: target.clone(),
            points_earned,
        })
    }

    /// Closes the session and reports the final score.
    ///
    /// Calling this again once the session has ended returns the same snapshot.
    pub fn end_session(&mut self) -> Result<SessionSnapshot, EngineError> {
        self.require_phase(
            CommandKind::EndSession,
            &[
                SessionPhase::SelectingWeapon,
                SessionPhase::Active,
                SessionPhase::Ended,
            ],
        )?;

        if self.state.phase != SessionPhase::Ended {
            self.transition(SessionPhase::Ended);
            tracing::debug!(
                score = self.state.player.score,
                shots = self.state.shots_fired,
                "session ended"
            );
        }

        Ok(SessionSnapshot::from_state(self.state))
    }

    /// Applies a command and reports it as an event.
    ///
    /// An out-of-range weapon choice is reported as
    /// [`GameEvent::WeaponSelectionRejected`] rather than an error, since it is
    /// an expected part of the selection loop. Every other failure is returned.
    pub fn execute(&mut self, command: Command) -> Result<GameEvent, EngineError> {
        match command {
            Command::Start => self.start(),
            Command::SelectWeapon(index) => match self.select_weapon(index) {
                Err(err @ EngineError::InvalidWeaponSelection { .. }) => {
                    Ok(GameEvent::WeaponSelectionRejected {
                        reason: err.to_string(),
                    })
                }
                other => other,
            },
            Command::PerformShot => self.perform_shot().map(|outcome| GameEvent::from(&outcome)),
            Command::EndSession => self
                .end_session()
                .map(|snapshot| GameEvent::from(&snapshot)),
        }
    }

    /// Current score report without changing the phase.
    pub fn scoreboard(&self) -> SessionSnapshot {
        SessionSnapshot::from_state(self.state)
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    fn equipped_weapon(&self) -> Result<&'a Weapon, EngineError> {
        let catalog = self.catalog;
        self.state
            .player
            .equipped_weapon
            .and_then(|index| catalog.weapon(index))
            .ok_or_else(|| EngineError::NoWeaponEquipped {
                context: self.context(),
            })
    }

    fn require_phase(
        &self,
        command: CommandKind,
        allowed: &[SessionPhase],
    ) -> Result<(), EngineError> {
        if allowed.contains(&self.state.phase) {
            return Ok(());
        }
        tracing::debug!(%command, phase = %self.state.phase, "command rejected");
        Err(EngineError::invalid_phase(command, self.context()))
    }

    fn transition(&mut self, next: SessionPhase) {
        debug_assert!(
            self.state.phase.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state.phase,
            next
        );
        tracing::debug!(from = %self.state.phase, to = %next, "phase transition");
        self.state.phase = next;
    }

    fn context(&self) -> ErrorContext {
        ErrorContext::new(self.state.phase, self.state.shots_fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng, Target};
    use crate::error::GameError;

    fn gallery() -> Catalog {
        Catalog::new(
            vec![
                Weapon::new("rifle", 0.8).unwrap(),
                Weapon::new("shotgun", 0.5).unwrap(),
            ],
            vec![Target::new("deer", 10), Target::new("bear", 20)],
        )
    }

    #[test]
    fn start_opens_weapon_selection_once() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);

        let event = engine.start().unwrap();
        assert_eq!(
            event,
            GameEvent::SessionStarted {
                weapons: vec![
                    crate::env::WeaponId::new("rifle"),
                    crate::env::WeaponId::new("shotgun"),
                ],
            }
        );
        assert_eq!(engine.phase(), SessionPhase::SelectingWeapon);

        let err = engine.start().unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_STARTED");
        assert_eq!(engine.phase(), SessionPhase::SelectingWeapon);
    }

    #[test]
    fn select_weapon_before_start_is_rejected() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);

        let err = engine.select_weapon(0).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidPhase {
                command: CommandKind::SelectWeapon,
                ..
            }
        ));
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert_eq!(state.player.equipped_weapon, None);
    }

    #[test]
    fn out_of_range_selection_keeps_selecting() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();

        let err = engine.select_weapon(2).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidWeaponSelection {
                index: 2,
                available: 2,
            }
        );
        assert_eq!(state.phase, SessionPhase::SelectingWeapon);
        assert_eq!(state.player.equipped_weapon, None);
    }

    #[test]
    fn weapon_cannot_be_reselected() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();
        engine.select_weapon(1).unwrap();

        assert!(engine.select_weapon(0).is_err());
        assert_eq!(state.player.equipped_weapon, Some(1));
    }

    #[test]
    fn shot_outside_active_leaves_score_unchanged() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = ScriptedRng::new([0], [0.0]);

        {
            let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
            assert!(engine.perform_shot().is_err());
            engine.start().unwrap();
            assert!(engine.perform_shot().is_err());
        }

        assert_eq!(state.player.score, 0);
        assert_eq!(state.shots_fired, 0);
        assert!(state.ledger.is_empty());
        // Rejected shots never touch the random source.
        assert!(!rng.is_exhausted());
    }

    #[test]
    fn shot_without_weapon_reports_no_weapon_equipped() {
        let catalog = gallery();
        let mut state = GameState::new();
        state.phase = SessionPhase::Active;
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);

        let err = engine.perform_shot().unwrap_err();
        assert!(matches!(err, EngineError::NoWeaponEquipped { .. }));
        assert_eq!(err.context().map(|c| c.phase), Some(SessionPhase::Active));
    }

    #[test]
    fn shot_with_empty_target_catalog_fails() {
        let catalog = Catalog::new(vec![Weapon::new("rifle", 0.8).unwrap()], vec![]);
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();
        engine.select_weapon(0).unwrap();

        assert_eq!(
            engine.perform_shot().unwrap_err(),
            EngineError::NoTargetsAvailable
        );
        assert_eq!(state.shots_fired, 0);
    }

    #[test]
    fn hits_credit_ledger_and_misses_do_not() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = ScriptedRng::new([1, 0], [0.3, 0.95]);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();
        engine.select_weapon(1).unwrap();

        let first = engine.perform_shot().unwrap();
        assert!(first.hit);
        assert_eq!(first.target.id().as_str(), "bear");
        assert_eq!(first.points_earned, Some(20));

        let second = engine.perform_shot().unwrap();
        assert!(!second.hit);
        assert_eq!(second.target.id().as_str(), "deer");
        assert_eq!(second.points_earned, None);

        assert_eq!(state.player.score, 20);
        assert_eq!(state.ledger.history(), &[20]);
        assert_eq!(state.shots_fired, 2);
        assert!(state.is_consistent());
    }

    #[test]
    fn stale_score_is_resynced_from_ledger() {
        let catalog = gallery();
        let mut state = GameState::new();
        state.phase = SessionPhase::Active;
        state.player.equipped_weapon = Some(0);
        state.ledger.record(10);
        state.shots_fired = 1;
        assert!(!state.is_consistent());

        let mut rng = ScriptedRng::new([0], [0.1]);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        let outcome = engine.perform_shot().unwrap();
        assert_eq!(outcome.points_earned, Some(10));
        assert_eq!(engine.scoreboard().final_score, 20);

        assert_eq!(state.player.score, 20);
        assert_eq!(state.ledger.history(), &[10, 10]);
        assert!(state.is_consistent());
    }

    #[test]
    fn end_session_is_idempotent() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = ScriptedRng::new([0], [0.1]);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();
        engine.select_weapon(0).unwrap();
        engine.perform_shot().unwrap();

        let first = engine.end_session().unwrap();
        let second = engine.end_session().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.final_score, 10);
        assert_eq!(engine.phase(), SessionPhase::Ended);

        assert!(engine.perform_shot().is_err());
        assert_eq!(engine.scoreboard(), first);
    }

    #[test]
    fn end_session_from_selection_is_allowed() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.start().unwrap();

        let snapshot = engine.end_session().unwrap();
        assert_eq!(snapshot, SessionSnapshot::default());
        assert_eq!(engine.phase(), SessionPhase::Ended);
    }

    #[test]
    fn end_session_before_start_is_rejected() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);

        assert!(matches!(
            engine.end_session().unwrap_err(),
            EngineError::InvalidPhase {
                command: CommandKind::EndSession,
                ..
            }
        ));
        assert_eq!(engine.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn execute_reports_rejected_selection_as_event() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);
        engine.execute(Command::Start).unwrap();

        let event = engine.execute(Command::SelectWeapon(9)).unwrap();
        assert!(matches!(event, GameEvent::WeaponSelectionRejected { .. }));
        assert_eq!(engine.phase(), SessionPhase::SelectingWeapon);

        let event = engine.execute(Command::SelectWeapon(0)).unwrap();
        assert_eq!(
            event,
            GameEvent::WeaponSelected {
                weapon_id: crate::env::WeaponId::new("rifle"),
            }
        );
    }

    #[test]
    fn execute_propagates_phase_errors() {
        let catalog = gallery();
        let mut state = GameState::new();
        let mut rng = PcgRng::new(0);
        let mut engine = GameEngine::new(&mut state, &catalog, &mut rng);

        assert!(engine.execute(Command::PerformShot).is_err());
        assert!(engine.execute(Command::SelectWeapon(9)).is_err());
    }
}
