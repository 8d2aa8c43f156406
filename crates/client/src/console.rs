//! Line-oriented prompt loop.
//!
//! The console owns the I/O: it prints menus, reads one line per prompt, and
//! translates answers into engine commands. Retrying an invalid weapon choice
//! happens here, not in the engine.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{Command, GameEvent, GameSession, RngOracle, SessionSnapshot};

use crate::presentation;

/// What the player asked for at the action prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Shoot,
    EndGame,
}

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Shoot),
            "2" => Some(Self::EndGame),
            _ => None,
        }
    }
}

/// Parses a 1-based menu answer into a catalog index.
///
/// `None` for anything that is not a positive integer; range checking is
/// left to the engine.
pub fn parse_weapon_choice(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one full session and returns the final snapshot.
    ///
    /// End of input at any prompt ends the session as if the player quit.
    pub fn play<G: RngOracle>(&mut self, session: &mut GameSession<G>) -> Result<SessionSnapshot> {
        let weapons = match session.execute(Command::Start)? {
            GameEvent::SessionStarted { weapons } => weapons,
            other => anyhow::bail!("unexpected start event: {other:?}"),
        };
        self.say("Welcome to the Shooting Game!")?;

        if self.choose_weapon(session, &weapons)? {
            self.game_loop(session)?;
        }

        let snapshot = session.end_session()?;
        self.say_all(presentation::final_lines(&snapshot))?;
        tracing::info!(
            score = snapshot.final_score,
            shots = snapshot.shots_fired,
            "session finished"
        );
        Ok(snapshot)
    }

    /// Returns `false` if input ran out before a weapon was chosen.
    fn choose_weapon<G: RngOracle>(
        &mut self,
        session: &mut GameSession<G>,
        weapons: &[game_core::WeaponId],
    ) -> Result<bool> {
        loop {
            self.say_all(presentation::weapon_menu(weapons))?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(false);
            };

            let Some(index) = parse_weapon_choice(&line) else {
                tracing::debug!(input = line.trim(), "unparseable weapon choice");
                self.say(&presentation::invalid_gun_choice())?;
                continue;
            };

            let event = session.execute(Command::SelectWeapon(index))?;
            self.say_all(presentation::selection_lines(&event))?;
            if matches!(event, GameEvent::WeaponSelected { .. }) {
                return Ok(true);
            }
        }
    }

    fn game_loop<G: RngOracle>(&mut self, session: &mut GameSession<G>) -> Result<()> {
        loop {
            self.say_all(presentation::action_menu())?;
            let Some(line) = self.prompt("Enter your action: ")? else {
                return Ok(());
            };

            match Action::parse(&line) {
                Some(Action::Shoot) => {
                    let outcome = session.perform_shot()?;
                    let total = session.state().player.score;
                    self.say_all(presentation::shot_lines(&outcome, total))?;
                }
                Some(Action::EndGame) => return Ok(()),
                None => self.say(&presentation::invalid_action())?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn say_all(&mut self, lines: Vec<String>) -> Result<()> {
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }
}
