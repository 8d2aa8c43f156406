//! Console front end for the shooting gallery.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ GameSession (game-core: rules, state, seeded RNG)
//!   └─→ Console (prompt loop over any BufRead / Write pair)
//! ```
//!
//! The client never decides game outcomes. It turns keystrokes into engine
//! commands and engine events into text.

mod builder;
pub mod config;
pub mod console;
pub mod logging;
pub mod presentation;

pub use builder::ClientBuilder;
pub use config::{ClientConfig, LogFilter};
pub use console::Console;

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{GameSession, SessionSnapshot};

/// A prepared session and the seed it was built from.
pub struct Client {
    session: GameSession,
    seed: u64,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn new(session: GameSession, seed: u64) -> Self {
        Self { session, seed }
    }

    /// Seed of the session's random source; rerun with it to replay.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays the session against the given input and output.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<SessionSnapshot> {
        Console::new(input, output).play(&mut self.session)
    }
}
