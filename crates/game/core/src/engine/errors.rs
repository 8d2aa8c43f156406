//! Error types for engine commands.

use crate::error::{ErrorContext, ErrorSeverity, GameError};

/// Engine command names, used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CommandKind {
    Start,
    SelectWeapon,
    PerformShot,
    EndSession,
}

/// Errors surfaced while executing a command through the game engine.
///
/// Every variant is locally recoverable: the session is left exactly as it
/// was before the command, and the caller decides whether to retry or quit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("session already started (phase: {})", .context.phase)]
    AlreadyStarted { context: ErrorContext },

    #[error("{command} is not allowed while the session is {}", .context.phase)]
    InvalidPhase {
        command: CommandKind,
        context: ErrorContext,
    },

    #[error("invalid weapon selection: index {index} is outside 0..{available}")]
    InvalidWeaponSelection { index: usize, available: usize },

    #[error("no weapon equipped")]
    NoWeaponEquipped { context: ErrorContext },

    #[error("no targets available to spawn")]
    NoTargetsAvailable,
}

impl EngineError {
    pub(crate) fn invalid_phase(command: CommandKind, context: ErrorContext) -> Self {
        Self::InvalidPhase { command, context }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidWeaponSelection { .. } => ErrorSeverity::Recoverable,
            Self::AlreadyStarted { .. } | Self::InvalidPhase { .. } => ErrorSeverity::Validation,
            Self::NoWeaponEquipped { .. } | Self::NoTargetsAvailable => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::AlreadyStarted { context }
            | Self::InvalidPhase { context, .. }
            | Self::NoWeaponEquipped { context } => Some(context),
            Self::InvalidWeaponSelection { .. } | Self::NoTargetsAvailable => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyStarted { .. } => "ALREADY_STARTED",
            Self::InvalidPhase { .. } => "INVALID_PHASE",
            Self::InvalidWeaponSelection { .. } => "INVALID_WEAPON_SELECTION",
            Self::NoWeaponEquipped { .. } => "NO_WEAPON_EQUIPPED",
            Self::NoTargetsAvailable => "NO_TARGETS_AVAILABLE",
        }
    }
}
