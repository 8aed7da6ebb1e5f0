//! Error types for engine operations.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{EntityKind, MonsterId, PlayerId};

/// Errors surfaced by [`super::TallyEngine`]. A failed call never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("monster {0} not found")]
    MonsterNotFound(MonsterId),

    #[error("combat is not active")]
    CombatInactive,

    #[error("{kind} id space exhausted")]
    IdSpaceExhausted { kind: EntityKind },
}

impl CoreError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        use EngineError::*;
        match self {
            PlayerNotFound(_) | MonsterNotFound(_) | CombatInactive => ErrorSeverity::Recoverable,
            IdSpaceExhausted { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use EngineError::*;
        match self {
            PlayerNotFound(_) => "ENGINE_PLAYER_NOT_FOUND",
            MonsterNotFound(_) => "ENGINE_MONSTER_NOT_FOUND",
            CombatInactive => "ENGINE_COMBAT_INACTIVE",
            IdSpaceExhausted { .. } => "ENGINE_ID_SPACE_EXHAUSTED",
        }
    }
}
