//! Roster bookkeeping and combat arithmetic for tabletop encounters.
//!
//! `tally-core` owns the canonical players, monsters, and combat session and
//! exposes pure queries over them. All state mutation flows through
//! [`engine::TallyEngine`]; presentation layers read [`TallyState`] and call
//! back into the engine in response to user gestures.
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod stats;

pub use config::TallyConfig;
pub use engine::{Command, EngineError, Outcome, TallyEngine};
pub use error::{CoreError, ErrorSeverity};
pub use state::{
    CombatSession, EntityKind, IdSequence, Monster, MonsterId, Player, PlayerId, Roster, Step,
    TallyState, Team,
};
pub use stats::{CombatStats, Verdict};
