mod combat;
mod common;
mod entities;

pub use combat::{CombatSession, Team};
pub use common::{EntityKind, IdSequence, MonsterId, PlayerId, Step};
pub use entities::{Monster, Player};
