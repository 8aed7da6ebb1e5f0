//! Authoritative roster and combat state.
//!
//! This module owns the data structures that describe players, monsters, and
//! the combat session. Frontends read this state but mutate it exclusively
//! through the engine.
mod roster;
mod types;

pub use roster::Roster;
pub use types::{
    CombatSession, EntityKind, IdSequence, Monster, MonsterId, Player, PlayerId, Step, Team,
};

use crate::config::TallyConfig;
use crate::stats::{CombatStats, Verdict};

/// Canonical snapshot of everything the engine tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyState {
    pub roster: Roster,
    pub combat: CombatSession,
}

impl TallyState {
    /// Creates an empty state with no players and no active combat.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with `config.initial_players` default players.
    pub fn with_initial_players(config: &TallyConfig) -> Self {
        let mut state = Self::new();
        for _ in 0..config.initial_players {
            if state.roster.add_player(config).is_none() {
                break;
            }
        }
        state
    }

    /// Team powers and final totals derived from the current state.
    pub fn combat_stats(&self) -> CombatStats {
        CombatStats::compute(self)
    }

    pub fn verdict(&self) -> Verdict {
        self.combat_stats().verdict()
    }

    /// Players currently on the combat team, in join order.
    pub fn team_players(&self) -> impl Iterator<Item = &Player> {
        self.combat
            .player_team()
            .iter()
            .filter_map(|id| self.roster.player(*id))
    }
}
