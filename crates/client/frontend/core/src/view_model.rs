//! View-model snapshots derived from a [`TallySession`].
use tally_core::{CombatStats, MonsterId, PlayerId, TallyState, Team, Verdict};

use crate::session::TallySession;

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub players: Vec<PlayerRow>,
    pub monsters: Vec<MonsterRow>,
    /// `None` while no combat is running.
    pub combat: Option<CombatPanel>,
}

impl ViewModel {
    pub fn from_session(session: &TallySession) -> Self {
        Self::from_state(session.state(), session.verdict())
    }

    pub fn from_state(state: &TallyState, verdict: Option<Verdict>) -> Self {
        let players = state
            .roster
            .players()
            .iter()
            .map(|player| PlayerRow {
                id: player.id(),
                name: player.name().to_string(),
                level: player.level(),
                bonus: player.bonus(),
                power: player.power(),
                in_combat: state.combat.is_active() && state.combat.contains(player.id()),
            })
            .collect();

        let monsters = state
            .roster
            .monsters()
            .iter()
            .map(|monster| MonsterRow {
                id: monster.id(),
                name: monster.name().to_string(),
                level: monster.level(),
                modifier: monster.modifier(),
                power: monster.power(),
            })
            .collect();

        let combat = state
            .combat
            .is_active()
            .then(|| CombatPanel::from_state(state, verdict));

        Self {
            players,
            monsters,
            combat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: PlayerId,
    pub name: String,
    pub level: i32,
    pub bonus: i32,
    pub power: i32,
    pub in_combat: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterRow {
    pub id: MonsterId,
    pub name: String,
    pub level: i32,
    pub modifier: i32,
    pub power: i32,
}

/// A combat participant as listed under the player team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub id: PlayerId,
    pub name: String,
    pub power: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatPanel {
    pub participants: Vec<ParticipantRow>,
    pub player_team_mod: i32,
    pub monster_team_mod: i32,
    pub stats: CombatStats,
    pub verdict: Option<Verdict>,
}

impl CombatPanel {
    fn from_state(state: &TallyState, verdict: Option<Verdict>) -> Self {
        let participants = state
            .team_players()
            .map(|player| ParticipantRow {
                id: player.id(),
                name: player.name().to_string(),
                power: player.power(),
            })
            .collect();

        Self {
            participants,
            player_team_mod: state.combat.team_mod(Team::Players),
            monster_team_mod: state.combat.team_mod(Team::Monsters),
            stats: state.combat_stats(),
            verdict,
        }
    }
}
