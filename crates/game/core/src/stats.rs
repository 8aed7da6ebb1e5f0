//! Derived combat totals and the win/lose/tie verdict.
//!
//! Totals are recomputed from the roster on every query.

use core::cmp::Ordering;

use crate::state::{TallyState, Team};

/// Outcome of comparing the two final powers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Verdict {
    PlayersWin,
    MonstersWin,
    Tie,
}

impl Verdict {
    pub fn winner(self) -> Option<Team> {
        match self {
            Verdict::PlayersWin => Some(Team::Players),
            Verdict::MonstersWin => Some(Team::Monsters),
            Verdict::Tie => None,
        }
    }
}

/// Power totals for both sides. Final totals are unclamped and may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Sum of powers of the players on the combat team.
    pub player_team_power: i64,
    /// Sum of powers of every monster in the roster.
    pub monster_team_power: i64,
    pub player_final_power: i64,
    pub monster_final_power: i64,
}

impl CombatStats {
    pub fn compute(state: &TallyState) -> Self {
        let player_team_power: i64 = state
            .team_players()
            .map(|player| i64::from(player.power()))
            .sum();
        let monster_team_power: i64 = state
            .roster
            .monsters()
            .iter()
            .map(|monster| i64::from(monster.power()))
            .sum();

        Self {
            player_team_power,
            monster_team_power,
            player_final_power: player_team_power
                + i64::from(state.combat.team_mod(Team::Players)),
            monster_final_power: monster_team_power
                + i64::from(state.combat.team_mod(Team::Monsters)),
        }
    }

    pub fn team_power(&self, team: Team) -> i64 {
        match team {
            Team::Players => self.player_team_power,
            Team::Monsters => self.monster_team_power,
        }
    }

    pub fn final_power(&self, team: Team) -> i64 {
        match team {
            Team::Players => self.player_final_power,
            Team::Monsters => self.monster_final_power,
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self.player_final_power.cmp(&self.monster_final_power) {
            Ordering::Greater => Verdict::PlayersWin,
            Ordering::Less => Verdict::MonstersWin,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(player_final: i64, monster_final: i64) -> CombatStats {
        CombatStats {
            player_final_power: player_final,
            monster_final_power: monster_final,
            ..CombatStats::default()
        }
    }

    #[test]
    fn verdict_uses_strict_ordering() {
        assert_eq!(stats(3, 2).verdict(), Verdict::PlayersWin);
        assert_eq!(stats(2, 3).verdict(), Verdict::MonstersWin);
        assert_eq!(stats(-1, -1).verdict(), Verdict::Tie);
    }

    #[test]
    fn empty_state_is_a_tie() {
        let state = TallyState::new();
        assert_eq!(state.combat_stats(), CombatStats::default());
        assert_eq!(state.verdict(), Verdict::Tie);
        assert_eq!(Verdict::Tie.winner(), None);
    }
}
