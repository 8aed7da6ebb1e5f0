//! Human-readable text for outcomes, errors, and verdicts.
use tally_core::{EngineError, MonsterId, Outcome, PlayerId, TallyState, Team, Verdict};

pub fn verdict_text(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::PlayersWin => "Players win!",
        Verdict::MonstersWin => "Monsters win!",
        Verdict::Tie => "Tie! Reinforcements needed!",
    }
}

pub fn team_label(team: Team) -> &'static str {
    match team {
        Team::Players => "Player team",
        Team::Monsters => "Monster team",
    }
}

/// Describes a successful outcome against the state it produced.
pub fn describe_outcome(outcome: &Outcome, state: &TallyState) -> String {
    match outcome {
        Outcome::PlayerAdded(id) => format!("{} joins the table", player_name(state, *id)),
        Outcome::PlayerChanged(id) => match state.roster.player(*id) {
            Some(player) => format!(
                "{}: level {}, bonus {}, power {}",
                player.name(),
                player.level(),
                player.bonus(),
                player.power()
            ),
            None => format!("{id} changed"),
        },
        Outcome::PlayerRemoved { name, .. } => format!("{name} leaves the table"),
        Outcome::CombatStarted { monster } => {
            format!("Combat started against {}", monster_name(state, *monster))
        }
        Outcome::CombatEnded => "Combat ended".to_string(),
        Outcome::TeamChanged {
            player,
            member,
            changed,
        } => {
            let name = player_name(state, *player);
            match (member, changed) {
                (true, true) => format!("{name} joins the fight"),
                (true, false) => format!("{name} is already fighting"),
                (false, true) => format!("{name} leaves the fight"),
                (false, false) => format!("{name} is not fighting"),
            }
        }
        Outcome::MonsterAdded(id) => format!("{} appears", monster_name(state, *id)),
        Outcome::MonsterChanged(id) => match state.roster.monster(*id) {
            Some(monster) => format!(
                "{}: level {}, mod {:+}, power {}",
                monster.name(),
                monster.level(),
                monster.modifier(),
                monster.power()
            ),
            None => format!("{id} changed"),
        },
        Outcome::MonsterRemoved { name, .. } => format!("{name} is defeated and removed"),
        Outcome::TeamModChanged { team, value } => {
            format!("{} modifier is now {value:+}", team_label(*team))
        }
    }
}

pub fn describe_error(error: &EngineError) -> String {
    match error {
        EngineError::PlayerNotFound(id) => format!("No player {id}; ignored"),
        EngineError::MonsterNotFound(id) => format!("No monster {id}; ignored"),
        EngineError::CombatInactive => "Start combat first".to_string(),
        EngineError::IdSpaceExhausted { kind } => format!("Cannot add another {kind}"),
    }
}

fn player_name(state: &TallyState, id: PlayerId) -> String {
    state
        .roster
        .player(id)
        .map(|player| player.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn monster_name(state: &TallyState, id: MonsterId) -> String {
    state
        .roster
        .monster(id)
        .map(|monster| monster.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{TallyConfig, TallyEngine};

    #[test]
    fn describes_join_and_mods() {
        let config = TallyConfig::default();
        let mut state = TallyState::new();
        let mut engine = TallyEngine::new(&mut state, &config);
        let id = engine.add_player().unwrap();

        let joined = Outcome::TeamChanged {
            player: id,
            member: true,
            changed: true,
        };
        assert_eq!(describe_outcome(&joined, &state), "Player 1 joins the fight");

        let modded = Outcome::TeamModChanged {
            team: Team::Monsters,
            value: -2,
        };
        assert_eq!(
            describe_outcome(&modded, &state),
            "Monster team modifier is now -2"
        );
    }

    #[test]
    fn unknown_entities_fall_back_to_ids() {
        let state = TallyState::new();
        let added = Outcome::PlayerAdded(PlayerId::new(3));
        assert_eq!(describe_outcome(&added, &state), "P#3 joins the table");

        let removed = Outcome::MonsterRemoved {
            id: MonsterId::new(2),
            name: "Orc".to_string(),
        };
        assert_eq!(describe_outcome(&removed, &state), "Orc is defeated and removed");
        assert_eq!(verdict_text(Verdict::Tie), "Tie! Reinforcements needed!");
    }
}
