//! Property tests: stat invariants hold after any sequence of adjustments.

use proptest::prelude::*;
use tally_core::{Command, PlayerId, Step, TallyConfig, TallyEngine, TallyState, Team};

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Up), Just(Step::Down)]
}

#[derive(Clone, Debug)]
enum Op {
    Level(Step),
    Bonus(Step),
    MonsterLevel(Step),
    MonsterMod(Step),
    Join,
    Leave,
    TeamMod(Team, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        step().prop_map(Op::Level),
        step().prop_map(Op::Bonus),
        step().prop_map(Op::MonsterLevel),
        step().prop_map(Op::MonsterMod),
        Just(Op::Join),
        Just(Op::Leave),
        (prop_oneof![Just(Team::Players), Just(Team::Monsters)], -5i32..=5)
            .prop_map(|(team, delta)| Op::TeamMod(team, delta)),
    ]
}

proptest! {
    #[test]
    fn powers_track_their_components(ops in prop::collection::vec(op(), 0..64)) {
        let config = TallyConfig::default();
        let mut state = TallyState::new();
        let mut engine = TallyEngine::new(&mut state, &config);
        let player = engine.add_player().unwrap();
        let monster = engine.start_combat().unwrap();

        for op in ops {
            let command = match op {
                Op::Level(step) => Command::AdjustPlayerLevel { id: player, step },
                Op::Bonus(step) => Command::AdjustPlayerBonus { id: player, step },
                Op::MonsterLevel(step) => Command::AdjustMonsterLevel { id: monster, step },
                Op::MonsterMod(step) => Command::AdjustMonsterMod { id: monster, step },
                Op::Join => Command::JoinCombat { id: player },
                Op::Leave => Command::LeaveCombat { id: player },
                Op::TeamMod(team, delta) => Command::AdjustTeamMod { team, delta },
            };
            engine.execute(&command).unwrap();
        }

        let state = engine.state();
        let p = state.roster.player(player).unwrap();
        prop_assert!(p.level() >= 1);
        prop_assert!(p.bonus() >= 0);
        prop_assert_eq!(p.power(), p.level() + p.bonus());

        let m = state.roster.monster(monster).unwrap();
        prop_assert!(m.level() >= 1);
        prop_assert_eq!(m.power(), m.level() + m.modifier());

        let team = state.combat.player_team();
        prop_assert!(team.len() <= 1);

        let stats = state.combat_stats();
        prop_assert_eq!(
            stats.player_final_power - stats.player_team_power,
            i64::from(state.combat.team_mod(Team::Players))
        );
        prop_assert_eq!(stats.monster_team_power, i64::from(m.power()));
    }

    #[test]
    fn joining_twice_matches_joining_once(extra_joins in 1usize..4) {
        let config = TallyConfig::default().with_initial_players(2);
        let mut state = TallyState::with_initial_players(&config);
        let mut engine = TallyEngine::new(&mut state, &config);
        engine.start_combat().unwrap();

        let id = PlayerId::new(2);
        engine.join_combat(id).unwrap();
        let once = engine.combat().player_team().to_vec();
        for _ in 0..extra_joins {
            engine.join_combat(id).unwrap();
        }
        prop_assert_eq!(engine.combat().player_team(), once.as_slice());
    }
}
