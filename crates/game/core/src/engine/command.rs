//! Serializable descriptions of engine mutations and their results.

use crate::state::{MonsterId, PlayerId, Step, Team};

/// One mutating engine operation, as issued by a frontend gesture.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    AddPlayer,
    AdjustPlayerLevel { id: PlayerId, step: Step },
    AdjustPlayerBonus { id: PlayerId, step: Step },
    RenamePlayer { id: PlayerId, name: String },
    RemovePlayer { id: PlayerId },

    StartCombat,
    EndCombat,
    JoinCombat { id: PlayerId },
    LeaveCombat { id: PlayerId },

    AddMonster,
    AdjustMonsterLevel { id: MonsterId, step: Step },
    AdjustMonsterMod { id: MonsterId, step: Step },
    RenameMonster { id: MonsterId, name: String },
    RemoveMonster { id: MonsterId },

    AdjustTeamMod { team: Team, delta: i32 },
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// What a successful [`Command`] changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    PlayerAdded(PlayerId),
    PlayerChanged(PlayerId),
    PlayerRemoved { id: PlayerId, name: String },

    /// Combat opened with its default monster.
    CombatStarted { monster: MonsterId },
    CombatEnded,
    /// `member` is the player's membership after the call; `changed` is
    /// `false` for a repeated join or a leave by a non-member.
    TeamChanged {
        player: PlayerId,
        member: bool,
        changed: bool,
    },

    MonsterAdded(MonsterId),
    MonsterChanged(MonsterId),
    MonsterRemoved { id: MonsterId, name: String },

    TeamModChanged { team: Team, value: i32 },
}
