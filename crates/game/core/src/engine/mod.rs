//! Mutation entry points for [`TallyState`].
//!
//! The [`TallyEngine`] is the only writer of roster and combat state. Each
//! operation either applies completely or returns an [`EngineError`] without
//! touching anything.

mod command;
mod errors;

pub use command::{Command, Outcome};
pub use errors::EngineError;

use crate::config::TallyConfig;
use crate::state::{
    CombatSession, EntityKind, Monster, MonsterId, Player, PlayerId, Step, TallyState, Team,
};
use crate::stats::{CombatStats, Verdict};

/// Engine borrowing the state it mutates and the config it names entities with.
pub struct TallyEngine<'a> {
    state: &'a mut TallyState,
    config: &'a TallyConfig,
}

impl<'a> TallyEngine<'a> {
    pub fn new(state: &'a mut TallyState, config: &'a TallyConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &TallyState {
        &*self.state
    }

    /// Routes a [`Command`] to the matching operation.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, EngineError> {
        match command {
            Command::AddPlayer => self.add_player().map(Outcome::PlayerAdded),
            Command::AdjustPlayerLevel { id, step } => self
                .adjust_player_level(*id, *step)
                .map(|player| Outcome::PlayerChanged(player.id())),
            Command::AdjustPlayerBonus { id, step } => self
                .adjust_player_bonus(*id, *step)
                .map(|player| Outcome::PlayerChanged(player.id())),
            Command::RenamePlayer { id, name } => self
                .rename_player(*id, name.clone())
                .map(|player| Outcome::PlayerChanged(player.id())),
            Command::RemovePlayer { id } => self
                .remove_player(*id)
                .map(|player| Outcome::PlayerRemoved {
                    id: player.id(),
                    name: player.name().to_string(),
                }),

            Command::StartCombat => self
                .start_combat()
                .map(|monster| Outcome::CombatStarted { monster }),
            Command::EndCombat => {
                self.end_combat();
                Ok(Outcome::CombatEnded)
            }
            Command::JoinCombat { id } => {
                let changed = self.join_combat(*id)?;
                Ok(Outcome::TeamChanged {
                    player: *id,
                    member: true,
                    changed,
                })
            }
            Command::LeaveCombat { id } => {
                let changed = self.leave_combat(*id);
                Ok(Outcome::TeamChanged {
                    player: *id,
                    member: false,
                    changed,
                })
            }

            Command::AddMonster => self.add_monster().map(Outcome::MonsterAdded),
            Command::AdjustMonsterLevel { id, step } => self
                .adjust_monster_level(*id, *step)
                .map(|monster| Outcome::MonsterChanged(monster.id())),
            Command::AdjustMonsterMod { id, step } => self
                .adjust_monster_mod(*id, *step)
                .map(|monster| Outcome::MonsterChanged(monster.id())),
            Command::RenameMonster { id, name } => self
                .rename_monster(*id, name.clone())
                .map(|monster| Outcome::MonsterChanged(monster.id())),
            Command::RemoveMonster { id } => self
                .remove_monster(*id)
                .map(|monster| Outcome::MonsterRemoved {
                    id: monster.id(),
                    name: monster.name().to_string(),
                }),

            Command::AdjustTeamMod { team, delta } => Ok(Outcome::TeamModChanged {
                team: *team,
                value: self.adjust_team_mod(*team, *delta),
            }),
        }
    }

    // ===== players =====

    pub fn add_player(&mut self) -> Result<PlayerId, EngineError> {
        self.state
            .roster
            .add_player(self.config)
            .ok_or(EngineError::IdSpaceExhausted {
                kind: EntityKind::Player,
            })
    }

    pub fn adjust_player_level(
        &mut self,
        id: PlayerId,
        step: Step,
    ) -> Result<&Player, EngineError> {
        let player = self.player_mut(id)?;
        player.adjust_level(step);
        Ok(&*player)
    }

    pub fn adjust_player_bonus(
        &mut self,
        id: PlayerId,
        step: Step,
    ) -> Result<&Player, EngineError> {
        let player = self.player_mut(id)?;
        player.adjust_bonus(step);
        Ok(&*player)
    }

    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<&Player, EngineError> {
        let player = self.player_mut(id)?;
        player.rename(name);
        Ok(&*player)
    }

    /// Leaves the combat team first, so no dangling id survives the removal.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, EngineError> {
        self.state.combat.leave(id);
        self.state
            .roster
            .remove_player(id)
            .ok_or(EngineError::PlayerNotFound(id))
    }

    // ===== combat session =====

    /// Opens a fresh session and returns the id of its default monster.
    pub fn start_combat(&mut self) -> Result<MonsterId, EngineError> {
        self.state.combat.start();
        self.state.roster.clear_monsters();
        self.add_monster()
    }

    pub fn end_combat(&mut self) {
        self.state.combat.end();
        self.state.roster.clear_monsters();
    }

    /// Returns `true` when the player was newly added to the team.
    pub fn join_combat(&mut self, id: PlayerId) -> Result<bool, EngineError> {
        if !self.state.combat.is_active() {
            return Err(EngineError::CombatInactive);
        }
        if self.state.roster.player(id).is_none() {
            return Err(EngineError::PlayerNotFound(id));
        }
        Ok(self.state.combat.join(id))
    }

    /// Returns `true` when the player was on the team.
    pub fn leave_combat(&mut self, id: PlayerId) -> bool {
        self.state.combat.leave(id)
    }

    pub fn adjust_team_mod(&mut self, team: Team, delta: i32) -> i32 {
        self.state.combat.adjust_team_mod(team, delta)
    }

    pub fn combat(&self) -> &CombatSession {
        &self.state.combat
    }

    // ===== monsters =====

    pub fn add_monster(&mut self) -> Result<MonsterId, EngineError> {
        self.state
            .roster
            .add_monster(self.config)
            .ok_or(EngineError::IdSpaceExhausted {
                kind: EntityKind::Monster,
            })
    }

    pub fn adjust_monster_level(
        &mut self,
        id: MonsterId,
        step: Step,
    ) -> Result<&Monster, EngineError> {
        let monster = self.monster_mut(id)?;
        monster.adjust_level(step);
        Ok(&*monster)
    }

    pub fn adjust_monster_mod(
        &mut self,
        id: MonsterId,
        step: Step,
    ) -> Result<&Monster, EngineError> {
        let monster = self.monster_mut(id)?;
        monster.adjust_modifier(step);
        Ok(&*monster)
    }

    pub fn rename_monster(
        &mut self,
        id: MonsterId,
        name: impl Into<String>,
    ) -> Result<&Monster, EngineError> {
        let monster = self.monster_mut(id)?;
        monster.rename(name);
        Ok(&*monster)
    }

    pub fn remove_monster(&mut self, id: MonsterId) -> Result<Monster, EngineError> {
        self.state
            .roster
            .remove_monster(id)
            .ok_or(EngineError::MonsterNotFound(id))
    }

    // ===== queries =====

    pub fn combat_stats(&self) -> CombatStats {
        self.state.combat_stats()
    }

    pub fn verdict(&self) -> Verdict {
        self.state.verdict()
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, EngineError> {
        self.state
            .roster
            .player_mut(id)
            .ok_or(EngineError::PlayerNotFound(id))
    }

    fn monster_mut(&mut self, id: MonsterId) -> Result<&mut Monster, EngineError> {
        self.state
            .roster
            .monster_mut(id)
            .ok_or(EngineError::MonsterNotFound(id))
    }
}
