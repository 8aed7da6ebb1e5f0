//! Insertion-ordered player and monster collections.
//!
//! Entity counts are small (a table of people and one encounter), so lookups
//! are linear scans over `Vec`s that preserve display order.

use crate::config::TallyConfig;

use super::types::{IdSequence, Monster, MonsterId, Player, PlayerId};

/// All known players and monsters, each with its own id sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    players: Vec<Player>,
    monsters: Vec<Monster>,
    player_ids: IdSequence,
    monster_ids: IdSequence,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id() == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id() == id)
    }

    /// Id the next added monster will receive.
    pub fn next_monster_id(&self) -> MonsterId {
        MonsterId::new(self.monster_ids.peek())
    }

    /// Appends a default player. `None` means the id space is exhausted.
    pub fn add_player(&mut self, config: &TallyConfig) -> Option<PlayerId> {
        let id = PlayerId::new(self.player_ids.allocate()?);
        self.players.push(Player::new(id, config.player_name(id)));
        Some(id)
    }

    /// Appends a default monster. `None` means the id space is exhausted.
    pub fn add_monster(&mut self, config: &TallyConfig) -> Option<MonsterId> {
        let id = MonsterId::new(self.monster_ids.allocate()?);
        self.monsters.push(Monster::new(id, config.monster_name(id)));
        Some(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|player| player.id() == id)?;
        Some(self.players.remove(index))
    }

    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.monsters.iter().position(|monster| monster.id() == id)?;
        Some(self.monsters.remove(index))
    }

    /// Drops every monster and restarts monster ids at 1.
    pub fn clear_monsters(&mut self) {
        self.monsters.clear();
        self.monster_ids.reset();
    }
}
