//! Player and monster records.
//!
//! Stat fields are private so `power` can only change through the mutators,
//! each of which recomputes it before returning.

use crate::config::TallyConfig;

use super::common::{MonsterId, PlayerId, Step};

/// A participant who may opt into combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    level: i32,
    bonus: i32,
    /// Always `level + bonus`.
    power: i32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        let mut player = Self {
            id,
            name: name.into(),
            level: TallyConfig::DEFAULT_LEVEL,
            bonus: TallyConfig::DEFAULT_BONUS,
            power: 0,
        };
        player.refresh_power();
        player
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    /// Level never drops below [`TallyConfig::MIN_LEVEL`].
    pub fn adjust_level(&mut self, step: Step) {
        self.level = self
            .level
            .saturating_add(step.delta())
            .max(TallyConfig::MIN_LEVEL);
        self.refresh_power();
    }

    /// Bonus never drops below [`TallyConfig::MIN_BONUS`].
    pub fn adjust_bonus(&mut self, step: Step) {
        self.bonus = self
            .bonus
            .saturating_add(step.delta())
            .max(TallyConfig::MIN_BONUS);
        self.refresh_power();
    }

    /// Stored verbatim, no trimming.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    fn refresh_power(&mut self) {
        self.power = self.level.saturating_add(self.bonus);
    }
}

/// A member of the encounter. Every monster in the roster fights.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    id: MonsterId,
    name: String,
    level: i32,
    /// Signed and unbounded.
    modifier: i32,
    /// Always `level + modifier`.
    power: i32,
}

impl Monster {
    pub fn new(id: MonsterId, name: impl Into<String>) -> Self {
        let mut monster = Self {
            id,
            name: name.into(),
            level: TallyConfig::DEFAULT_LEVEL,
            modifier: TallyConfig::DEFAULT_MOD,
            power: 0,
        };
        monster.refresh_power();
        monster
    }

    pub fn id(&self) -> MonsterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn adjust_level(&mut self, step: Step) {
        self.level = self
            .level
            .saturating_add(step.delta())
            .max(TallyConfig::MIN_LEVEL);
        self.refresh_power();
    }

    pub fn adjust_modifier(&mut self, step: Step) {
        self.modifier = self.modifier.saturating_add(step.delta());
        self.refresh_power();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    fn refresh_power(&mut self) {
        self.power = self.level.saturating_add(self.modifier);
    }
}
