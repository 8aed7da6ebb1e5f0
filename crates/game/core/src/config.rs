use crate::state::{MonsterId, PlayerId};

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyConfig {
    /// Number of default players seeded into a fresh state.
    pub initial_players: usize,
    /// Prefix of generated player names (`"{prefix} {id}"`).
    pub player_name_prefix: String,
    /// Prefix of generated monster names (`"{prefix} {id}"`).
    pub monster_name_prefix: String,
}

impl TallyConfig {
    // ===== stat bounds =====
    /// Floor for player and monster levels.
    pub const MIN_LEVEL: i32 = 1;
    /// Floor for player bonuses. Monster mods are unbounded.
    pub const MIN_BONUS: i32 = 0;

    // ===== defaults for freshly added entities =====
    pub const DEFAULT_LEVEL: i32 = 1;
    pub const DEFAULT_BONUS: i32 = 0;
    pub const DEFAULT_MOD: i32 = 0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INITIAL_PLAYERS: usize = 1;
    pub const DEFAULT_PLAYER_NAME_PREFIX: &'static str = "Player";
    pub const DEFAULT_MONSTER_NAME_PREFIX: &'static str = "Monster";

    pub fn new() -> Self {
        Self {
            initial_players: Self::DEFAULT_INITIAL_PLAYERS,
            player_name_prefix: Self::DEFAULT_PLAYER_NAME_PREFIX.to_string(),
            monster_name_prefix: Self::DEFAULT_MONSTER_NAME_PREFIX.to_string(),
        }
    }

    pub fn with_initial_players(mut self, initial_players: usize) -> Self {
        self.initial_players = initial_players;
        self
    }

    pub fn with_name_prefixes(
        mut self,
        player_prefix: impl Into<String>,
        monster_prefix: impl Into<String>,
    ) -> Self {
        self.player_name_prefix = player_prefix.into();
        self.monster_name_prefix = monster_prefix.into();
        self
    }

    /// Default display name for a newly added player.
    pub fn player_name(&self, id: PlayerId) -> String {
        format!("{} {}", self.player_name_prefix, id.get())
    }

    /// Default display name for a newly added monster.
    pub fn monster_name(&self, id: MonsterId) -> String {
        format!("{} {}", self.monster_name_prefix, id.get())
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_use_prefix_and_id() {
        let config = TallyConfig::default();
        assert_eq!(config.player_name(PlayerId::new(3)), "Player 3");
        assert_eq!(config.monster_name(MonsterId::new(1)), "Monster 1");
    }

    #[test]
    fn prefixes_are_configurable() {
        let config = TallyConfig::new().with_name_prefixes("Hero", "Beast");
        assert_eq!(config.player_name(PlayerId::new(2)), "Hero 2");
        assert_eq!(config.monster_name(MonsterId::new(7)), "Beast 7");
    }
}
