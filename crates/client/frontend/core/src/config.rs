//! Frontend configuration structures and loaders.
//!
//! This module contains UI-facing settings shared across frontend
//! implementations, plus the engine configuration they start the session with.

use std::env;

use tally_core::TallyConfig;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub tally: TallyConfig,
}

impl FrontendConfig {
    /// Upper bound for `TALLY_INITIAL_PLAYERS`.
    pub const MAX_INITIAL_PLAYERS: usize = 64;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TALLY_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `TALLY_SHOW_STAT_MESSAGES` - Log every level/bonus/mod click (default: true)
    /// - `TALLY_INITIAL_PLAYERS` - Players present at startup (default: 1, max: 64)
    /// - `TALLY_PLAYER_NAME_PREFIX` - Default player name prefix (default: "Player")
    /// - `TALLY_MONSTER_NAME_PREFIX` - Default monster name prefix (default: "Monster")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize, _>(&lookup, "TALLY_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = lookup("TALLY_SHOW_STAT_MESSAGES").and_then(|raw| parse_bool(&raw)) {
            config.messages.show_stat_changes = show;
        }

        if let Some(count) = parse::<usize, _>(&lookup, "TALLY_INITIAL_PLAYERS") {
            config.tally.initial_players = count.min(Self::MAX_INITIAL_PLAYERS);
        }
        if let Some(prefix) = lookup("TALLY_PLAYER_NAME_PREFIX") {
            config.tally.player_name_prefix = prefix;
        }
        if let Some(prefix) = lookup("TALLY_MONSTER_NAME_PREFIX") {
            config.tally.monster_name_prefix = prefix;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Whether single-step stat adjustments produce log lines.
    pub show_stat_changes: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_stat_changes: true,
        }
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = FrontendConfig::from_lookup(lookup(&[]));
        assert_eq!(config.messages.capacity, 64);
        assert!(config.messages.show_stat_changes);
        assert_eq!(config.tally, TallyConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("TALLY_MESSAGE_CAPACITY", "0"),
            ("TALLY_SHOW_STAT_MESSAGES", "off"),
            ("TALLY_INITIAL_PLAYERS", " 4 "),
            ("TALLY_PLAYER_NAME_PREFIX", "Hero"),
            ("TALLY_MONSTER_NAME_PREFIX", "Beast"),
        ]));
        assert_eq!(config.messages.capacity, 1);
        assert!(!config.messages.show_stat_changes);
        assert_eq!(config.tally.initial_players, 4);
        assert_eq!(config.tally.player_name_prefix, "Hero");
        assert_eq!(config.tally.monster_name_prefix, "Beast");
    }

    #[test]
    fn initial_players_are_capped() {
        let config =
            FrontendConfig::from_lookup(lookup(&[("TALLY_INITIAL_PLAYERS", "4000000000")]));
        assert_eq!(
            config.tally.initial_players,
            FrontendConfig::MAX_INITIAL_PLAYERS
        );
    }

    #[test]
    fn ignores_unparsable_values() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("TALLY_INITIAL_PLAYERS", "many"),
            ("TALLY_SHOW_STAT_MESSAGES", "maybe"),
        ]));
        assert_eq!(config.tally.initial_players, 1);
        assert!(config.messages.show_stat_changes);
    }
}
