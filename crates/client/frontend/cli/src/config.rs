//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub input: InputConfig,
    /// Log session directory name; a timestamp is used when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TALLY_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8, min: 3)
    /// - `TALLY_TEAM_MOD_STEP` - Amount one team modifier key press adds (default: 1)
    /// - `TALLY_SESSION_ID` - Log session directory name
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("TALLY_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(step) = read_env::<i32>("TALLY_TEAM_MOD_STEP") {
            config.input.team_mod_step = step.max(1);
        }
        config.session_id = env::var("TALLY_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InputConfig {
    pub team_mod_step: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { team_mod_step: 1 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
