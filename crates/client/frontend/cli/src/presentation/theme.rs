//! Ratatui theme implementation of PresentationMapper.

use ratatui::style::{Color, Modifier, Style};
use tally_core::{Team, Verdict};
use tally_frontend_core::{PresentationMapper, message::MessageLevel};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
            MessageLevel::Result => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn style_verdict(&self, verdict: Verdict) -> Self::Style {
        let base = match verdict.winner() {
            Some(team) => self.style_team(team),
            None => Style::default().fg(Color::Magenta),
        };
        base.add_modifier(Modifier::BOLD)
    }

    fn style_team(&self, team: Team) -> Self::Style {
        match team {
            Team::Players => Style::default().fg(Color::Cyan),
            Team::Monsters => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize_selected(&self, base_style: Self::Style) -> Self::Style {
        base_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }
}
