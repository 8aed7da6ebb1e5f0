//! Combat panel showing the fighting team, team totals, and the verdict.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_core::Team;
use tally_frontend_core::{
    PresentationMapper,
    format,
    view_model::{CombatPanel, ViewModel},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines = match &view_model.combat {
        Some(panel) => combat_lines(panel, theme),
        None => vec![Line::from(Span::styled(
            "No combat running. Press [c] to start one.",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Combat"));

    frame.render_widget(paragraph, area);
}

fn combat_lines<'a, T: PresentationMapper<Style = Style>>(
    panel: &'a CombatPanel,
    theme: &T,
) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(panel.participants.len() + 6);

    if panel.participants.is_empty() {
        lines.push(Line::from(Span::styled(
            "No players fighting. Press [j] on a player to join.",
            Style::default().fg(Color::Gray),
        )));
    }
    for row in &panel.participants {
        lines.push(Line::from(vec![
            Span::styled(row.name.as_str(), theme.style_team(Team::Players)),
            Span::raw(format!("  Power {}", row.power)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(team_line(
        Team::Players,
        panel.stats.team_power(Team::Players),
        panel.player_team_mod,
        panel.stats.final_power(Team::Players),
        theme,
    ));
    lines.push(team_line(
        Team::Monsters,
        panel.stats.team_power(Team::Monsters),
        panel.monster_team_mod,
        panel.stats.final_power(Team::Monsters),
        theme,
    ));

    if let Some(verdict) = panel.verdict {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format::verdict_text(verdict),
            theme.style_verdict(verdict),
        )));
    }

    lines
}

fn team_line<'a, T: PresentationMapper<Style = Style>>(
    team: Team,
    power: i64,
    team_mod: i32,
    final_power: i64,
    theme: &T,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(format::team_label(team), theme.style_team(team)),
        Span::raw(format!(": {power} {team_mod:+} = ")),
        Span::styled(final_power.to_string(), theme.style_team(team)),
    ])
}
