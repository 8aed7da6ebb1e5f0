//! Header widget displaying combat status and the current mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_frontend_core::view_model::ViewModel;

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let (status, status_color) = match &view_model.combat {
        Some(_) => ("In combat", Color::LightRed),
        None => ("Idle", Color::Gray),
    };
    let mode_text = match app_state.mode {
        AppMode::Normal => "",
        AppMode::Renaming { .. } => " [RENAME]",
    };

    let text = vec![Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            status,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Players: "),
        Span::styled(
            view_model.players.len().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Monsters: "),
        Span::styled(
            view_model.monsters.len().to_string(),
            Style::default().fg(Color::LightRed),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Tally"));

    frame.render_widget(paragraph, area);
}
