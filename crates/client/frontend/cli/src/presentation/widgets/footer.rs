//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match &app_state.mode {
        AppMode::Normal => vec![Line::from(vec![
            Span::raw("[p/m] Add | "),
            Span::raw("[c/e] Start/End | "),
            Span::raw("[Tab/↑↓] Select | "),
            Span::raw("[+/-] Level | "),
            Span::raw("[[ ]] Bonus/Mod | "),
            Span::raw("[j] Fight | "),
            Span::raw("[<>{}] Team mod | "),
            Span::raw("[r] Rename | "),
            Span::raw("[x] Remove | "),
            Span::raw("[Enter] Calculate | "),
            Span::raw("[q] Quit"),
        ])],
        AppMode::Renaming { buffer, .. } => vec![Line::from(vec![
            Span::raw("Name: "),
            Span::styled(buffer.as_str(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
            Span::raw(" | [Enter] Save | [ESC] Cancel"),
        ])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::TOP));

    frame.render_widget(paragraph, area);
}
