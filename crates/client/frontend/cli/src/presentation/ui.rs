//! UI rendering entry point composing all widgets into one frame.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use tally_frontend_core::{message::MessageLog, view_model::ViewModel};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;
    terminal.draw(|frame| render_frame(frame, ctx, &theme))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Roster and combat
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(2),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, ctx.app_state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    let roster = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[0]);

    widgets::roster::render_players(
        frame,
        roster[0],
        &ctx.view_model.players,
        ctx.app_state,
        theme,
    );
    widgets::roster::render_monsters(
        frame,
        roster[1],
        &ctx.view_model.monsters,
        ctx.app_state,
        theme,
    );
    widgets::combat::render(frame, body[1], ctx.view_model, theme);

    // Borders take two of the panel's lines
    let visible = ctx.message_panel_height.saturating_sub(2);
    let recent: Vec<_> = ctx.messages.recent(visible as usize).collect();
    widgets::messages::render(frame, chunks[2], &recent, visible, theme);

    widgets::footer::render(frame, chunks[3], ctx.app_state);
}
