//! Player and monster list widgets.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tally_core::Team;
use tally_frontend_core::{
    PresentationMapper,
    view_model::{MonsterRow, PlayerRow},
};

use crate::state::{AppState, Focus};

pub fn render_players<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    players: &[PlayerRow],
    app_state: &AppState,
    theme: &T,
) {
    let focused = app_state.focus == Focus::Players;
    let items: Vec<ListItem> = players
        .iter()
        .map(|row| {
            let marker = if row.in_combat { "⚔ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(row.name.clone(), theme.style_team(Team::Players)),
                Span::raw(format!(
                    "  Lv {}  Bonus {}  Power {}",
                    row.level, row.bonus, row.power
                )),
            ]);
            let selected = focused && app_state.selected_player == Some(row.id);
            item(line, selected, theme)
        })
        .collect();

    frame.render_widget(List::new(items).block(block("Players", focused)), area);
}

pub fn render_monsters<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    monsters: &[MonsterRow],
    app_state: &AppState,
    theme: &T,
) {
    let focused = app_state.focus == Focus::Monsters;
    let items: Vec<ListItem> = monsters
        .iter()
        .map(|row| {
            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(row.name.clone(), theme.style_team(Team::Monsters)),
                Span::raw(format!(
                    "  Lv {}  Mod {:+}  Power {}",
                    row.level, row.modifier, row.power
                )),
            ]);
            let selected = focused && app_state.selected_monster == Some(row.id);
            item(line, selected, theme)
        })
        .collect();

    frame.render_widget(List::new(items).block(block("Monsters", focused)), area);
}

fn item<'a, T: PresentationMapper<Style = Style>>(
    line: Line<'a>,
    selected: bool,
    theme: &T,
) -> ListItem<'a> {
    let item = ListItem::new(line);
    if selected {
        item.style(theme.emphasize_selected(Style::default()))
    } else {
        item
    }
}

fn block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}
