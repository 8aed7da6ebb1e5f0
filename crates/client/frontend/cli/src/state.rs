//! Application state for focus, selection, and rename editing.

use tally_core::{Command, MonsterId, PlayerId};
use tally_frontend_core::view_model::ViewModel;

/// Which roster list the selection keys act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Players,
    Monsters,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Players => Focus::Monsters,
            Focus::Monsters => Focus::Players,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameTarget {
    Player(PlayerId),
    Monster(MonsterId),
}

/// Top-level application mode determining input handling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Normal,
    /// Editing the name of the selected entity.
    Renaming {
        target: RenameTarget,
        buffer: String,
    },
}

/// Single edit applied to the rename buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameEdit {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
}

/// Mutable UI state. Selections are held by id so they survive reordering.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    pub focus: Focus,
    pub selected_player: Option<PlayerId>,
    pub selected_monster: Option<MonsterId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_renaming(&self) -> bool {
        matches!(self.mode, AppMode::Renaming { .. })
    }

    /// Re-points selections that refer to removed rows at the first row.
    pub fn sync(&mut self, view: &ViewModel) {
        if !self
            .selected_player
            .is_some_and(|id| view.players.iter().any(|row| row.id == id))
        {
            self.selected_player = view.players.first().map(|row| row.id);
        }
        if !self
            .selected_monster
            .is_some_and(|id| view.monsters.iter().any(|row| row.id == id))
        {
            self.selected_monster = view.monsters.first().map(|row| row.id);
        }
    }

    /// Moves the focused selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, view: &ViewModel, delta: i32) {
        match self.focus {
            Focus::Players => {
                let ids: Vec<_> = view.players.iter().map(|row| row.id).collect();
                self.selected_player = step_through(&ids, self.selected_player, delta);
            }
            Focus::Monsters => {
                let ids: Vec<_> = view.monsters.iter().map(|row| row.id).collect();
                self.selected_monster = step_through(&ids, self.selected_monster, delta);
            }
        }
    }

    /// Enters rename mode pre-filled with the focused entity's name.
    pub fn begin_rename(&mut self, view: &ViewModel) {
        let pending = match self.focus {
            Focus::Players => self.selected_player.and_then(|id| {
                view.players
                    .iter()
                    .find(|row| row.id == id)
                    .map(|row| (RenameTarget::Player(id), row.name.clone()))
            }),
            Focus::Monsters => self.selected_monster.and_then(|id| {
                view.monsters
                    .iter()
                    .find(|row| row.id == id)
                    .map(|row| (RenameTarget::Monster(id), row.name.clone()))
            }),
        };

        if let Some((target, buffer)) = pending {
            self.mode = AppMode::Renaming { target, buffer };
        }
    }

    /// Applies an edit; a commit yields the rename command to dispatch.
    pub fn edit_rename(&mut self, edit: RenameEdit) -> Option<Command> {
        let AppMode::Renaming { target, buffer } = &mut self.mode else {
            return None;
        };

        match edit {
            RenameEdit::Insert(ch) => {
                buffer.push(ch);
                None
            }
            RenameEdit::Backspace => {
                buffer.pop();
                None
            }
            RenameEdit::Cancel => {
                self.mode = AppMode::Normal;
                None
            }
            RenameEdit::Commit => {
                let name = std::mem::take(buffer);
                let command = match *target {
                    RenameTarget::Player(id) => Command::RenamePlayer { id, name },
                    RenameTarget::Monster(id) => Command::RenameMonster { id, name },
                };
                self.mode = AppMode::Normal;
                Some(command)
            }
        }
    }
}

fn step_through<T: Copy + PartialEq>(ids: &[T], current: Option<T>, delta: i32) -> Option<T> {
    if ids.is_empty() {
        return None;
    }
    let index = current
        .and_then(|id| ids.iter().position(|candidate| *candidate == id))
        .unwrap_or(0);
    let last = ids.len() - 1;
    let moved = if delta < 0 {
        index.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (index + delta as usize).min(last)
    };
    Some(ids[moved])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_frontend_core::{FrontendConfig, TallySession};

    fn view_with_players(count: usize) -> (TallySession, ViewModel) {
        let mut config = FrontendConfig::default();
        config.tally.initial_players = count;
        let session = TallySession::new(&config);
        let view = ViewModel::from_session(&session);
        (session, view)
    }

    #[test]
    fn sync_selects_first_row() {
        let (_, view) = view_with_players(2);
        let mut app = AppState::new();
        app.sync(&view);
        assert_eq!(app.selected_player, Some(PlayerId::new(1)));
        assert_eq!(app.selected_monster, None);
    }

    #[test]
    fn selection_is_clamped() {
        let (_, view) = view_with_players(3);
        let mut app = AppState::new();
        app.sync(&view);

        app.move_selection(&view, 1);
        app.move_selection(&view, 5);
        assert_eq!(app.selected_player, Some(PlayerId::new(3)));

        app.move_selection(&view, -10);
        assert_eq!(app.selected_player, Some(PlayerId::new(1)));
    }

    #[test]
    fn sync_recovers_from_removed_selection() {
        let (mut session, view) = view_with_players(2);
        let mut app = AppState::new();
        app.sync(&view);
        app.move_selection(&view, 1);

        session.dispatch(Command::RemovePlayer {
            id: PlayerId::new(2),
        });
        app.sync(&ViewModel::from_session(&session));
        assert_eq!(app.selected_player, Some(PlayerId::new(1)));
    }

    #[test]
    fn rename_round_trip() {
        let (_, view) = view_with_players(1);
        let mut app = AppState::new();
        app.sync(&view);
        app.begin_rename(&view);
        assert!(app.is_renaming());

        app.edit_rename(RenameEdit::Backspace);
        app.edit_rename(RenameEdit::Insert('X'));
        let command = app.edit_rename(RenameEdit::Commit);

        assert_eq!(
            command,
            Some(Command::RenamePlayer {
                id: PlayerId::new(1),
                name: "Player X".to_string(),
            })
        );
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn cancel_discards_buffer() {
        let (_, view) = view_with_players(1);
        let mut app = AppState::new();
        app.sync(&view);
        app.begin_rename(&view);

        assert_eq!(app.edit_rename(RenameEdit::Cancel), None);
        assert!(!app.is_renaming());
    }
}
