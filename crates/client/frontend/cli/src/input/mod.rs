//! Keyboard-to-command mapping for the CLI client.

use crossterm::event::{KeyCode, KeyEvent};
use tally_core::{Command, Step, Team};
use tally_frontend_core::view_model::ViewModel;

use crate::state::{AppState, Focus, RenameEdit};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch the decoded command to the session.
    Submit(Command),
    /// Compute and show the verdict.
    Calculate,
    FocusNext,
    MoveSelection(i32),
    BeginRename,
    Rename(RenameEdit),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into engine commands for the current selection.
pub struct InputHandler {
    team_mod_step: i32,
}

impl InputHandler {
    pub fn new(team_mod_step: i32) -> Self {
        Self { team_mod_step }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, app: &AppState, view: &ViewModel) -> KeyAction {
        if app.is_renaming() {
            return Self::handle_rename(key);
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch, app, view),
            KeyCode::Tab | KeyCode::BackTab => KeyAction::FocusNext,
            KeyCode::Up => KeyAction::MoveSelection(-1),
            KeyCode::Down => KeyAction::MoveSelection(1),
            KeyCode::Enter => KeyAction::Calculate,
            KeyCode::Delete => Self::remove(app),
            _ => KeyAction::None,
        }
    }

    fn handle_rename(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => KeyAction::Rename(RenameEdit::Insert(ch)),
            KeyCode::Backspace => KeyAction::Rename(RenameEdit::Backspace),
            KeyCode::Enter => KeyAction::Rename(RenameEdit::Commit),
            KeyCode::Esc => KeyAction::Rename(RenameEdit::Cancel),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char, app: &AppState, view: &ViewModel) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'p' => KeyAction::Submit(Command::AddPlayer),
            'm' => KeyAction::Submit(Command::AddMonster),
            'c' => KeyAction::Submit(Command::StartCombat),
            'e' => KeyAction::Submit(Command::EndCombat),
            'r' => KeyAction::BeginRename,
            'x' => Self::remove(app),
            'j' => Self::toggle_membership(app, view),
            '+' | '=' => Self::level(app, Step::Up),
            '-' | '_' => Self::level(app, Step::Down),
            ']' => Self::secondary(app, Step::Up),
            '[' => Self::secondary(app, Step::Down),
            '>' => self.team_mod(Team::Players, 1),
            '<' => self.team_mod(Team::Players, -1),
            '}' => self.team_mod(Team::Monsters, 1),
            '{' => self.team_mod(Team::Monsters, -1),
            _ => KeyAction::None,
        }
    }

    fn level(app: &AppState, step: Step) -> KeyAction {
        let command = match app.focus {
            Focus::Players => app
                .selected_player
                .map(|id| Command::AdjustPlayerLevel { id, step }),
            Focus::Monsters => app
                .selected_monster
                .map(|id| Command::AdjustMonsterLevel { id, step }),
        };
        command.map_or(KeyAction::None, KeyAction::Submit)
    }

    /// Bonus for players, mod for monsters.
    fn secondary(app: &AppState, step: Step) -> KeyAction {
        let command = match app.focus {
            Focus::Players => app
                .selected_player
                .map(|id| Command::AdjustPlayerBonus { id, step }),
            Focus::Monsters => app
                .selected_monster
                .map(|id| Command::AdjustMonsterMod { id, step }),
        };
        command.map_or(KeyAction::None, KeyAction::Submit)
    }

    fn remove(app: &AppState) -> KeyAction {
        let command = match app.focus {
            Focus::Players => app.selected_player.map(|id| Command::RemovePlayer { id }),
            Focus::Monsters => app.selected_monster.map(|id| Command::RemoveMonster { id }),
        };
        command.map_or(KeyAction::None, KeyAction::Submit)
    }

    fn toggle_membership(app: &AppState, view: &ViewModel) -> KeyAction {
        if app.focus != Focus::Players {
            return KeyAction::None;
        }
        let Some(id) = app.selected_player else {
            return KeyAction::None;
        };
        let fighting = view
            .players
            .iter()
            .any(|row| row.id == id && row.in_combat);

        if fighting {
            KeyAction::Submit(Command::LeaveCombat { id })
        } else {
            KeyAction::Submit(Command::JoinCombat { id })
        }
    }

    fn team_mod(&self, team: Team, sign: i32) -> KeyAction {
        KeyAction::Submit(Command::AdjustTeamMod {
            team,
            delta: sign * self.team_mod_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use tally_core::{MonsterId, PlayerId};
    use tally_frontend_core::{FrontendConfig, TallySession};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn fixture() -> (TallySession, AppState) {
        let mut session = TallySession::new(&FrontendConfig::default());
        session.dispatch(Command::StartCombat);
        let mut app = AppState::new();
        app.sync(&ViewModel::from_session(&session));
        (session, app)
    }

    #[test]
    fn maps_roster_keys() {
        let (session, app) = fixture();
        let view = ViewModel::from_session(&session);
        let handler = InputHandler::new(1);

        assert_eq!(
            handler.handle_key(key(KeyCode::Char('P')), &app, &view),
            KeyAction::Submit(Command::AddPlayer)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+')), &app, &view),
            KeyAction::Submit(Command::AdjustPlayerLevel {
                id: PlayerId::new(1),
                step: Step::Up,
            })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('[')), &app, &view),
            KeyAction::Submit(Command::AdjustPlayerBonus {
                id: PlayerId::new(1),
                step: Step::Down,
            })
        );
    }

    #[test]
    fn stat_keys_follow_focus() {
        let (session, mut app) = fixture();
        let view = ViewModel::from_session(&session);
        let handler = InputHandler::new(1);
        app.focus = Focus::Monsters;

        assert_eq!(
            handler.handle_key(key(KeyCode::Char(']')), &app, &view),
            KeyAction::Submit(Command::AdjustMonsterMod {
                id: MonsterId::new(1),
                step: Step::Up,
            })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j')), &app, &view),
            KeyAction::None
        );
    }

    #[test]
    fn fight_key_toggles_membership() {
        let (mut session, app) = fixture();
        let handler = InputHandler::new(1);
        let id = PlayerId::new(1);

        let view = ViewModel::from_session(&session);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j')), &app, &view),
            KeyAction::Submit(Command::JoinCombat { id })
        );

        session.dispatch(Command::JoinCombat { id });
        let view = ViewModel::from_session(&session);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j')), &app, &view),
            KeyAction::Submit(Command::LeaveCombat { id })
        );
    }

    #[test]
    fn team_mod_keys_scale_by_step() {
        let (session, app) = fixture();
        let view = ViewModel::from_session(&session);
        let handler = InputHandler::new(5);

        assert_eq!(
            handler.handle_key(key(KeyCode::Char('{')), &app, &view),
            KeyAction::Submit(Command::AdjustTeamMod {
                team: Team::Monsters,
                delta: -5,
            })
        );
    }

    #[test]
    fn rename_mode_captures_text() {
        let (session, mut app) = fixture();
        let view = ViewModel::from_session(&session);
        let handler = InputHandler::new(1);
        app.begin_rename(&view);

        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &app, &view),
            KeyAction::Rename(RenameEdit::Insert('q'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &app, &view),
            KeyAction::Rename(RenameEdit::Cancel)
        );
    }

    #[test]
    fn maps_calculate_and_quit() {
        let (session, app) = fixture();
        let view = ViewModel::from_session(&session);
        let handler = InputHandler::new(1);

        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &app, &view),
            KeyAction::Calculate
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &app, &view),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::F(2)), &app, &view),
            KeyAction::None
        );
    }
}
