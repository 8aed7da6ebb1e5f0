//! Pumps keyboard input, command dispatch, and rendering for the CLI client.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tally_core::EngineError;
use tally_frontend_core::{
    EventImpact, TallySession, format, message::MessageLevel, view_model::ViewModel,
};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::AppState;

const POLL_INTERVAL_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Quit,
}

pub struct EventLoop {
    session: TallySession,
    input: InputHandler,
    app_state: AppState,
    view: ViewModel,
    message_panel_height: u16,
}

impl EventLoop {
    pub fn new(session: TallySession, cli_config: &CliConfig) -> Self {
        let view = ViewModel::from_session(&session);
        let mut app_state = AppState::new();
        app_state.sync(&view);

        Self {
            session,
            input: InputHandler::new(cli_config.input.team_mod_step),
            app_state,
            view,
            message_panel_height: cli_config.ui.message_panel_height,
        }
    }

    /// Runs until the user quits and hands the session back.
    pub fn run(mut self, terminal: &mut Tui) -> Result<TallySession> {
        self.render(terminal)?;

        loop {
            if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }

            let mut impact = EventImpact::none();

            // Drain everything already queued before redrawing once
            let control = loop {
                let (control, event_impact) = self.handle_event(event::read()?);
                impact = impact.combine(event_impact);

                if control == LoopControl::Quit || !event::poll(Duration::ZERO)? {
                    break control;
                }
            };

            if impact.requires_redraw {
                self.render(terminal)?;
            }
            if control == LoopControl::Quit {
                break;
            }
        }

        Ok(self.session)
    }

    fn handle_event(&mut self, event: Event) -> (LoopControl, EventImpact) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key),
            Event::Resize(_, _) => (LoopControl::Continue, EventImpact::redraw()),
            _ => (LoopControl::Continue, EventImpact::none()),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> (LoopControl, EventImpact) {
        let action = self.input.handle_key(key, &self.app_state, &self.view);
        let impact = match action {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                self.session.messages_mut().info("Quitting...");
                return (LoopControl::Quit, EventImpact::redraw());
            }
            KeyAction::Submit(command) => self.session.dispatch(command),
            KeyAction::Calculate => self.calculate(),
            KeyAction::FocusNext => {
                self.app_state.focus = self.app_state.focus.toggle();
                EventImpact::redraw()
            }
            KeyAction::MoveSelection(delta) => {
                self.app_state.move_selection(&self.view, delta);
                EventImpact::redraw()
            }
            KeyAction::BeginRename => {
                self.app_state.begin_rename(&self.view);
                EventImpact::redraw()
            }
            KeyAction::Rename(edit) => match self.app_state.edit_rename(edit) {
                Some(command) => self.session.dispatch(command),
                None => EventImpact::redraw(),
            },
            KeyAction::None => EventImpact::none(),
        };

        if impact.requires_redraw {
            self.refresh_view();
        }
        (LoopControl::Continue, impact)
    }

    /// The verdict only makes sense while a combat is running.
    fn calculate(&mut self) -> EventImpact {
        if self.session.state().combat.is_active() {
            self.session.calculate();
        } else {
            let text = format::describe_error(&EngineError::CombatInactive);
            self.session.messages_mut().push(text, MessageLevel::Warning);
        }
        EventImpact::redraw()
    }

    fn refresh_view(&mut self) {
        self.view = ViewModel::from_session(&self.session);
        self.app_state.sync(&self.view);
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            view_model: &self.view,
            messages: self.session.messages(),
            app_state: &self.app_state,
            message_panel_height: self.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tally_frontend_core::FrontendConfig;

    fn event_loop() -> EventLoop {
        let session = TallySession::new(&FrontendConfig::default());
        EventLoop::new(session, &CliConfig::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut event_loop = event_loop();
        let (control, impact) = event_loop.handle_event(press(KeyCode::Char('q')));

        assert_eq!(control, LoopControl::Quit);
        assert!(impact.requires_redraw);
        assert_eq!(
            event_loop.session.messages().latest().map(|entry| entry.text.as_str()),
            Some("Quitting...")
        );
    }

    #[test]
    fn dispatched_keys_refresh_the_view() {
        let mut event_loop = event_loop();
        let (control, impact) = event_loop.handle_event(press(KeyCode::Char('p')));

        assert_eq!(control, LoopControl::Continue);
        assert!(impact.requires_redraw);
        assert_eq!(event_loop.view.players.len(), 2);
    }

    #[test]
    fn calculate_outside_combat_warns() {
        let mut event_loop = event_loop();
        event_loop.handle_event(press(KeyCode::Enter));

        let latest = event_loop.session.messages().latest();
        assert_eq!(latest.map(|entry| entry.level), Some(MessageLevel::Warning));
        assert_eq!(event_loop.session.verdict(), None);
    }

    #[test]
    fn unmapped_events_do_not_redraw() {
        let mut event_loop = event_loop();
        let (control, impact) = event_loop.handle_event(press(KeyCode::F(5)));

        assert_eq!(control, LoopControl::Continue);
        assert!(!impact.requires_redraw);
        assert_eq!(
            event_loop.handle_event(Event::Resize(80, 24)).1,
            EventImpact::redraw()
        );
    }
}
