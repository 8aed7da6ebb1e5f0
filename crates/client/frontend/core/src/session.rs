//! Single owner of the engine state for a running frontend.
//!
//! Frontends translate gestures into [`Command`]s and hand them to
//! [`TallySession::dispatch`]; afterwards they re-read the state or build a
//! [`crate::view_model::ViewModel`] to redraw. Rejected commands are logged
//! and reported in the message log, never propagated as failures.
use tally_core::{
    Command, CoreError, Outcome, TallyConfig, TallyEngine, TallyState, Verdict,
};

use crate::config::{FrontendConfig, MessageConfig};
use crate::event::EventImpact;
use crate::format;
use crate::message::{MessageLevel, MessageLog};

pub struct TallySession {
    state: TallyState,
    config: TallyConfig,
    message_config: MessageConfig,
    messages: MessageLog,
    /// Verdict from the last explicit calculation; cleared by any later change.
    verdict: Option<Verdict>,
}

impl TallySession {
    pub fn new(config: &FrontendConfig) -> Self {
        let state = TallyState::with_initial_players(&config.tally);
        tracing::info!(
            players = state.roster.players().len(),
            "tally session created"
        );

        Self {
            state,
            config: config.tally.clone(),
            message_config: config.messages.clone(),
            messages: MessageLog::new(config.messages.capacity),
            verdict: None,
        }
    }

    pub fn state(&self) -> &TallyState {
        &self.state
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Applies a command through the engine and records what happened.
    pub fn dispatch(&mut self, command: Command) -> EventImpact {
        let name = command.as_str();
        let result = TallyEngine::new(&mut self.state, &self.config).execute(&command);

        match result {
            Ok(outcome) => {
                tracing::debug!(command = name, ?outcome, "command applied");
                self.verdict = None;
                if self.should_report(&outcome) {
                    let text = format::describe_outcome(&outcome, &self.state);
                    self.messages.info(text);
                }
            }
            Err(error) => {
                let severity = error.severity();
                tracing::warn!(
                    command = name,
                    code = error.error_code(),
                    severity = severity.as_str(),
                    %error,
                    "command rejected"
                );
                let level = if severity.is_recoverable() {
                    MessageLevel::Warning
                } else {
                    MessageLevel::Error
                };
                self.messages.push(format::describe_error(&error), level);
            }
        }

        EventImpact::redraw()
    }

    /// Computes and stores the verdict for the current totals.
    pub fn calculate(&mut self) -> Verdict {
        let stats = self.state.combat_stats();
        let verdict = stats.verdict();
        tracing::info!(
            player_final = stats.player_final_power,
            monster_final = stats.monster_final_power,
            %verdict,
            "combat calculated"
        );

        self.verdict = Some(verdict);
        self.messages.push(
            format!(
                "{} ({} vs {})",
                format::verdict_text(verdict),
                stats.player_final_power,
                stats.monster_final_power
            ),
            MessageLevel::Result,
        );
        verdict
    }

    fn should_report(&self, outcome: &Outcome) -> bool {
        let is_stat_change = matches!(
            outcome,
            Outcome::PlayerChanged(_) | Outcome::MonsterChanged(_)
        );
        !is_stat_change || self.message_config.show_stat_changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{PlayerId, Step, Team};

    fn session() -> TallySession {
        TallySession::new(&FrontendConfig::default())
    }

    #[test]
    fn starts_with_configured_players() {
        let session = session();
        assert_eq!(session.state().roster.players().len(), 1);
        assert!(session.messages().is_empty());
        assert_eq!(session.verdict(), None);
    }

    #[test]
    fn rejected_commands_are_reported_not_raised() {
        let mut session = session();
        let before = session.state().clone();

        let impact = session.dispatch(Command::JoinCombat {
            id: PlayerId::new(1),
        });
        assert!(impact.requires_redraw);
        assert_eq!(session.state(), &before);

        let latest = session.messages().latest().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);
        assert_eq!(latest.text, "Start combat first");
    }

    #[test]
    fn calculate_stores_verdict_until_next_change() {
        let mut session = session();
        session.dispatch(Command::StartCombat);
        session.dispatch(Command::JoinCombat {
            id: PlayerId::new(1),
        });

        assert_eq!(session.calculate(), Verdict::Tie);
        assert_eq!(session.verdict(), Some(Verdict::Tie));
        assert_eq!(
            session.messages().latest().map(|entry| entry.level),
            Some(MessageLevel::Result)
        );

        session.dispatch(Command::AdjustTeamMod {
            team: Team::Players,
            delta: 1,
        });
        assert_eq!(session.verdict(), None);
        assert_eq!(session.calculate(), Verdict::PlayersWin);
    }

    #[test]
    fn restarting_combat_clears_verdict_but_rejections_do_not() {
        let mut session = session();
        session.dispatch(Command::StartCombat);
        assert_eq!(session.calculate(), Verdict::MonstersWin);

        session.dispatch(Command::RemoveMonster {
            id: tally_core::MonsterId::new(99),
        });
        assert_eq!(session.verdict(), Some(Verdict::MonstersWin));

        session.dispatch(Command::StartCombat);
        assert_eq!(session.verdict(), None);
    }

    #[test]
    fn stat_messages_can_be_silenced() {
        let mut config = FrontendConfig::default();
        config.messages.show_stat_changes = false;
        let mut session = TallySession::new(&config);

        session.dispatch(Command::AdjustPlayerLevel {
            id: PlayerId::new(1),
            step: Step::Up,
        });
        assert!(session.messages().is_empty());
        assert_eq!(session.state().roster.players()[0].level(), 2);

        session.dispatch(Command::AddPlayer);
        assert_eq!(session.messages().len(), 1);
    }
}
