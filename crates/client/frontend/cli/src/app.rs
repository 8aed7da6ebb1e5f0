//! Glue code tying the session and the terminal UI together.
use anyhow::Result;
use tally_frontend_core::{FrontendConfig, TallySession};

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};

pub struct CliApp {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliApp {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    pub fn run(self) -> Result<()> {
        let session = TallySession::new(&self.frontend_config);
        let event_loop = EventLoop::new(session, &self.cli_config);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let session = event_loop.run(&mut terminal)?;

        let state = session.state();
        tracing::info!(
            players = state.roster.players().len(),
            monsters = state.roster.monsters().len(),
            messages = session.messages().len(),
            "tally session closed"
        );

        Ok(())
    }
}
