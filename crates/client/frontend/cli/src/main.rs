//! Terminal client entry point.
use anyhow::Result;
use tally_cli::{CliApp, CliConfig, FrontendConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(cli_config.session_id.as_deref())?;

    CliApp::new(frontend_config, cli_config).run()
}
