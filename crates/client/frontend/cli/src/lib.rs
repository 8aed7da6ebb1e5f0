//! Terminal UI frontend for the combat tally.
//!
//! # Architecture
//!
//! The CLI is a pure presentation layer that:
//! - Owns a [`tally_frontend_core::TallySession`] for the lifetime of the UI
//! - Maps key presses to engine commands and dispatches them
//! - Rebuilds a view model and redraws after every change

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use tally_frontend_core::FrontendConfig;
