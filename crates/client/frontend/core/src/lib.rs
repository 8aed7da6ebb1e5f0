//! Cross-frontend primitives for presenting the calculator.
//!
//! Houses the command-dispatching session, the message log, and view-model
//! snapshots that the terminal client and any future graphical client reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod message;
pub mod presentation;
pub mod session;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::EventImpact;
pub use presentation::PresentationMapper;
pub use session::TallySession;
