//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the ViewModel and renders to a
//! terminal frame. Styling goes through the PresentationMapper theme.

pub mod combat;
pub mod footer;
pub mod header;
pub mod messages;
pub mod roster;
