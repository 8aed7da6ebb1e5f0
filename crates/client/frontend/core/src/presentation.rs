//! Framework-agnostic presentation mapping.
//!
//! Each frontend implements [`PresentationMapper`] with its own styling
//! system while sharing the same view model.

use tally_core::{Team, Verdict};

use crate::message::MessageLevel;

pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for message log entries based on level.
    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Style for the announced verdict.
    fn style_verdict(&self, verdict: Verdict) -> Self::Style;

    /// Accent style for a team's totals.
    fn style_team(&self, team: Team) -> Self::Style;

    /// Highlight for the selected row of the focused list.
    fn emphasize_selected(&self, base_style: Self::Style) -> Self::Style;
}
