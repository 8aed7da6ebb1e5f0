//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen.
///
/// Any failure after raw mode is enabled restores the terminal before returning.
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    rollback_on_error(enter(), || {
        let _ = restore();
    })
}

fn enter() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

fn rollback_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Leaves the alternate screen and raw mode, attempting both even if one fails.
pub fn restore() -> Result<()> {
    let left = execute!(io::stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    left?;
    Ok(())
}

/// Restores the terminal when dropped, including on early returns and panics.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_setup_is_rolled_back() {
        let mut undone = false;
        let failed: Result<()> = Err(anyhow::anyhow!("no tty"));
        let result = rollback_on_error(failed, || undone = true);
        assert!(result.is_err());
        assert!(undone);
    }

    #[test]
    fn successful_setup_is_kept() {
        let mut undone = false;
        let result = rollback_on_error(Ok(7), || undone = true);
        assert_eq!(result.ok(), Some(7));
        assert!(!undone);
    }
}
