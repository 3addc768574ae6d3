//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::config::Config;
use crate::ui;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs `restore` when dropped, so every exit path after setup, including
/// early `?` returns, puts the terminal back.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Leaves raw mode and the alternate screen. Both steps are attempted even
/// if the first fails; the first error is returned.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Runs the interactive dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// The terminal is restored before any error is returned.
pub fn run_tui_mode(config: &Config) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI");

    // Terminal setup
    enable_raw_mode()?;
    let guard = TerminalGuard {
        restore: restore_terminal,
    };
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(config);
    log::info!("Dashboard started");
    let result = ui::run(&mut terminal, app);

    // Clean up the terminal before reporting the result
    drop(guard);
    result?;
    print_session_exit_success();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup_then_fail(restored: &Cell<u32>) -> io::Result<()> {
        let _guard = TerminalGuard {
            restore: || {
                restored.set(restored.get() + 1);
                Ok(())
            },
        };
        Err::<(), _>(io::Error::other("alternate screen unavailable"))?;
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let restored = Cell::new(0);
        assert!(setup_then_fail(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_failed_restore_does_not_panic() {
        let guard = TerminalGuard {
            restore: || Err(io::Error::other("not a terminal")),
        };
        drop(guard);
    }
}
