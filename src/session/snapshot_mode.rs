//! Headless snapshot execution
//!
//! Renders a single frame into an in-memory buffer and prints it as text.

use crate::config::Config;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::theme::ThemeMode;
use ratatui::buffer::Buffer;
use ratatui::{Terminal, backend::TestBackend};
use std::error::Error;
use std::time::Duration;

/// Frame parameters for a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotOptions {
    pub width: u16,
    pub height: u16,
    pub theme: ThemeMode,
    /// Time since mount; `None` means every animation has settled.
    pub elapsed: Option<Duration>,
}

/// Plain-text rows of the buffer with trailing blanks removed.
fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Renders one frame of the dashboard to text.
pub fn render_snapshot(config: &Config, options: SnapshotOptions) -> Result<String, Box<dyn Error>> {
    let state = DashboardState::new(config).with_theme(options.theme);
    let elapsed = options
        .elapsed
        .unwrap_or_else(|| config.animation.settle_time());
    log::debug!(
        "Rendering {}x{} snapshot at {:?} in {} theme",
        options.width,
        options.height,
        elapsed,
        state.theme()
    );

    let mut terminal = Terminal::new(TestBackend::new(options.width, options.height))?;
    terminal.draw(|f| render_dashboard(f, &state, elapsed))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Prints one frame of the dashboard to stdout.
pub fn run_snapshot_mode(config: &Config, options: SnapshotOptions) -> Result<(), Box<dyn Error>> {
    print!("{}", render_snapshot(config, options)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(theme: ThemeMode, elapsed: Option<Duration>) -> SnapshotOptions {
        SnapshotOptions {
            width: 130,
            height: 45,
            theme,
            elapsed,
        }
    }

    #[test]
    fn test_settled_snapshot_contains_ring_label() {
        let text = render_snapshot(&Config::default(), options(ThemeMode::Light, None)).unwrap();
        assert!(text.contains("Security Score"));
        assert!(text.contains("78%"));
        assert!(text.contains("Light"));
        assert_eq!(text.lines().count(), 45);
    }

    #[test]
    fn test_dark_snapshot_shows_dark_toggle() {
        let text = render_snapshot(&Config::default(), options(ThemeMode::Dark, None)).unwrap();
        assert!(text.contains("Dark"));
    }

    #[test]
    fn test_rows_have_no_trailing_blanks() {
        let text = render_snapshot(
            &Config::default(),
            options(ThemeMode::Light, Some(Duration::ZERO)),
        )
        .unwrap();
        assert!(text.lines().all(|line| !line.ends_with(' ')));
    }
}
