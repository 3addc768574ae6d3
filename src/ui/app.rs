//! Main application state and UI loop
//!
//! Contains the App struct and the input handling of the interactive
//! dashboard

use crate::config::Config;
use crate::ui::dashboard::{DashboardState, grid_row_count, render_dashboard, toggle_hit_area};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    state: DashboardState,
    /// How long to wait for input before redrawing.
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: DashboardState::new(config),
            tick_rate: config.tick_rate(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Applies a key press. `area` is the current terminal area.
    pub fn handle_key(&mut self, code: KeyCode, area: Rect) -> Flow {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let now = self.state.elapsed();
                self.state.toggle_theme(now);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.state.replay(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(grid_row_count(area)),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            _ => {}
        }
        Flow::Continue
    }

    /// Toggles the theme when the badge is left-clicked.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if toggle_hit_area(area).contains(Position::new(mouse.column, mouse.row)) {
            let now = self.state.elapsed();
            self.state.toggle_theme(now);
        }
    }

    /// Keeps the scroll position valid after a resize.
    pub fn handle_resize(&mut self, area: Rect) {
        let rows = grid_row_count(area);
        self.state.scroll = self.state.scroll.min(rows.saturating_sub(1));
    }
}

/// Runs the dashboard in a loop, redrawing every tick and handling input.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        let elapsed = app.state.elapsed();
        terminal.draw(|f| render_dashboard(f, &app.state, elapsed))?;

        // Poll for input until the next tick
        if !event::poll(app.tick_rate)? {
            continue;
        }
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        match event::read()? {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code, area) == Flow::Quit {
                    log::info!("Dashboard closed");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                app.handle_resize(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }
}
