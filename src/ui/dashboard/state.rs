//! Dashboard state management
//!
//! The only mutable UI state is the theme flag; everything else is derived
//! from the time elapsed since mount.

use crate::config::{AnimationConfig, Config};
use crate::ui::animation::{Easing, Tween};
use crate::ui::context::RenderContext;
use crate::ui::theme::{Palette, ThemeMode};

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DashboardState {
    /// Active theme.
    theme: ThemeMode,
    /// Colours on screen when the most recent toggle happened; the fade
    /// starts here, so toggling mid-fade reverses from the current blend.
    fade_from: Palette,
    /// Mount-relative time of the most recent toggle.
    theme_changed_at: Option<Duration>,
    /// When the dashboard was (re)mounted; animations run from here.
    mounted_at: Instant,
    /// Number of grid rows scrolled past.
    pub scroll: usize,
    /// Whether to paint the page background.
    pub with_background_color: bool,
    pub animation: AnimationConfig,
}

impl DashboardState {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: ThemeMode::default(),
            fade_from: ThemeMode::default().palette(),
            theme_changed_at: None,
            mounted_at: Instant::now(),
            scroll: 0,
            with_background_color: config.with_background_color,
            animation: config.animation.clone(),
        }
    }

    /// Starts in `mode` without a fade.
    pub fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme = mode;
        self.fade_from = mode.palette();
        self.theme_changed_at = None;
        self
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Time since mount.
    pub fn elapsed(&self) -> Duration {
        self.mounted_at.elapsed()
    }

    /// Flips the theme at mount-relative time `at`.
    pub fn toggle_theme(&mut self, at: Duration) {
        self.fade_from = self.palette_at(at);
        self.theme = self.theme.toggled();
        self.theme_changed_at = Some(at);
        log::info!("Theme switched to {}", self.theme);
    }

    /// Restarts every entrance animation.
    pub fn replay(&mut self) {
        self.mounted_at = Instant::now();
        self.theme_changed_at = None;
        log::debug!("Replaying entrance animations");
    }

    pub fn scroll_down(&mut self, max_rows: usize) {
        self.scroll = (self.scroll + 1).min(max_rows.saturating_sub(1));
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Palette at `elapsed`, blending away from the colours shown at the most
    /// recent toggle.
    pub fn palette_at(&self, elapsed: Duration) -> Palette {
        let target = self.theme.palette();
        let Some(changed_at) = self.theme_changed_at else {
            return target;
        };
        let fade = Tween::new(self.animation.theme_fade(), Easing::Linear)
            .enabled(self.animation.enabled)
            .progress(elapsed.saturating_sub(changed_at));
        self.fade_from.blend(&target, fade)
    }

    pub fn context(&self, elapsed: Duration) -> RenderContext<'_> {
        RenderContext::new(self.theme, self.palette_at(elapsed), elapsed, &self.animation)
    }
}
