//! Per-frame render context handed to every component.

use crate::config::AnimationConfig;
use crate::ui::animation::{Easing, Tween};
use crate::ui::theme::{Palette, ThemeMode, blend_color};

use ratatui::prelude::Color;
use std::time::Duration;

/// Theme and animation clock for one frame.
///
/// Components never read global state; everything they need to pick colours
/// and animation progress comes through here.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub mode: ThemeMode,
    /// Active colours, possibly mid-fade between two themes.
    pub palette: Palette,
    /// Time since the dashboard was mounted.
    pub elapsed: Duration,
    pub animation: &'a AnimationConfig,
    /// Entrance fade of the enclosing element, 0 (invisible) to 1.
    pub opacity: f64,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        mode: ThemeMode,
        palette: Palette,
        elapsed: Duration,
        animation: &'a AnimationConfig,
    ) -> Self {
        Self {
            mode,
            palette,
            elapsed,
            animation,
            opacity: 1.0,
        }
    }

    pub fn tween(&self, duration: Duration, easing: Easing) -> Tween {
        Tween::new(duration, easing).enabled(self.animation.enabled)
    }

    /// Standard entrance progress for an element appearing after `delay`.
    pub fn entrance(&self, delay: Duration) -> f64 {
        self.tween(self.animation.entrance(), Easing::EaseOut)
            .delay(delay)
            .progress(self.elapsed)
    }

    /// `color` faded against the card background by the current opacity.
    pub fn color(&self, color: Color) -> Color {
        blend_color(self.palette.card_background, color, self.opacity)
    }

    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            opacity: (self.opacity * opacity).clamp(0.0, 1.0),
            ..*self
        }
    }
}
