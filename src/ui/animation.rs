//! Time-driven animation helpers.
//!
//! Animations are pure functions of the time elapsed since the dashboard was
//! mounted. Nothing here holds state between frames.

use std::time::Duration;

/// Unit cubic bezier easing curve with fixed endpoints (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * a1 + 6.0 * mt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Finds the curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton did not converge; x(t) is monotonic on [0, 1] so bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while hi - lo > 1e-7 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased value for the linear progress `x` in [0, 1].
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// Easing curves used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => Self::EASE_OUT.ease(t),
            Easing::EaseInOut => Self::EASE_IN_OUT.ease(t),
        }
    }
}

/// A one-shot transition from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub enabled: bool,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing,
            enabled: true,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Eased fraction in [0, 1] after `elapsed` time since mount.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f64() / self.duration.as_secs_f64())
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step * index as u32
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
