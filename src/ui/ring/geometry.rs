//! Stroke geometry for the circular progress indicator.
//!
//! The arc is drawn as a dash pattern whose dash length is the full
//! circumference. Shifting the pattern by `offset` leaves exactly
//! `circumference - offset` of the stroke visible.

use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RingError {
    /// The stroke is as wide as (or wider than) the ring itself.
    #[error("Ring of diameter {diameter} with stroke width {stroke_width} has no drawable radius")]
    NonPositiveRadius { diameter: f64, stroke_width: f64 },

    /// Non-positive diameter or negative stroke width.
    #[error("Ring of diameter {diameter} with stroke width {stroke_width} has negative dimensions")]
    NegativeDimension { diameter: f64, stroke_width: f64 },

    /// Diameter or stroke width is NaN or infinite.
    #[error("Ring dimensions must be finite")]
    NonFinite,
}

/// Percent complete, always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProgressValue(f64);

impl ProgressValue {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Clamps out-of-range input. NaN is treated as 0.
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self(Self::MIN);
        }
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn fraction(self) -> f64 {
        self.0 / Self::MAX
    }

    /// Whole percent shown in the ring label.
    pub fn label(self) -> String {
        format!("{}%", self.0.round() as u8)
    }
}

impl From<f64> for ProgressValue {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

/// Derived geometry, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub diameter: f64,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
    pub progress: ProgressValue,
}

impl RingGeometry {
    /// Computes the ring geometry for `progress` percent.
    ///
    /// Progress is clamped to [0, 100].
    ///
    /// # Errors
    /// Returns [`RingError`] when the dimensions are not finite, negative, or
    /// leave no positive radius.
    pub fn compute(
        diameter: f64,
        stroke_width: f64,
        progress: impl Into<ProgressValue>,
    ) -> Result<Self, RingError> {
        if !diameter.is_finite() || !stroke_width.is_finite() {
            return Err(RingError::NonFinite);
        }
        if diameter <= 0.0 || stroke_width < 0.0 {
            return Err(RingError::NegativeDimension {
                diameter,
                stroke_width,
            });
        }
        let radius = (diameter - stroke_width) / 2.0;
        if radius <= 0.0 {
            return Err(RingError::NonPositiveRadius {
                diameter,
                stroke_width,
            });
        }
        Ok(Self {
            diameter,
            stroke_width,
            radius,
            circumference: 2.0 * PI * radius,
            progress: progress.into(),
        })
    }

    pub fn center(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Arc length revealed once the animation has settled.
    pub fn visible(&self) -> f64 {
        self.progress.fraction() * self.circumference
    }

    /// Dash offset once the animation has settled.
    pub fn offset(&self) -> f64 {
        self.circumference - self.visible()
    }

    /// Dash offset part way through the reveal, `reveal` in [0, 1].
    ///
    /// Starts at the full circumference (nothing shown) and ends at
    /// [`offset`](Self::offset).
    pub fn offset_at(&self, reveal: f64) -> f64 {
        let reveal = reveal.clamp(0.0, 1.0);
        self.circumference + (self.offset() - self.circumference) * reveal
    }

    pub fn visible_at(&self, reveal: f64) -> f64 {
        self.circumference - self.offset_at(reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ring(progress: f64) -> RingGeometry {
        RingGeometry::compute(120.0, 8.0, progress).unwrap()
    }

    #[test]
    fn test_default_ring_at_78_percent() {
        let geometry = ring(78.0);
        assert!((geometry.radius - 56.0).abs() < EPS);
        assert!((geometry.circumference - 351.858).abs() < 1e-3);
        assert!((geometry.visible() - 274.449).abs() < 1e-3);
        assert!((geometry.offset() - 77.409).abs() < 1e-3);
    }

    #[test]
    fn test_visible_length_is_proportional() {
        for percent in 0..=100 {
            let geometry = ring(percent as f64);
            let expected = percent as f64 / 100.0 * geometry.circumference;
            assert!((geometry.visible() - expected).abs() < EPS);
            assert!((geometry.visible() + geometry.offset() - geometry.circumference).abs() < EPS);
        }
    }

    #[test]
    fn test_empty_and_full_ring() {
        let empty = ring(0.0);
        assert_eq!(empty.visible(), 0.0);
        assert!((empty.offset() - empty.circumference).abs() < EPS);

        let full = ring(100.0);
        assert!((full.visible() - full.circumference).abs() < EPS);
        assert!(full.offset().abs() < EPS);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(ring(-10.0), ring(0.0));
        assert_eq!(ring(150.0), ring(100.0));
        assert_eq!(ring(f64::NAN), ring(0.0));
        assert_eq!(ring(f64::INFINITY), ring(100.0));
    }

    #[test]
    fn test_stroke_as_wide_as_ring_is_rejected() {
        assert_eq!(
            RingGeometry::compute(8.0, 8.0, 50.0),
            Err(RingError::NonPositiveRadius {
                diameter: 8.0,
                stroke_width: 8.0
            })
        );
        assert!(RingGeometry::compute(4.0, 8.0, 50.0).is_err());
        assert_eq!(
            RingGeometry::compute(f64::NAN, 8.0, 50.0),
            Err(RingError::NonFinite)
        );
    }

    #[test]
    fn test_negative_dimensions_are_rejected() {
        // Radius would be a positive 8 here.
        assert_eq!(
            RingGeometry::compute(-4.0, -20.0, 50.0),
            Err(RingError::NegativeDimension {
                diameter: -4.0,
                stroke_width: -20.0
            })
        );
        assert!(RingGeometry::compute(120.0, -8.0, 50.0).is_err());
        assert!(RingGeometry::compute(0.0, 0.0, 50.0).is_err());

        // A zero-width stroke is a hairline ring.
        let hairline = RingGeometry::compute(120.0, 0.0, 50.0).unwrap();
        assert_eq!(hairline.radius, 60.0);
    }

    #[test]
    fn test_reveal_moves_offset_from_hidden_to_target() {
        let geometry = ring(78.0);
        assert!((geometry.offset_at(0.0) - geometry.circumference).abs() < EPS);
        assert_eq!(geometry.visible_at(0.0), 0.0);
        assert!((geometry.offset_at(1.0) - geometry.offset()).abs() < EPS);
        assert!((geometry.visible_at(0.5) - geometry.visible() / 2.0).abs() < EPS);
        // Overshooting reveal values are clamped.
        assert!((geometry.visible_at(2.0) - geometry.visible()).abs() < EPS);
    }

    #[test]
    fn test_label_rounds_clamped_value() {
        assert_eq!(ProgressValue::new(78.0).label(), "78%");
        assert_eq!(ProgressValue::new(99.6).label(), "100%");
        assert_eq!(ProgressValue::new(-3.0).label(), "0%");
    }
}
