//! Terminal rendering of the progress ring.

use super::geometry::{ProgressValue, RingGeometry};
use crate::consts::cli_consts::ring::{DEFAULT_DIAMETER, DEFAULT_STROKE_WIDTH};
use crate::ui::theme::{ColorToken, Palette, ThemeMode, blend_color};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A circular stroke segment starting at twelve o'clock and running
/// clockwise for `length` units along the centre line.
#[derive(Debug, Clone, Copy)]
struct ArcStroke {
    cx: f64,
    cy: f64,
    radius: f64,
    stroke_width: f64,
    length: f64,
    /// Sampling distance, half a canvas dot.
    step: f64,
    color: Color,
}

impl Shape for ArcStroke {
    fn draw(&self, painter: &mut Painter) {
        if self.length <= 0.0 || self.radius <= 0.0 {
            return;
        }
        let sweep = (self.length / self.radius).min(TAU);
        let step = self.step.max(f64::EPSILON);
        let bands = ((self.stroke_width / step).ceil() as usize).max(1);

        for band in 0..=bands {
            let r = self.radius - self.stroke_width / 2.0
                + self.stroke_width * band as f64 / bands as f64;
            if r <= 0.0 {
                continue;
            }
            let samples = ((r * sweep / step).ceil() as usize).max(1);
            for i in 0..=samples {
                let theta = FRAC_PI_2 - sweep * i as f64 / samples as f64;
                let x = self.cx + r * theta.cos();
                let y = self.cy + r * theta.sin();
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

/// Circular progress indicator with a centred percent label.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    progress: ProgressValue,
    diameter: f64,
    stroke_width: f64,
    color: ColorToken,
    /// Eased animation fraction, 0 hides the arc and 1 shows all of it.
    reveal: f64,
    mode: ThemeMode,
    palette: Palette,
    /// Fade of the enclosing card, 0 draws everything in the background colour.
    opacity: f64,
}

impl ProgressRing {
    pub fn new(progress: impl Into<ProgressValue>) -> Self {
        Self {
            progress: progress.into(),
            diameter: DEFAULT_DIAMETER,
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: ColorToken::Emerald,
            reveal: 1.0,
            mode: ThemeMode::default(),
            palette: ThemeMode::default().palette(),
            opacity: 1.0,
        }
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn reveal(mut self, reveal: f64) -> Self {
        self.reveal = reveal.clamp(0.0, 1.0);
        self
    }

    pub fn theme(mut self, mode: ThemeMode, palette: Palette) -> Self {
        self.mode = mode;
        self.palette = palette;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    fn faded(&self, color: Color) -> Color {
        blend_color(self.palette.card_background, color, self.opacity)
    }

    fn render_strokes(&self, geometry: &RingGeometry, area: Rect, buf: &mut Buffer) {
        // Braille cells hold 2x4 dots. Pick bounds so one dot covers the same
        // distance on both axes and the ring stays round.
        let dots_x = f64::from(area.width) * 2.0;
        let dots_y = f64::from(area.height) * 4.0;
        let unit = geometry.diameter / dots_x.min(dots_y);
        let center = geometry.center();
        let half_w = dots_x * unit / 2.0;
        let half_h = dots_y * unit / 2.0;

        let track = ArcStroke {
            cx: center,
            cy: center,
            radius: geometry.radius,
            stroke_width: geometry.stroke_width,
            length: geometry.circumference,
            step: unit / 2.0,
            color: self.faded(self.palette.track),
        };
        let arc = ArcStroke {
            length: geometry.visible_at(self.reveal),
            color: self.faded(self.color.fill()),
            ..track
        };

        Canvas::default()
            .background_color(self.palette.card_background)
            .marker(Marker::Braille)
            .x_bounds([center - half_w, center + half_w])
            .y_bounds([center - half_h, center + half_h])
            .paint(|ctx| {
                ctx.draw(&track);
                ctx.draw(&arc);
            })
            .render(area, buf);
    }
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match RingGeometry::compute(self.diameter, self.stroke_width, self.progress) {
            Ok(geometry) => self.render_strokes(&geometry, area, buf),
            Err(e) => log::warn!("Progress ring drawn without strokes: {}", e),
        }

        let label = self.progress.label();
        let label_width = label.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(label_width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(
            x,
            y,
            label,
            Style::default()
                .fg(self.faded(self.color.text(self.mode)))
                .bg(self.palette.card_background)
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ring: ProgressRing) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 18, 9));
        ring.render(buf.area, &mut buf);
        buf
    }

    fn cells_with_fg(buf: &Buffer, color: Color) -> usize {
        buf.content.iter().filter(|cell| cell.fg == color).count()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_label_is_centred() {
        let buf = render(ProgressRing::new(78.0));
        assert!(row_text(&buf, 4).contains("78%"));
    }

    #[test]
    fn test_arc_hidden_before_reveal() {
        let buf = render(ProgressRing::new(78.0).reveal(0.0));
        assert_eq!(cells_with_fg(&buf, ColorToken::Emerald.fill()), 0);
        assert!(cells_with_fg(&buf, Palette::LIGHT.track) > 0);
    }

    #[test]
    fn test_arc_grows_with_progress() {
        let quarter = render(ProgressRing::new(25.0));
        let most = render(ProgressRing::new(90.0));
        let fill = ColorToken::Emerald.fill();
        assert!(cells_with_fg(&quarter, fill) > 0);
        assert!(cells_with_fg(&most, fill) > cells_with_fg(&quarter, fill));
    }

    #[test]
    fn test_quarter_arc_starts_at_top_right() {
        let buf = render(ProgressRing::new(25.0).color(ColorToken::Cyan));
        let fill = ColorToken::Cyan.fill();
        let left_half = buf
            .content
            .iter()
            .enumerate()
            .filter(|(i, cell)| (*i as u16 % buf.area.width) < buf.area.width / 2 - 1 && cell.fg == fill)
            .count();
        assert_eq!(left_half, 0);
        // Top row carries the start of the arc.
        assert!((0..buf.area.width).any(|x| buf[(x, 0)].fg == fill));
    }

    #[test]
    fn test_invalid_dimensions_render_label_only() {
        let buf = render(ProgressRing::new(50.0).diameter(8.0).stroke_width(8.0));
        assert!(row_text(&buf, 4).contains("50%"));
        assert_eq!(cells_with_fg(&buf, ColorToken::Emerald.fill()), 0);
        assert_eq!(cells_with_fg(&buf, Palette::LIGHT.track), 0);
    }

    #[test]
    fn test_transparent_ring_blends_into_card() {
        let buf = render(ProgressRing::new(78.0).opacity(0.0));
        assert_eq!(cells_with_fg(&buf, Palette::LIGHT.track), 0);
        assert_eq!(cells_with_fg(&buf, ColorToken::Emerald.fill()), 0);
        let label = buf[(7, 4)].fg;
        assert_eq!(label, Palette::LIGHT.card_background);

        let half = render(ProgressRing::new(78.0).opacity(0.5));
        assert_ne!(half[(7, 4)].fg, Palette::LIGHT.card_background);
        assert_ne!(half[(7, 4)].fg, ColorToken::Emerald.text(ThemeMode::Light));
    }

    #[test]
    fn test_dark_theme_uses_dark_track() {
        let buf = render(ProgressRing::new(10.0).theme(ThemeMode::Dark, Palette::DARK));
        assert!(cells_with_fg(&buf, Palette::DARK.track) > 0);
        assert_eq!(cells_with_fg(&buf, Palette::LIGHT.track), 0);
    }
}
