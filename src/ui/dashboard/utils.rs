//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::ui::context::RenderContext;
use crate::ui::theme::{ColorToken, blend_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Accent wash used behind list rows and tiles.
pub fn tint(ctx: &RenderContext, token: ColorToken, strength: f64) -> Color {
    blend_color(ctx.palette.card_background, token.fill(), strength * ctx.opacity)
}

/// Renders `left` flush left and `right` flush right on one row.
pub fn render_split_row(f: &mut Frame, area: Rect, left: Line, right: Line) {
    if area.is_empty() {
        return;
    }
    let right_width = right.width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    f.render_widget(Paragraph::new(left), chunks[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

/// `icon  label` line used by counters and status rows.
pub fn icon_line<'a>(ctx: &RenderContext, icon: &'a str, icon_color: Color, label: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(icon, Style::default().fg(ctx.color(icon_color))),
        Span::raw("  "),
        Span::styled(label, Style::default().fg(ctx.color(ctx.palette.text))),
    ])
}

/// Shrinks `area` symmetrically to `scale` of its size.
pub fn scale_rect(area: Rect, scale: f64) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = (f64::from(area.width) * scale).round() as u16;
    let height = (f64::from(area.height) * scale).round() as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontally centres a `width` wide strip inside `area`.
pub fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rect_keeps_center() {
        let area = Rect::new(10, 10, 20, 4);
        assert_eq!(scale_rect(area, 1.0), area);
        assert_eq!(scale_rect(area, 0.9), Rect::new(11, 10, 18, 4));
        assert_eq!(scale_rect(area, 0.0), Rect::new(20, 12, 0, 0));
    }

    #[test]
    fn test_center_horizontally() {
        let area = Rect::new(0, 3, 30, 9);
        assert_eq!(center_horizontally(area, 18), Rect::new(6, 3, 18, 9));
        assert_eq!(center_horizontally(area, 50), area);
    }
}
