//! Risk areas panel: labelled bars that grow to their stored percent.

use super::super::content::{RISK_AREAS, RiskArea};
use super::super::utils::render_split_row;
use crate::ui::animation::Easing;
use crate::ui::context::RenderContext;
use crate::ui::theme::ColorToken;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Gauge;

/// Label row and bar row per area, blank row between areas.
pub fn height(_width: u16) -> u16 {
    (RISK_AREAS.len() * 3 - 1) as u16
}

/// Current bar ratio for `item` after `bar_progress` of the animation.
pub fn bar_ratio(item: &RiskArea, bar_progress: f64) -> f64 {
    (f64::from(item.value.min(100)) / 100.0 * bar_progress).clamp(0.0, 1.0)
}

pub fn render_risk_areas(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let bar_progress = ctx
        .tween(ctx.animation.bar(), Easing::EaseOut)
        .progress(ctx.elapsed);

    for (i, item) in RISK_AREAS.iter().enumerate() {
        let y = area.y + (i as u16) * 3;
        if y >= area.bottom() {
            break;
        }

        let label = Line::from(Span::styled(
            item.label,
            Style::default().fg(ctx.color(ctx.palette.text)),
        ));
        let value = Line::from(Span::styled(
            format!("{}%", item.value),
            Style::default().fg(ctx.color(ColorToken::Cyan.text(ctx.mode))),
        ));
        render_split_row(f, Rect { y, height: 1, ..area }, label, value);

        if y + 1 >= area.bottom() {
            break;
        }
        let bar = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(ctx.color(item.color.fill()))
                    .bg(ctx.color(ctx.palette.track)),
            )
            .use_unicode(true)
            .ratio(bar_ratio(item, bar_progress))
            .label("");
        f.render_widget(
            bar,
            Rect {
                y: y + 1,
                height: 1,
                ..area
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_grows_from_zero_to_value() {
        let network = &RISK_AREAS[0];
        assert_eq!(bar_ratio(network, 0.0), 0.0);
        assert!((bar_ratio(network, 0.5) - 0.425).abs() < 1e-9);
        assert!((bar_ratio(network, 1.0) - 0.85).abs() < 1e-9);
    }
}
