//! Threat protection panel: blocked threats and prevention rate.

use super::super::content::THREAT_COUNTERS;
use super::super::utils::{icon_line, render_split_row};
use crate::ui::context::RenderContext;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};

/// One row per counter with a blank row between them.
pub fn height(_width: u16) -> u16 {
    (THREAT_COUNTERS.len() * 2 - 1) as u16
}

pub fn render_threats(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    for (i, counter) in THREAT_COUNTERS.iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y >= area.bottom() {
            break;
        }
        let row = Rect { y, height: 1, ..area };

        let left = icon_line(
            ctx,
            counter.icon.glyph(),
            counter.icon_color.fill(),
            counter.label,
        );
        let right = Line::from(Span::styled(
            counter.value,
            Style::default()
                .fg(ctx.color(counter.value_color.text(ctx.mode)))
                .add_modifier(Modifier::BOLD),
        ));
        render_split_row(f, row, left, right);
    }
}
