//! System health panel: overall status badge.

use super::super::content::SYSTEM_HEALTH;
use super::super::utils::{icon_line, render_split_row, tint};
use crate::ui::context::RenderContext;
use crate::ui::theme::ColorToken;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn height(_width: u16) -> u16 {
    1
}

pub fn render_health(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let left = icon_line(
        ctx,
        SYSTEM_HEALTH.icon.glyph(),
        ColorToken::Cyan.fill(),
        SYSTEM_HEALTH.label,
    );
    let badge = Line::from(Span::styled(
        format!(" {} ", SYSTEM_HEALTH.status),
        Style::default()
            .fg(ctx.color(ColorToken::Emerald.text(ctx.mode)))
            .bg(tint(ctx, ColorToken::Emerald, 0.2))
            .add_modifier(Modifier::BOLD),
    ));
    render_split_row(f, Rect { height: area.height.min(1), ..area }, left, badge);
}
