//! Priority actions panel: rows sliding in one after another.

use super::super::content::PRIORITY_ACTIONS;
use super::super::utils::tint;
use crate::consts::cli_consts::animation::ROW_SLIDE_COLS;
use crate::ui::animation::stagger;
use crate::ui::context::RenderContext;
use crate::ui::theme::ColorToken;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Two text rows per action, blank row between actions.
pub fn height(_width: u16) -> u16 {
    (PRIORITY_ACTIONS.len() * 3 - 1) as u16
}

pub fn render_priority_actions(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    for (index, action) in PRIORITY_ACTIONS.iter().enumerate() {
        let y = area.y + (index as u16) * 3;
        if y >= area.bottom() {
            break;
        }

        let progress = ctx.entrance(stagger(index, ctx.animation.stagger()));
        let row_ctx = ctx.with_opacity(progress);
        let shift = (((1.0 - progress) * f64::from(ROW_SLIDE_COLS)).round() as u16).min(area.width);
        let row = Rect {
            x: area.x + shift,
            y,
            width: area.width - shift,
            height: 2.min(area.bottom() - y),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    action.icon.glyph(),
                    Style::default().fg(row_ctx.color(ColorToken::Emerald.fill())),
                ),
                Span::raw("  "),
                Span::styled(
                    action.text,
                    Style::default()
                        .fg(row_ctx.color(row_ctx.palette.text))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    action.priority.to_string(),
                    Style::default().fg(row_ctx.color(ColorToken::Cyan.text(row_ctx.mode))),
                ),
            ]),
        ];

        let background = Block::default().style(Style::default().bg(tint(&row_ctx, ColorToken::Emerald, 0.05)));
        f.render_widget(Paragraph::new(lines).block(background), row);
    }
}
