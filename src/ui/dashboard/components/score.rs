//! Security score panel: progress ring with standing and trend.

use super::super::content::SECURITY_SCORE;
use super::super::utils::center_horizontally;
use crate::consts::cli_consts::ring::CANVAS_ROWS;
use crate::ui::animation::Easing;
use crate::ui::context::RenderContext;
use crate::ui::ring::ProgressRing;
use crate::ui::theme::ColorToken;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::Paragraph;

/// Ring, spacer, standing and trend.
pub fn height(_width: u16) -> u16 {
    CANVAS_ROWS + 3
}

pub fn render_score(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CANVAS_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let reveal = ctx
        .tween(ctx.animation.ring(), Easing::EaseInOut)
        .progress(ctx.elapsed);
    let ring = ProgressRing::new(SECURITY_SCORE.percent)
        .diameter(SECURITY_SCORE.diameter)
        .stroke_width(SECURITY_SCORE.stroke_width)
        .color(SECURITY_SCORE.color)
        .reveal(reveal)
        .theme(ctx.mode, ctx.palette)
        .opacity(ctx.opacity);
    f.render_widget(ring, center_horizontally(chunks[0], CANVAS_ROWS * 2));

    let standing = Paragraph::new(SECURITY_SCORE.standing)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(ctx.color(SECURITY_SCORE.color.text(ctx.mode)))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(standing, chunks[2]);

    let trend = Paragraph::new(SECURITY_SCORE.trend)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ctx.color(ColorToken::Cyan.text(ctx.mode))));
    f.render_widget(trend, chunks[3]);
}
