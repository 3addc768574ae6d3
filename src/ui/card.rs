//! Bordered, titled panel with a one-time entrance.

use crate::consts::cli_consts::animation::CARD_SLIDE_ROWS;
use crate::ui::context::RenderContext;
use crate::ui::dashboard::grid::CardSpan;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use std::time::Duration;

/// Layout wrapper for one dashboard panel.
///
/// The card draws its frame and returns the inner area together with a
/// context whose opacity matches the entrance fade, so the caller can draw
/// the body with matching colours.
#[derive(Debug, Clone, Copy)]
pub struct DashboardCard<'a> {
    title: &'a str,
    span: CardSpan,
}

impl<'a> DashboardCard<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            span: CardSpan::default(),
        }
    }

    pub fn span(mut self, span: CardSpan) -> Self {
        self.span = span;
        self
    }

    pub fn layout(&self) -> CardSpan {
        self.span
    }

    /// Renders the frame and returns the body area and its context.
    pub fn render<'c>(
        &self,
        f: &mut Frame,
        area: Rect,
        ctx: &RenderContext<'c>,
    ) -> (Rect, RenderContext<'c>) {
        let progress = ctx.entrance(Duration::ZERO);
        let ctx = ctx.with_opacity(progress);

        // Slide up into place while fading in.
        let slide = (((1.0 - progress) * f64::from(CARD_SLIDE_ROWS)).round() as u16)
            .min(area.height);
        let area = Rect {
            y: area.y + slide,
            height: area.height - slide,
            ..area
        };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(ctx.color(ctx.palette.title))
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ctx.color(ctx.palette.border)))
            .style(Style::default().bg(ctx.palette.card_background))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);
        (inner, ctx)
    }
}
