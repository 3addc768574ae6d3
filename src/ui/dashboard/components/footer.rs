//! Dashboard footer component
//!
//! Renders key bindings

use crate::ui::context::RenderContext;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::Paragraph;

pub const FOOTER_TEXT: &str = "[T] Theme | [R] Replay | [↑/↓] Scroll | [Q] Quit";

pub fn render_footer(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(ctx.palette.muted)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(footer, area);
}
