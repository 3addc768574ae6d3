//! Dashboard header component
//!
//! Renders the page title and the theme toggle badge

use super::super::content::PAGE_TITLE;
use crate::consts::cli_consts::layout::TOGGLE_WIDTH;
use crate::ui::context::RenderContext;
use crate::ui::theme::{ColorToken, ThemeMode, blend_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::Paragraph;
use std::time::Duration;

/// Clickable badge in the top-right corner of the header.
pub fn toggle_area(header: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(header.width);
    Rect {
        x: header.right() - width,
        y: header.y,
        width,
        height: header.height.min(1),
    }
}

fn toggle_label(mode: ThemeMode) -> String {
    match mode {
        ThemeMode::Light => "☀ Light".to_string(),
        ThemeMode::Dark => "☾ Dark".to_string(),
    }
}

/// Render title (entering from above) and theme toggle.
pub fn render_header(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.is_empty() {
        return;
    }

    let progress = ctx.entrance(Duration::ZERO);
    let settled_row = area.height.saturating_sub(1).min(1);
    let slide = ((1.0 - progress).round() as u16).min(settled_row);
    let title_area = Rect {
        y: area.y + settled_row - slide,
        height: 1,
        ..area
    };

    let title = Paragraph::new(PAGE_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(blend_color(
                    ctx.palette.background,
                    ColorToken::Emerald.text(ctx.mode),
                    progress,
                ))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, title_area);

    let toggle = Paragraph::new(toggle_label(ctx.mode))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(ctx.palette.title)
                .bg(ctx.palette.card_background)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(toggle, toggle_area(area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_area_is_top_right() {
        let header = Rect::new(1, 1, 100, 3);
        assert_eq!(toggle_area(header), Rect::new(91, 1, 10, 1));
    }

    #[test]
    fn test_toggle_label_tracks_mode() {
        assert!(toggle_label(ThemeMode::Light).contains("Light"));
        assert!(toggle_label(ThemeMode::Dark).contains("Dark"));
    }
}
