//! Business impact panel: tiles that grow into place.

use super::super::content::BUSINESS_IMPACT;
use super::super::utils::{scale_rect, tint};
use crate::consts::cli_consts::animation::TILE_START_SCALE;
use crate::ui::animation::{lerp, stagger};
use crate::ui::context::RenderContext;
use crate::ui::theme::ColorToken;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

/// Narrowest tile that still fits the longest label.
const MIN_TILE_WIDTH: u16 = 26;
const TILE_HEIGHT: u16 = 4;

/// Four tiles per row when they fit, otherwise two.
pub fn tiles_per_row(width: u16) -> usize {
    if width >= MIN_TILE_WIDTH * 4 { 4 } else { 2 }
}

pub fn height(width: u16) -> u16 {
    let rows = BUSINESS_IMPACT.len().div_ceil(tiles_per_row(width));
    rows as u16 * TILE_HEIGHT
}

pub fn render_business_impact(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let per_row = tiles_per_row(area.width);
    let rows = BUSINESS_IMPACT.len().div_ceil(per_row);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(TILE_HEIGHT)))
        .split(area);

    for (row_index, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..per_row).map(|_| Constraint::Ratio(1, per_row as u32)))
            .spacing(1)
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row_index * per_row + col;
            let Some(tile) = BUSINESS_IMPACT.get(index) else {
                break;
            };

            let progress = ctx.entrance(stagger(index, ctx.animation.stagger()));
            let tile_ctx = ctx.with_opacity(progress);
            let tile_area = scale_rect(*cell, lerp(TILE_START_SCALE, 1.0, progress));
            if tile_area.is_empty() {
                continue;
            }

            let lines = vec![
                Line::from(Span::styled(
                    tile.label,
                    Style::default().fg(tile_ctx.color(ColorToken::Cyan.text(tile_ctx.mode))),
                )),
                Line::from(Span::styled(
                    tile.value,
                    Style::default()
                        .fg(tile_ctx.color(ColorToken::Emerald.text(tile_ctx.mode)))
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            let background = Block::default()
                .style(Style::default().bg(tint(&tile_ctx, ColorToken::Cyan, 0.05)))
                .padding(Padding::vertical(1));
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(background);
            f.render_widget(paragraph, tile_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_wrap_on_narrow_cards() {
        assert_eq!(tiles_per_row(200), 4);
        assert_eq!(tiles_per_row(70), 2);
        assert_eq!(height(200), TILE_HEIGHT);
        assert_eq!(height(70), TILE_HEIGHT * 2);
    }
}
