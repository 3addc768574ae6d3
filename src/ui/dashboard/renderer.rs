//! Dashboard main renderer

use super::components::{actions, footer, header, health, impact, risk, score, threats};
use super::content::titles;
use super::grid::{self, Breakpoint, CardSpan, Placement, Span};
use super::state::DashboardState;
use crate::ui::card::DashboardCard;
use crate::ui::context::RenderContext;
use crate::ui::theme::{ColorToken, Palette, blend_color};

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Widget;
use std::time::Duration;

/// Card borders above and below the body.
const CARD_CHROME_ROWS: u16 = 2;
/// Card borders plus horizontal padding.
const CARD_CHROME_COLS: u16 = 4;
/// A clipped card needs at least this many rows to be drawn at all.
const MIN_VISIBLE_ROWS: u16 = 3;

type BodyRenderer = fn(&mut Frame, Rect, &RenderContext);

/// A card on the page and the component drawn inside it.
struct Panel {
    card: DashboardCard<'static>,
    /// Body rows needed for a given body width.
    height: fn(u16) -> u16,
    body: BodyRenderer,
}

fn panels() -> [Panel; 6] {
    [
        Panel {
            card: DashboardCard::new(titles::SCORE).span(CardSpan::new(
                Span::Full,
                Span::Cols(1),
                Span::Cols(1),
            )),
            height: score::height,
            body: score::render_score,
        },
        Panel {
            card: DashboardCard::new(titles::THREATS),
            height: threats::height,
            body: threats::render_threats,
        },
        Panel {
            card: DashboardCard::new(titles::HEALTH),
            height: health::height,
            body: health::render_health,
        },
        Panel {
            card: DashboardCard::new(titles::RISK_AREAS).span(CardSpan::new(
                Span::Full,
                Span::Cols(2),
                Span::Cols(1),
            )),
            height: risk::height,
            body: risk::render_risk_areas,
        },
        Panel {
            card: DashboardCard::new(titles::PRIORITY_ACTIONS).span(CardSpan::new(
                Span::Full,
                Span::Cols(1),
                Span::Cols(1),
            )),
            height: actions::height,
            body: actions::render_priority_actions,
        },
        Panel {
            card: DashboardCard::new(titles::BUSINESS_IMPACT).span(CardSpan::FULL),
            height: impact::height,
            body: impact::render_business_impact,
        },
    ]
}

/// Header, card grid and footer areas of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn page_layout(area: Rect) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area);

    PageAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Screen rect that toggles the theme when clicked.
pub fn toggle_hit_area(area: Rect) -> Rect {
    header::toggle_area(page_layout(area).header)
}

/// Places the cards for a terminal `width` columns wide.
fn grid_rows(width: u16, panels: &[Panel]) -> (u16, Vec<Vec<Placement>>) {
    let breakpoint = Breakpoint::from_width(width);
    let columns = breakpoint.columns();
    let spans: Vec<Span> = panels
        .iter()
        .map(|panel| panel.card.layout().at(breakpoint))
        .collect();
    (columns, grid::place(&spans, columns))
}

/// Number of grid rows the page has at this terminal size.
pub fn grid_row_count(area: Rect) -> usize {
    grid_rows(area.width, &panels()).1.len()
}

/// Page background: theme colour under a faint emerald-to-cyan wash.
struct Backdrop {
    palette: Palette,
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = f64::from(area.width.saturating_sub(1).max(1));
        for x in area.left()..area.right() {
            let t = f64::from(x - area.left()) / span;
            let wash = blend_color(ColorToken::Emerald.fill(), ColorToken::Cyan.fill(), t);
            let color = blend_color(self.palette.background, wash, 0.1);
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_bg(color);
            }
        }
    }
}

/// Draws the whole dashboard as it looks `elapsed` after mount.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState, elapsed: Duration) {
    let ctx = state.context(elapsed);

    if state.with_background_color {
        f.render_widget(
            Backdrop {
                palette: ctx.palette,
            },
            f.area(),
        );
    }

    let width = f.area().width;
    let areas = page_layout(f.area());
    header::render_header(f, areas.header, &ctx);
    render_grid(f, areas.body, width, state.scroll, &ctx);
    footer::render_footer(f, areas.footer, &ctx);
}

fn render_grid(f: &mut Frame, body: Rect, width: u16, scroll: usize, ctx: &RenderContext) {
    let panels = panels();
    let (columns, rows) = grid_rows(width, &panels);
    let skip = scroll.min(rows.len().saturating_sub(1));

    let mut y = body.y;
    for row in rows.iter().skip(skip) {
        let full_row = Rect {
            y,
            height: 1,
            ..body
        };
        let height = row
            .iter()
            .map(|placement| {
                let cell_width = grid::cell_area(full_row, columns, placement).width;
                (panels[placement.index].height)(cell_width.saturating_sub(CARD_CHROME_COLS))
                    + CARD_CHROME_ROWS
            })
            .max()
            .unwrap_or(0);

        let available = body.bottom().saturating_sub(y);
        if available < MIN_VISIBLE_ROWS {
            break;
        }
        let row_area = Rect {
            y,
            height: height.min(available),
            ..body
        };

        for placement in row {
            let panel = &panels[placement.index];
            let cell = grid::cell_area(row_area, columns, placement);
            let (inner, card_ctx) = panel.card.render(f, cell, ctx);
            if !inner.is_empty() {
                (panel.body)(f, inner, &card_ctx);
            }
        }

        y += row_area.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &DashboardState, elapsed: Duration, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, state, elapsed))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    const SETTLED: Duration = Duration::from_secs(5);

    #[test]
    fn test_wide_terminal_shows_every_panel() {
        let state = DashboardState::new(&Config::default());
        let screen = text(&draw(&state, SETTLED, 140, 50));

        for title in [
            "Security Dashboard",
            titles::SCORE,
            titles::THREATS,
            titles::HEALTH,
            titles::RISK_AREAS,
            titles::PRIORITY_ACTIONS,
            titles::BUSINESS_IMPACT,
        ] {
            assert!(screen.contains(title), "missing {title}");
        }
        for value in ["78%", "1,284", "99.8%", "Healthy", "Compliance", "Critical", "$12.5K"] {
            assert!(screen.contains(value), "missing {value}");
        }
    }

    #[test]
    fn test_ring_fades_in_with_its_card() {
        use crate::ui::theme::Palette;

        let track_cells = |buffer: &Buffer| {
            buffer
                .content
                .iter()
                .filter(|cell| cell.fg == Palette::LIGHT.track)
                .count()
        };
        let state = DashboardState::new(&Config::default());

        let mounted = draw(&state, Duration::ZERO, 140, 50);
        assert_eq!(track_cells(&mounted), 0);
        let label = (0..50)
            .flat_map(|y| (0..139).map(move |x| (x, y)))
            .find(|&(x, y)| {
                mounted[(x, y)].symbol() == "7" && mounted[(x + 1, y)].symbol() == "8"
            })
            .unwrap();
        assert_eq!(mounted[label].fg, Palette::LIGHT.card_background);

        assert!(track_cells(&draw(&state, SETTLED, 140, 50)) > 0);
    }

    #[test]
    fn test_double_toggle_renders_identical_frame() {
        let original = DashboardState::new(&Config::default());
        let mut toggled = DashboardState::new(&Config::default());
        toggled.toggle_theme(Duration::from_secs(1));
        toggled.toggle_theme(Duration::from_secs(2));

        assert_eq!(
            draw(&original, SETTLED, 120, 45),
            draw(&toggled, SETTLED, 120, 45)
        );
    }

    #[test]
    fn test_single_toggle_changes_frame() {
        let original = DashboardState::new(&Config::default());
        let mut toggled = DashboardState::new(&Config::default());
        toggled.toggle_theme(Duration::from_secs(1));

        let dark = draw(&toggled, SETTLED, 120, 45);
        assert_ne!(draw(&original, SETTLED, 120, 45), dark);
        assert!(text(&dark).contains("Dark"));
    }

    #[test]
    fn test_scrolling_skips_leading_rows() {
        let mut state = DashboardState::new(&Config::default());
        state.scroll = 1;
        let screen = text(&draw(&state, SETTLED, 60, 40));
        assert!(!screen.contains(titles::SCORE));
        assert!(screen.contains(titles::THREATS));
    }

    #[test]
    fn test_grid_row_count_follows_breakpoint() {
        assert_eq!(grid_row_count(Rect::new(0, 0, 140, 50)), 3);
        assert_eq!(grid_row_count(Rect::new(0, 0, 100, 50)), 5);
        assert_eq!(grid_row_count(Rect::new(0, 0, 60, 50)), 6);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = DashboardState::new(&Config::default());
        draw(&state, Duration::ZERO, 10, 5);
        draw(&state, SETTLED, 1, 1);
    }

    #[test]
    fn test_toggle_hit_area_inside_header() {
        let area = Rect::new(0, 0, 120, 40);
        let hit = toggle_hit_area(area);
        let header = page_layout(area).header;
        assert!(header.contains(hit.as_position()));
        assert_eq!(hit.right(), header.right());
    }
}
