//! Static grid rules for the card layout.
//!
//! Cards flow left to right. A card that does not fit in the columns left in
//! the current row starts a new row, leaving the gap empty.

use crate::consts::cli_consts::layout::{MEDIUM_MIN_WIDTH, WIDE_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        if width >= WIDE_MIN_WIDTH {
            Breakpoint::Wide
        } else if width >= MEDIUM_MIN_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }

    pub fn columns(self) -> u16 {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Cols(u16),
    Full,
}

impl Span {
    fn resolve(self, columns: u16) -> u16 {
        match self {
            Span::Cols(n) => n.clamp(1, columns.max(1)),
            Span::Full => columns.max(1),
        }
    }
}

/// Column span of a card at each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpan {
    pub narrow: Span,
    pub medium: Span,
    pub wide: Span,
}

impl CardSpan {
    pub const SINGLE: CardSpan = CardSpan::new(Span::Cols(1), Span::Cols(1), Span::Cols(1));
    pub const FULL: CardSpan = CardSpan::new(Span::Full, Span::Full, Span::Full);

    pub const fn new(narrow: Span, medium: Span, wide: Span) -> Self {
        Self {
            narrow,
            medium,
            wide,
        }
    }

    pub fn at(&self, breakpoint: Breakpoint) -> Span {
        match breakpoint {
            Breakpoint::Narrow => self.narrow,
            Breakpoint::Medium => self.medium,
            Breakpoint::Wide => self.wide,
        }
    }
}

impl Default for CardSpan {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Where one card lands within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the card in the input order.
    pub index: usize,
    pub column: u16,
    pub span: u16,
}

/// Flows cards into rows of `columns` columns.
pub fn place(spans: &[Span], columns: u16) -> Vec<Vec<Placement>> {
    let columns = columns.max(1);
    let mut rows: Vec<Vec<Placement>> = Vec::new();
    let mut current: Vec<Placement> = Vec::new();
    let mut cursor = 0;

    for (index, span) in spans.iter().enumerate() {
        let span = span.resolve(columns);
        if cursor + span > columns {
            rows.push(std::mem::take(&mut current));
            cursor = 0;
        }
        current.push(Placement {
            index,
            column: cursor,
            span,
        });
        cursor += span;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Splits a row area into column cells and returns the rect for `placement`.
pub fn cell_area(row: Rect, columns: u16, placement: &Placement) -> Rect {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, u32::from(columns))))
        .spacing(1)
        .split(row);
    let first = cells[usize::from(placement.column)];
    let last = cells[usize::from(placement.column + placement.span - 1)];
    first.union(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(rows: &[Vec<Placement>]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|row| row.iter().map(|p| p.index).collect())
            .collect()
    }

    // Score, threats, health, risk areas, priority actions, business impact.
    fn page_spans(breakpoint: Breakpoint) -> Vec<Span> {
        let score = CardSpan::new(Span::Full, Span::Cols(1), Span::Cols(1));
        let risk = CardSpan::new(Span::Full, Span::Cols(2), Span::Cols(1));
        let actions = CardSpan::new(Span::Full, Span::Cols(1), Span::Cols(1));
        [
            score,
            CardSpan::SINGLE,
            CardSpan::SINGLE,
            risk,
            actions,
            CardSpan::FULL,
        ]
        .iter()
        .map(|span| span.at(breakpoint))
        .collect()
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(200), Breakpoint::Wide);
    }

    #[test]
    fn test_wide_layout_rows() {
        let rows = place(&page_spans(Breakpoint::Wide), 3);
        assert_eq!(indices(&rows), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
        assert_eq!(rows[2][0].span, 3);
    }

    #[test]
    fn test_medium_layout_rows() {
        let rows = place(&page_spans(Breakpoint::Medium), 2);
        assert_eq!(
            indices(&rows),
            vec![vec![0, 1], vec![2], vec![3], vec![4], vec![5]]
        );
        assert_eq!(rows[2][0].span, 2);
    }

    #[test]
    fn test_narrow_layout_is_one_card_per_row() {
        let rows = place(&page_spans(Breakpoint::Narrow), 1);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().flatten().all(|p| p.column == 0 && p.span == 1));
    }

    #[test]
    fn test_oversized_span_is_capped() {
        let rows = place(&[Span::Cols(5)], 2);
        assert_eq!(rows[0][0].span, 2);
    }

    #[test]
    fn test_cell_area_spans_columns() {
        let row = Rect::new(0, 0, 92, 10);
        let full = cell_area(
            row,
            3,
            &Placement {
                index: 0,
                column: 0,
                span: 3,
            },
        );
        assert_eq!(full, row);

        let middle = cell_area(
            row,
            3,
            &Placement {
                index: 0,
                column: 1,
                span: 1,
            },
        );
        assert!(middle.x > 0 && middle.right() < row.right());
    }
}
