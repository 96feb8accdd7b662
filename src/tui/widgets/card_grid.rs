//! Responsive grid of result cards

use crate::presenter::CardView;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 6;
const MIN_CARD_WIDTH: u16 = 32;
const MAX_COLUMNS: usize = 4;

pub struct CardGrid<'a> {
    cards: &'a [CardView],
    highlighted: Option<usize>,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    #[must_use]
    pub const fn new(cards: &'a [CardView], theme: &'a Theme) -> Self {
        Self {
            cards,
            highlighted: None,
            theme,
        }
    }

    /// Highlight a card; `None` when the grid does not have focus
    #[must_use]
    pub const fn highlighted(mut self, index: Option<usize>) -> Self {
        self.highlighted = index;
        self
    }

    /// Columns that fit in `width`: one per 32 cells, at most four.
    #[must_use]
    pub fn columns_for(width: u16) -> usize {
        usize::from(width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS)
    }

    fn card_lines(&self, card: &'a CardView) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(card.name.as_str(), self.theme.heading_style())),
            Line::from(vec![
                Span::styled("@ ", self.theme.dimmed_style()),
                Span::styled(card.origin.as_str(), self.theme.origin_style()),
            ]),
            Line::from(vec![
                Span::styled("# ", self.theme.dimmed_style()),
                Span::styled(card.category.as_str(), self.theme.category_style()),
            ]),
            Line::from(Span::styled(card.thumbnail.as_str(), self.theme.dimmed_style())),
        ]
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() || area.height < CARD_HEIGHT {
            return;
        }

        let columns = Self::columns_for(area.width);
        let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);

        // Scroll so the highlighted card's row stays on screen
        let first_row = self
            .highlighted
            .map(|i| (i / columns + 1).saturating_sub(visible_rows))
            .unwrap_or(0);

        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
        let row_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal(row_constraints.clone()).split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = (first_row + row_idx) * columns + col;
                let Some(card) = self.cards.get(index) else {
                    return;
                };

                let is_highlighted = self.highlighted == Some(index);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(if is_highlighted {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(if is_highlighted {
                        self.theme.focused_border_style().add_modifier(Modifier::BOLD)
                    } else {
                        self.theme.border_style()
                    });

                Paragraph::new(self.card_lines(card))
                    .block(block)
                    .render(*cell, buf);
            }
        }
    }
}
