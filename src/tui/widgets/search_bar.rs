//! Query input with cursor and placeholder

use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Search for meals (e.g., Pasta, Chicken...)";

pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in `query`
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
    /// The search button is disabled while a request is outstanding
    button_enabled: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
            button_enabled: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn button_enabled(mut self, enabled: bool) -> Self {
        self.button_enabled = enabled;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let button_style = if self.button_enabled {
            self.theme.title_style()
        } else {
            self.theme.dimmed_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ")
            .title_bottom(Line::from(Span::styled(" ^S search ", button_style)).right_aligned());

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor_span = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("> ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            if self.focused {
                spans.push(cursor_span);
            }
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            let cursor = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(cursor);
            spans.push(Span::raw(before));
            if self.focused {
                spans.push(cursor_span);
            }
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
