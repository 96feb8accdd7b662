//! Detail overlay for the selected meal

use crate::presenter::DetailView;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailModal<'a> {
    detail: &'a DetailView,
    theme: &'a Theme,
    scroll: u16,
}

impl<'a> DetailModal<'a> {
    #[must_use]
    pub const fn new(detail: &'a DetailView, theme: &'a Theme) -> Self {
        Self {
            detail,
            theme,
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Calculate centered area for the modal
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Furthest the content can scroll within `area` before its last line
    /// would leave the bottom border.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = Self::popup_area(area).inner(Margin::new(1, 1));
        if inner.width == 0 {
            return 0;
        }
        let rows = self.content().line_count(inner.width);
        let overflow = rows.saturating_sub(usize::from(inner.height));
        u16::try_from(overflow).unwrap_or(u16::MAX)
    }

    fn popup_area(area: Rect) -> Rect {
        Self::centered_rect(80, 85, area)
    }

    fn content(&self) -> Paragraph<'a> {
        Paragraph::new(self.build_content()).wrap(Wrap { trim: false })
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        let detail = self.detail;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("@ ", self.theme.dimmed_style()),
                Span::styled(detail.origin.as_str(), self.theme.origin_style()),
                Span::raw("   "),
                Span::styled("# ", self.theme.dimmed_style()),
                Span::styled(detail.category.as_str(), self.theme.category_style()),
            ]),
        ];

        if !detail.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                detail.tags.join(" · "),
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(Span::styled(
            detail.thumbnail.as_str(),
            self.theme.dimmed_style(),
        )));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Ingredients", self.theme.heading_style())));
        for ingredient in &detail.ingredients {
            lines.push(Line::from(vec![
                Span::styled("  • ", self.theme.dimmed_style()),
                Span::raw(ingredient.to_string()),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Instructions", self.theme.heading_style())));
        for paragraph in &detail.paragraphs {
            lines.push(Line::from(paragraph.as_str()));
        }

        if let Some(link) = &detail.video {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("[w] ", self.theme.dimmed_style()),
                Span::styled(link.label, self.theme.link_style()),
                Span::raw("  "),
                Span::styled(link.url.as_str(), self.theme.dimmed_style()),
            ]));
        }
        if let Some(source) = &detail.source {
            lines.push(Line::from(vec![
                Span::styled("Source: ", self.theme.dimmed_style()),
                Span::styled(source.as_str(), self.theme.dimmed_style()),
            ]));
        }

        lines
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::popup_area(area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.focused_border_style())
            .title(Line::from(Span::styled(
                format!(" {} ", self.detail.name),
                self.theme.title_style(),
            )))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" [x/Esc] close ").right_aligned());

        self.content()
            .block(block)
            .scroll((self.scroll, 0))
            .render(popup_area, buf);
    }
}
