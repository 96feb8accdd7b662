//! Colors and styles for the terminal UI

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent used for the title, focused borders and the highlighted card
    pub accent: Color,
    pub error: Color,
    pub border: Color,
    pub dimmed: Color,
    pub origin: Color,
    pub category: Color,
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::LightYellow,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            origin: Color::Yellow,
            category: Color::Cyan,
            link: Color::LightRed,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn origin_style(&self) -> Style {
        Style::default().fg(self.origin)
    }

    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }
}
