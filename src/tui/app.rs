//! Search screen state that only the terminal front end needs, and the
//! mapping from key presses to controller calls.

use crate::client::MealSource;
use crate::controller::{QueryController, Resolution, SubmitTrigger};
use crate::presenter::{self, CardView, DetailView, ExternalLink};
use crate::state::SearchTicket;
use crate::tui::theme::Theme;
use crate::tui::widgets::{CardGrid, DetailModal, SearchBar};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

pub const TITLE: &str = "Meal Finder";
pub const TAGLINE: &str = "Discover delicious recipes from around the world";
pub const LOADING_MESSAGE: &str = "Searching for delicious meals...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Grid,
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Search(SearchTicket),
    OpenLink(ExternalLink),
    Quit,
}

pub struct App {
    controller: QueryController<dyn MealSource>,
    focus: Focus,
    /// Byte offset into the query, always on a char boundary
    cursor: usize,
    highlighted: usize,
    /// Grid columns at the last draw, for Up/Down navigation
    columns: usize,
    detail_scroll: u16,
    /// Scroll limit for the overlay at the last draw
    detail_max_scroll: u16,
    /// Transient line shown under the search bar (e.g. browser launch failure)
    notice: Option<String>,
    pub(crate) throbber: ThrobberState,
    theme: Theme,
}

impl App {
    pub fn new(controller: QueryController<dyn MealSource>) -> Self {
        Self {
            controller,
            focus: Focus::Query,
            cursor: 0,
            highlighted: 0,
            columns: 1,
            detail_scroll: 0,
            detail_max_scroll: 0,
            notice: None,
            throbber: ThrobberState::default(),
            theme: Theme::default(),
        }
    }

    pub fn controller(&self) -> &QueryController<dyn MealSource> {
        &self.controller
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Fold a finished request into the screen.
    pub fn apply(&mut self, resolution: Resolution) {
        self.controller.apply(resolution);
        let count = self.controller.state().results().len();
        if self.highlighted >= count {
            self.highlighted = 0;
        }
        if count == 0 {
            self.focus = Focus::Query;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }
        self.notice = None;

        if self.controller.state().selected().is_some() {
            return self.handle_detail_key(key);
        }
        match self.focus {
            Focus::Query => self.handle_query_key(key),
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    fn submit(&mut self, trigger: SubmitTrigger) -> Command {
        match self.controller.begin(trigger) {
            Some(ticket) => Command::Search(ticket),
            None => Command::None,
        }
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        let mut query = self.controller.state().query().to_string();
        edit(&mut query, &mut self.cursor);
        self.controller.set_query(query);
    }

    fn handle_query_key(&mut self, key: KeyEvent) -> Command {
        let query_len = self.controller.state().query().len();
        match key.code {
            KeyCode::Enter => self.submit(SubmitTrigger::EnterKey),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(SubmitTrigger::Button)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_query(|q, cursor| {
                    q.insert(*cursor, c);
                    *cursor += c.len_utf8();
                });
                Command::None
            }
            KeyCode::Backspace => {
                self.edit_query(|q, cursor| {
                    if let Some(prev) = q[..*cursor].chars().next_back() {
                        *cursor -= prev.len_utf8();
                        q.remove(*cursor);
                    }
                });
                Command::None
            }
            KeyCode::Delete => {
                self.edit_query(|q, cursor| {
                    if *cursor < q.len() {
                        q.remove(*cursor);
                    }
                });
                Command::None
            }
            KeyCode::Left => {
                let query = self.controller.state().query();
                if let Some(prev) = query[..self.cursor].chars().next_back() {
                    self.cursor -= prev.len_utf8();
                }
                Command::None
            }
            KeyCode::Right => {
                let query = self.controller.state().query();
                if let Some(next) = query[self.cursor..].chars().next() {
                    self.cursor += next.len_utf8();
                }
                Command::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Command::None
            }
            KeyCode::End => {
                self.cursor = query_len;
                Command::None
            }
            KeyCode::Tab | KeyCode::Down => {
                if !self.controller.state().results().is_empty() {
                    self.focus = Focus::Grid;
                }
                Command::None
            }
            KeyCode::Esc => Command::Quit,
            _ => Command::None,
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Command {
        let count = self.controller.state().results().len();
        let columns = self.columns.max(1);
        match key.code {
            KeyCode::Enter => {
                self.controller.select(self.highlighted);
                self.detail_scroll = 0;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.highlighted + 1 < count {
                    self.highlighted += 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.highlighted + columns < count {
                    self.highlighted += columns;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.highlighted < columns {
                    self.focus = Focus::Query;
                } else {
                    self.highlighted -= columns;
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => self.focus = Focus::Query,
            KeyCode::Char('q') | KeyCode::Esc => return Command::Quit,
            _ => {}
        }
        Command::None
    }

    /// Only the explicit close keys dismiss the overlay.
    fn handle_detail_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => {
                self.controller.dismiss();
                self.detail_scroll = 0;
            }
            KeyCode::Char('w') => {
                if let Some(link) = self
                    .controller
                    .state()
                    .selected()
                    .and_then(presenter::video_link)
                {
                    return Command::OpenLink(link);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail_down(1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => self.scroll_detail_down(10),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(10),
            _ => {}
        }
        Command::None
    }

    fn scroll_detail_down(&mut self, rows: u16) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(rows)
            .min(self.detail_max_scroll);
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let [header, search, status, grid, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_header(frame, header);

        let state = self.controller.state();
        frame.render_widget(
            SearchBar::new(state.query(), self.cursor, &self.theme)
                .focused(self.focus == Focus::Query && state.selected().is_none())
                .button_enabled(!state.is_loading()),
            search,
        );

        self.draw_status(frame, status);

        self.columns = CardGrid::columns_for(grid.width);
        let state = self.controller.state();
        let cards: Vec<CardView> = presenter::cards(state.results());
        let highlighted = (self.focus == Focus::Grid).then_some(self.highlighted);
        frame.render_widget(
            CardGrid::new(&cards, &self.theme).highlighted(highlighted),
            grid,
        );

        let hints = if state.selected().is_some() {
            "x/Esc close  w watch tutorial  ↑↓ scroll  ^C quit"
        } else if self.focus == Focus::Grid {
            "←↑↓→ move  Enter open  Tab search  q quit"
        } else {
            "Enter search  ^S search  Tab results  Esc quit"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, self.theme.dimmed_style())),
            help,
        );

        if let Some(meal) = state.selected() {
            let detail = DetailView::from(meal);
            let modal = DetailModal::new(&detail, &self.theme);
            // The bound moves with the terminal size
            self.detail_max_scroll = modal.max_scroll(frame.area());
            self.detail_scroll = self.detail_scroll.min(self.detail_max_scroll);
            frame.render_widget(modal.scroll(self.detail_scroll), frame.area());
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(TITLE, self.theme.title_style())),
            Line::from(Span::styled(TAGLINE, self.theme.dimmed_style())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_status(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.controller.state();
        if state.is_loading() {
            let throbber = Throbber::default()
                .label(LOADING_MESSAGE)
                .style(self.theme.origin_style())
                .throbber_style(self.theme.title_style());
            frame.render_stateful_widget(throbber, area, &mut self.throbber);
        } else if let Some(error) = state.error() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" ✗ ", self.theme.error_style()),
                    Span::styled(error.to_string(), self.theme.error_style()),
                ])),
                area,
            );
        } else if let Some(notice) = &self.notice {
            frame.render_widget(
                Paragraph::new(Span::styled(notice.clone(), self.theme.dimmed_style())),
                area,
            );
        }
    }
}
