//! Interactive terminal front end.
//!
//! Key presses are handled on the main task between frames. Each search runs
//! as its own tokio task and reports back over a channel; nothing cancels an
//! earlier request, the ticket check in [`crate::state`] discards it instead.

mod app;
mod theme;
mod widgets;

pub use app::{App, Command, Focus, LOADING_MESSAGE, TAGLINE, TITLE};
pub use theme::Theme;

use crate::client::MealSource;
use crate::controller::{run_search, QueryController, Resolution};
use crate::error::FinderError;
use crate::state::SearchTicket;
use log::warn;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal and run the search screen until the user quits.
///
/// Must be called from within a tokio runtime; searches are spawned onto it.
pub fn run(controller: QueryController<dyn MealSource>) -> Result<(), FinderError> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, App::new(controller));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<(), FinderError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Resolution>();

    loop {
        while let Ok(resolution) = rx.try_recv() {
            app.apply(resolution);
        }
        if app.controller().state().is_loading() {
            app.throbber.calc_next();
        }

        terminal.draw(|frame| app.draw(frame))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            Command::None => {}
            Command::Quit => return Ok(()),
            Command::Search(ticket) => spawn_search(&app, ticket, tx.clone()),
            Command::OpenLink(link) => {
                if let Err(e) = link.open() {
                    warn!("could not open {}: {}", link.url, e);
                    app.set_notice(FinderError::BrowserError(e).to_string());
                }
            }
        }
    }
}

fn spawn_search(app: &App, ticket: SearchTicket, tx: UnboundedSender<Resolution>) {
    let source = app.controller().source();
    tokio::spawn(async move {
        let resolution = run_search(source.as_ref(), ticket).await;
        // The receiver only goes away when the screen has closed
        let _ = tx.send(resolution);
    });
}
