//! Command line front end.

use crate::config::{load_config, FinderConfig};
use crate::error::FinderError;
use crate::presenter::{self, DetailView};
use crate::state::{SearchError, UiState};
use crate::{controller_from_config, tui, SubmitTrigger};
use clap::{Parser, Subcommand};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub const EMPTY_QUERY_MESSAGE: &str = "Enter a meal name to search for.";
pub const NO_VIDEO_MESSAGE: &str = "This recipe has no video tutorial.";

#[derive(Parser, Debug)]
#[command(name = "meal-finder", version, about = "Search TheMealDB for recipes")]
pub struct Cli {
    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file (default: ./meal-finder.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the interactive screen defaults to
    /// meal-finder.log in the temp directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive search screen (default)
    Tui,
    /// Search by name and list the matching meals
    Search {
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search by name and show the full recipe of one result
    Show {
        query: String,
        /// Which result to show, starting at 1
        #[arg(long, default_value_t = 1)]
        pick: usize,
        /// Print the recipe as JSON
        #[arg(long)]
        json: bool,
        /// Also open the video tutorial in the browser
        #[arg(long)]
        open_video: bool,
    },
}

impl Cli {
    /// Whether this run takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Tui))
    }

    /// Defaults, then the config file, then `MEAL_FINDER__*`, then `--base-url`.
    pub fn resolve_config(&self) -> Result<FinderConfig, FinderError> {
        let mut config = match &self.config {
            Some(path) => load_config(Some(path.as_path()))?,
            None => FinderConfig::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        Ok(config)
    }
}

/// How a non-interactive search ended.
enum Found {
    Meals,
    Nothing,
}

/// Run the parsed command, writing results to `out` and failures to `err`.
///
/// Returns the process exit status: 0 on success and when nothing matched,
/// 1 on any failure.
pub async fn execute(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match run(cli, out, err).await {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            1
        }
    }
}

async fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), FinderError> {
    let config = cli.resolve_config()?;
    debug!("{:?}", config);

    let mut controller = controller_from_config(&config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(controller),
        Command::Search { query, json } => {
            controller.set_query(query);
            controller.submit(SubmitTrigger::EnterKey).await;
            if let Found::Nothing = report(controller.state(), out)? {
                return Ok(());
            }

            let cards = presenter::cards(controller.state().results());
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
            } else {
                write!(out, "{}", presenter::render_cards(&cards))?;
            }
            Ok(())
        }
        Command::Show {
            query,
            pick,
            json,
            open_video,
        } => {
            controller.set_query(query);
            controller.submit(SubmitTrigger::EnterKey).await;
            if let Found::Nothing = report(controller.state(), out)? {
                return Ok(());
            }

            let count = controller.state().results().len();
            if pick == 0 || pick > count {
                return Err(FinderError::NoSuchResult { index: pick, count });
            }
            controller.select(pick - 1);

            let Some(meal) = controller.state().selected() else {
                return Err(FinderError::NoSuchResult { index: pick, count });
            };
            let detail = DetailView::from(meal);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
            } else {
                write!(out, "{}", presenter::render_detail(&detail))?;
            }

            if open_video {
                match &detail.video {
                    Some(link) => link.open().map_err(FinderError::BrowserError)?,
                    None => writeln!(err, "{NO_VIDEO_MESSAGE}")?,
                }
            }
            Ok(())
        }
    }
}

/// Print the search message, if any. A failed fetch is an error exit,
/// no matches is not.
fn report(state: &UiState, out: &mut dyn Write) -> Result<Found, FinderError> {
    match state.error_kind() {
        Some(SearchError::FetchFailed) => Err(FinderError::SearchFailed),
        Some(kind @ SearchError::NoMatches) => {
            writeln!(out, "{}", kind.message())?;
            Ok(Found::Nothing)
        }
        // Blank queries are never sent
        None if state.results().is_empty() => {
            writeln!(out, "{EMPTY_QUERY_MESSAGE}")?;
            Ok(Found::Nothing)
        }
        None => Ok(Found::Meals),
    }
}
