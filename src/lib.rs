pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod state;
pub mod tui;

pub use client::{MealDbClient, MealSource};
pub use config::{load_config, FinderConfig};
pub use controller::{run_search, QueryController, Resolution, SearchOutcome, SubmitTrigger};
pub use error::FinderError;
pub use model::{Meal, Slot, SLOT_COUNT};
pub use presenter::{CardView, DetailView, ExternalLink, Ingredient};
pub use state::{SearchError, SearchTicket, UiState, FETCH_FAILED_MESSAGE, NO_MEALS_MESSAGE};

use std::sync::Arc;

/// Build a controller backed by the real endpoint.
pub fn controller_from_config(
    config: &FinderConfig,
) -> Result<QueryController<dyn MealSource>, FinderError> {
    let source: Arc<dyn MealSource> = Arc::new(MealDbClient::new(config)?);
    Ok(QueryController::new(source))
}
