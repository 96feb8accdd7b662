use crate::client::MealSource;
use crate::model::Meal;
use crate::state::{SearchTicket, UiState};
use log::{debug, warn};
use std::sync::Arc;

/// How a search was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The search button; disabled while a request is outstanding.
    Button,
    /// Enter in the query field; always accepted.
    EnterKey,
}

/// What a finished request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Meal>),
    NoMatches,
    Failed,
}

/// A finished request paired with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ticket: SearchTicket,
    pub outcome: SearchOutcome,
}

/// Run the request for `ticket`. This is the only step that suspends.
pub async fn run_search<S>(source: &S, ticket: SearchTicket) -> Resolution
where
    S: MealSource + ?Sized,
{
    let outcome = match source.search(ticket.query()).await {
        Ok(meals) if meals.is_empty() => SearchOutcome::NoMatches,
        Ok(meals) => SearchOutcome::Found(meals),
        Err(e) => {
            warn!("search for {:?} failed: {}", ticket.query(), e);
            SearchOutcome::Failed
        }
    };
    Resolution { ticket, outcome }
}

/// Owns the search state and drives it through the transitions in
/// [`crate::state`].
pub struct QueryController<S: MealSource + ?Sized> {
    state: UiState,
    source: Arc<S>,
}

impl<S: MealSource + ?Sized> QueryController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            state: UiState::new(),
            source,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    fn update(&mut self, f: impl FnOnce(UiState) -> UiState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.with_query(text));
    }

    /// Start a search, returning the ticket to run it under.
    ///
    /// `None` when the query is blank, or when the button is used while a
    /// request is still outstanding.
    pub fn begin(&mut self, trigger: SubmitTrigger) -> Option<SearchTicket> {
        if trigger == SubmitTrigger::Button && self.state.is_loading() {
            debug!("search button ignored while loading");
            return None;
        }

        let state = std::mem::take(&mut self.state);
        let (state, ticket) = state.begin_search();
        self.state = state;
        ticket
    }

    /// Fold a finished request into the state.
    pub fn apply(&mut self, resolution: Resolution) {
        let Resolution { ticket, outcome } = resolution;
        self.update(|s| match outcome {
            SearchOutcome::Found(meals) => s.search_succeeded(&ticket, meals),
            SearchOutcome::NoMatches => s.search_empty(&ticket),
            SearchOutcome::Failed => s.search_failed(&ticket),
        });
    }

    /// Begin, run and apply a search in one go.
    pub async fn submit(&mut self, trigger: SubmitTrigger) {
        if let Some(ticket) = self.begin(trigger) {
            let resolution = run_search(self.source.as_ref(), ticket).await;
            self.apply(resolution);
        }
    }

    pub fn select(&mut self, index: usize) {
        self.update(|s| s.select(index));
    }

    pub fn dismiss(&mut self) {
        self.update(UiState::dismiss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;
    use crate::state::{FETCH_FAILED_MESSAGE, NO_MEALS_MESSAGE};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned answers and records the queries it saw.
    struct ScriptedSource {
        answers: Mutex<Vec<Result<Vec<Meal>, FinderError>>>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(answers: Vec<Result<Vec<Meal>, FinderError>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MealSource for ScriptedSource {
        async fn search(&self, query: &str) -> Result<Vec<Meal>, FinderError> {
            self.seen.lock().unwrap().push(query.to_string());
            let answer = self.answers.lock().unwrap().remove(0);
            answer
        }
    }

    fn meal(name: &str) -> Meal {
        Meal {
            id: name.to_lowercase(),
            name: name.to_string(),
            ..Meal::default()
        }
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_request() {
        let source = ScriptedSource::new(Vec::new());
        let mut controller = QueryController::new(source.clone());
        controller.set_query("   ");
        let before = controller.state().clone();

        controller.submit(SubmitTrigger::EnterKey).await;

        assert!(source.seen().is_empty());
        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_submit_sends_trimmed_query() {
        let source = ScriptedSource::new(vec![Ok(vec![meal("Pasta Arrabiata")])]);
        let mut controller = QueryController::new(source.clone());
        controller.set_query("  Arrabiata ");

        controller.submit(SubmitTrigger::EnterKey).await;

        assert_eq!(source.seen(), vec!["Arrabiata"]);
        assert_eq!(controller.state().results().len(), 1);
        assert!(!controller.state().is_loading());
        assert_eq!(controller.state().error(), None);
    }

    #[tokio::test]
    async fn test_empty_answer_sets_no_match_message() {
        let source = ScriptedSource::new(vec![Ok(Vec::new())]);
        let mut controller = QueryController::new(source);
        controller.set_query("zzz");

        controller.submit(SubmitTrigger::Button).await;

        assert!(controller.state().results().is_empty());
        assert_eq!(controller.state().error(), Some(NO_MEALS_MESSAGE));
    }

    #[tokio::test]
    async fn test_failure_sets_fetch_message() {
        let source = ScriptedSource::new(vec![Err(FinderError::ClientError("down".into()))]);
        let mut controller = QueryController::new(source);
        controller.set_query("pasta");

        controller.submit(SubmitTrigger::EnterKey).await;

        assert!(controller.state().results().is_empty());
        assert_eq!(controller.state().error(), Some(FETCH_FAILED_MESSAGE));
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn test_button_ignored_while_loading_but_enter_is_not() {
        let source = ScriptedSource::new(Vec::new());
        let mut controller = QueryController::new(source);
        controller.set_query("pasta");

        let first = controller.begin(SubmitTrigger::Button);
        assert!(first.is_some());
        assert!(controller.begin(SubmitTrigger::Button).is_none());

        let second = controller.begin(SubmitTrigger::EnterKey);
        assert!(second.unwrap().generation() > first.unwrap().generation());
    }

    #[tokio::test]
    async fn test_select_then_dismiss() {
        let source = ScriptedSource::new(vec![Ok(vec![meal("A"), meal("B")])]);
        let mut controller = QueryController::new(source);
        controller.set_query("x");
        controller.submit(SubmitTrigger::EnterKey).await;

        controller.select(1);
        assert_eq!(controller.state().selected().unwrap().name, "B");

        controller.dismiss();
        assert_eq!(controller.state().selected(), None);
        assert_eq!(controller.state().results().len(), 2);
    }
}
