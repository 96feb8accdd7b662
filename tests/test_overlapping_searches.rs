use async_trait::async_trait;
use meal_finder::{
    run_search, FinderError, Meal, MealSource, QueryController, SubmitTrigger, NO_MEALS_MESSAGE,
};
use std::sync::Arc;

/// Answers every query with one meal named after the query.
struct EchoSource;

#[async_trait]
impl MealSource for EchoSource {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, FinderError> {
        if query == "nothing" {
            return Ok(Vec::new());
        }
        Ok(vec![Meal {
            id: query.to_string(),
            name: query.to_string(),
            ..Meal::default()
        }])
    }
}

fn controller() -> QueryController<dyn MealSource> {
    let source: Arc<dyn MealSource> = Arc::new(EchoSource);
    QueryController::new(source)
}

#[tokio::test]
async fn test_older_response_arriving_last_is_discarded() {
    let mut controller = controller();
    let source = controller.source();

    controller.set_query("chicken");
    let first = controller.begin(SubmitTrigger::EnterKey).unwrap();
    controller.set_query("beef");
    let second = controller.begin(SubmitTrigger::EnterKey).unwrap();

    let newer = run_search(source.as_ref(), second).await;
    let older = run_search(source.as_ref(), first).await;

    controller.apply(newer);
    assert!(!controller.state().is_loading());
    controller.apply(older);

    let state = controller.state();
    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results()[0].name, "beef");
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_loading_holds_until_newest_resolves() {
    let mut controller = controller();
    let source = controller.source();

    controller.set_query("chicken");
    let first = controller.begin(SubmitTrigger::EnterKey).unwrap();
    controller.set_query("nothing");
    let second = controller.begin(SubmitTrigger::EnterKey).unwrap();

    controller.apply(run_search(source.as_ref(), first).await);
    assert!(controller.state().is_loading());
    assert!(controller.state().results().is_empty());

    controller.apply(run_search(source.as_ref(), second).await);
    assert!(!controller.state().is_loading());
    assert_eq!(controller.state().error(), Some(NO_MEALS_MESSAGE));
}

#[tokio::test]
async fn test_concurrent_tasks_settle_on_latest_query() {
    let mut controller = controller();
    let mut handles = Vec::new();

    for query in ["soup", "stew", "pie"] {
        controller.set_query(query);
        let ticket = controller.begin(SubmitTrigger::EnterKey).unwrap();
        let source = controller.source();
        handles.push(tokio::spawn(async move {
            run_search(source.as_ref(), ticket).await
        }));
    }

    // Apply in reverse completion order
    let mut resolutions = Vec::new();
    for handle in handles {
        resolutions.push(handle.await.unwrap());
    }
    for resolution in resolutions.into_iter().rev() {
        controller.apply(resolution);
    }

    assert_eq!(controller.state().results()[0].name, "pie");
    assert!(!controller.state().is_loading());
}
