//! Discovery flow scenarios against a controllable source: resolution,
//! failure, retry, timeout, and the stale-response ordering guarantee.

use std::time::Duration;

use async_trait::async_trait;
use dishcover_discovery::{DiscoveryFlow, FetchStatus, SearchRequest, UserSession, ViewState};
use dishcover_recipe::Recipe;
use dishcover_source::{RecipeSource, SourceError};

struct StubSource {
    recipes: Vec<Recipe>,
    delay: Duration,
    fail: bool,
}

impl StubSource {
    fn serving(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            delay: Duration::ZERO,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            recipes: vec![],
            delay: Duration::ZERO,
            fail: true,
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn respond(&self) -> Result<Vec<Recipe>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(SourceError::BadPayload("stub failure".to_string()));
        }
        Ok(self.recipes.clone())
    }
}

#[async_trait]
impl RecipeSource for StubSource {
    async fn search(&self, _selected: &[String]) -> Result<Vec<Recipe>, SourceError> {
        self.respond().await
    }

    async fn recommend(&self, _user_id: Option<&str>) -> Result<Vec<Recipe>, SourceError> {
        self.respond().await
    }
}

fn recipe(id: u32, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: vec!["Rice".to_string()],
        steps: vec!["Cook".to_string()],
        minutes: 15,
        image_url: None,
    }
}

fn success_names(state: &ViewState) -> Vec<String> {
    match state {
        ViewState::Results(FetchStatus::Success(recipes)) => {
            recipes.iter().map(|r| r.name.clone()).collect()
        }
        other => panic!("expected a successful results state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ingredient_search_resolves_to_success() {
    let source = StubSource::serving(vec![recipe(1, "Rice Pilaf")]);
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    flow.browse_ingredients().unwrap();
    let ticket = flow.submit_ingredients(vec!["Rice".to_string()]).unwrap();
    let state = flow.resolve(&source, ticket).await;

    assert_eq!(success_names(state), vec!["Rice Pilaf"]);
}

#[tokio::test]
async fn test_recommendation_resolves_to_success() {
    let source = StubSource::serving(vec![recipe(3, "Chicken Stir Fry")]);
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    let ticket = flow.surprise_me().unwrap();
    let state = flow.resolve(&source, ticket).await;

    assert_eq!(success_names(state), vec!["Chicken Stir Fry"]);
}

#[tokio::test]
async fn test_detected_ingredients_drive_the_same_search_path() {
    let source = StubSource::serving(vec![recipe(4, "Tomato Basil Salad")]);
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    flow.browse_ingredients().unwrap();
    let ticket = flow
        .ingredients_detected(vec!["Tomato".to_string(), "Basil".to_string()])
        .unwrap();
    assert_eq!(
        ticket.request,
        SearchRequest::ByIngredients {
            selected: vec!["Tomato".to_string(), "Basil".to_string()]
        }
    );

    let state = flow.resolve(&source, ticket).await;
    assert_eq!(success_names(state), vec!["Tomato Basil Salad"]);
}

#[tokio::test]
async fn test_empty_result_is_still_a_success() {
    let source = StubSource::serving(vec![]);
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    let ticket = flow.surprise_me().unwrap();
    let state = flow.resolve(&source, ticket).await;

    assert_eq!(
        *state,
        ViewState::Results(FetchStatus::Success(vec![]))
    );
}

#[tokio::test]
async fn test_fetch_failure_surfaces_one_readable_message() {
    let source = StubSource::failing();
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    let ticket = flow.surprise_me().unwrap();
    let state = flow.resolve(&source, ticket).await;

    match state {
        ViewState::Results(FetchStatus::Error(message)) => {
            assert!(message.contains("stub failure"), "got: {message}");
        }
        other => panic!("expected an error state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_reissues_the_same_last_request() {
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());
    flow.browse_ingredients().unwrap();
    let first = flow.submit_ingredients(vec!["Tofu".to_string()]).unwrap();

    let failing = StubSource::failing();
    flow.resolve(&failing, first).await;
    assert!(matches!(
        flow.state(),
        ViewState::Results(FetchStatus::Error(_))
    ));

    let second = flow.retry().unwrap();
    assert_eq!(*flow.state(), ViewState::Results(FetchStatus::Loading));
    assert_eq!(
        second.request,
        SearchRequest::ByIngredients {
            selected: vec!["Tofu".to_string()]
        },
        "retry must re-issue the request that failed, not a cleared one"
    );

    let healthy = StubSource::serving(vec![recipe(9, "Tofu Bowl")]);
    let state = flow.resolve(&healthy, second).await;
    assert_eq!(success_names(state), vec!["Tofu Bowl"]);
}

#[tokio::test]
async fn test_stale_fetch_never_overwrites_the_newer_search() {
    let mut flow = DiscoveryFlow::new(UserSession::anonymous());

    flow.browse_ingredients().unwrap();
    let first = flow.submit_ingredients(vec!["Chicken".to_string()]).unwrap();

    // The user abandons the pending search and starts another one.
    flow.search_again().unwrap();
    flow.browse_ingredients().unwrap();
    let second = flow.submit_ingredients(vec!["Rice".to_string()]).unwrap();

    // The first fetch comes back late; it must be dropped.
    assert!(!flow.complete(&first, Ok(vec![recipe(1, "Roast Chicken")])));
    assert_eq!(*flow.state(), ViewState::Results(FetchStatus::Loading));

    assert!(flow.complete(&second, Ok(vec![recipe(5, "Rice Pilaf")])));
    assert_eq!(success_names(flow.state()), vec!["Rice Pilaf"]);

    // And the first outcome stays dead even after the second landed.
    assert!(!flow.complete(&first, Ok(vec![recipe(1, "Roast Chicken")])));
    assert_eq!(success_names(flow.state()), vec!["Rice Pilaf"]);
}

#[tokio::test]
async fn test_slow_fetch_times_out_and_remains_retryable() {
    let slow = StubSource::serving(vec![recipe(1, "Rice Pilaf")])
        .with_delay(Duration::from_millis(500));
    let mut flow = DiscoveryFlow::new(UserSession::anonymous())
        .with_request_timeout(Duration::from_millis(50));

    let ticket = flow.surprise_me().unwrap();
    let state = flow.resolve(&slow, ticket).await;

    match state {
        ViewState::Results(FetchStatus::Error(message)) => {
            assert!(message.contains("No response"), "got: {message}");
        }
        other => panic!("expected a timeout error state, got {other:?}"),
    }

    // The timeout leaves the flow interactive: retry goes back to loading.
    let retry = flow.retry().unwrap();
    assert_eq!(*flow.state(), ViewState::Results(FetchStatus::Loading));

    let fast = StubSource::serving(vec![recipe(1, "Rice Pilaf")]);
    let state = flow.resolve(&fast, retry).await;
    assert_eq!(success_names(state), vec!["Rice Pilaf"]);
}
