use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use dishcover_source::{ImageAnalyzer, RecipeSource};
use tower_http::trace::TraceLayer;

mod discover;
mod health;
mod ingredients;

pub use discover::{get_recommended, post_image_search, post_search};
pub use health::{health, ready};
pub use ingredients::get_ingredients;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub source: Arc<dyn RecipeSource>,
    pub analyzer: Arc<dyn ImageAnalyzer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Ingredient catalog
        .route("/ingredients", get(get_ingredients))
        // Discovery flows
        .route("/discover/search", post(post_search))
        .route("/discover/recommended", get(get_recommended))
        .route("/discover/image", post(post_image_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
