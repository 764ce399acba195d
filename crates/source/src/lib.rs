mod mock;
mod record;
mod remote;

pub use mock::{MockImageAnalyzer, MockSource};
pub use record::RecipeRecord;
pub use remote::{RemoteImageAnalyzer, RemoteSource};

use async_trait::async_trait;
use dishcover_recipe::Recipe;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Endpoint returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("No response within {0} seconds")]
    TimedOut(u64),

    #[error("Malformed response payload: {0}")]
    BadPayload(String),
}

/// Capability interface over wherever recipes come from: the built-in mock
/// data or a remote backend. Which implementation is active is a
/// configuration choice, invisible to callers.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Candidate recipes for a set of selected ingredient names.
    async fn search(&self, selected: &[String]) -> Result<Vec<Recipe>, SourceError>;

    /// The curated recommendation set. The user identifier is opaque and
    /// optional; its absence never degrades the result.
    async fn recommend(&self, user_id: Option<&str>) -> Result<Vec<Recipe>, SourceError>;
}

/// Opaque collaborator that turns photo bytes into ingredient names.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn ingredients_from_image(&self, image: &[u8]) -> Result<Vec<String>, SourceError>;
}
