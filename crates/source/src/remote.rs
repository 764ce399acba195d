use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use dishcover_recipe::Recipe;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use url::Url;

use crate::{ImageAnalyzer, RecipeSource, SourceError, record::RecipeRecord};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the remote recipe backend.
///
/// Endpoints, relative to the base URL:
/// - `POST recipes/search` with `{"ingredients": [...]}`
/// - `GET recipes/recommended` with an optional `user_id` query parameter
pub struct RemoteSource {
    client: Client,
    base_url: Url,
}

impl RemoteSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    }

    pub fn with_timeouts(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(timeout_secs, connect_timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|err| SourceError::InvalidUrl(err.to_string()))
    }

    async fn fetch_records(&self, request: reqwest::RequestBuilder) -> Result<Vec<Recipe>, SourceError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status()));
        }
        let records: Vec<RecipeRecord> = response.json().await?;
        Ok(records.into_iter().map(Recipe::from).collect())
    }
}

#[async_trait]
impl RecipeSource for RemoteSource {
    #[tracing::instrument(skip(self))]
    async fn search(&self, selected: &[String]) -> Result<Vec<Recipe>, SourceError> {
        let url = self.endpoint("recipes/search")?;
        self.fetch_records(
            self.client
                .post(url)
                .json(&serde_json::json!({ "ingredients": selected })),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn recommend(&self, user_id: Option<&str>) -> Result<Vec<Recipe>, SourceError> {
        let url = self.endpoint("recipes/recommended")?;
        let mut request = self.client.get(url);
        if let Some(user_id) = user_id {
            request = request.query(&[("user_id", user_id)]);
        }
        self.fetch_records(request).await
    }
}

/// Client for the remote image-analysis endpoint. Photo bytes go out
/// base64-encoded; ingredient names come back.
pub struct RemoteImageAnalyzer {
    client: Client,
    base_url: Url,
}

impl RemoteImageAnalyzer {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    }

    pub fn with_timeouts(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(timeout_secs, connect_timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }
}

/// Analysis responses in the wild are either a bare name array or wrapped
/// in an `ingredients` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeResponse {
    Names(Vec<String>),
    Wrapped { ingredients: Vec<String> },
}

#[async_trait]
impl ImageAnalyzer for RemoteImageAnalyzer {
    #[tracing::instrument(skip(self, image))]
    async fn ingredients_from_image(&self, image: &[u8]) -> Result<Vec<String>, SourceError> {
        let url = self
            .base_url
            .join("images/analyze")
            .map_err(|err| SourceError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "image": STANDARD.encode(image) }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status()));
        }

        match response.json::<AnalyzeResponse>().await? {
            AnalyzeResponse::Names(names) => Ok(names),
            AnalyzeResponse::Wrapped { ingredients } => Ok(ingredients),
        }
    }
}

fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> Result<Client, SourceError> {
    Ok(ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()?)
}

fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    let mut url = Url::parse(base_url).map_err(|err| SourceError::InvalidUrl(err.to_string()))?;
    // join() drops the last path segment unless the base ends with a slash.
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_resolve_under_the_base_path() {
        let source = RemoteSource::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            source.endpoint("recipes/search").unwrap().as_str(),
            "http://localhost:8080/api/recipes/search"
        );
        assert_eq!(
            source.endpoint("recipes/recommended").unwrap().as_str(),
            "http://localhost:8080/api/recipes/recommended"
        );
    }

    #[test]
    fn test_trailing_slash_is_preserved() {
        let source = RemoteSource::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            source.endpoint("recipes/search").unwrap().as_str(),
            "http://localhost:8080/api/recipes/search"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            RemoteSource::new("not a url"),
            Err(SourceError::InvalidUrl(_))
        ));
    }
}
