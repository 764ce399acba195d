use std::time::Duration;

use axum::{Json, extract::State, http::HeaderMap};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use dishcover_discovery::{DiscoveryFlow, FetchStatus, UserSession, ViewState};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchPayload {
    #[validate(length(min = 1, message = "Select at least one ingredient"))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ImagePayload {
    /// Base64-encoded photo bytes.
    #[validate(length(min = 1, message = "Image payload is empty"))]
    pub image: String,
}

/// POST /discover/search - Run an ingredient search to completion
pub async fn post_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SearchPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload
        .validate()
        .map_err(|err| AppError::ValidationError(err.to_string()))?;

    let mut flow = new_flow(&state, &headers);
    flow.browse_ingredients()?;
    let ticket = flow.submit_ingredients(payload.ingredients)?;
    let outcome = flow.resolve(state.source.as_ref(), ticket).await;
    finish(outcome)
}

/// GET /discover/recommended - Run a recommendation flow to completion
/// The opaque `x-user-id` header, when present, is forwarded to the source.
pub async fn get_recommended(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut flow = new_flow(&state, &headers);
    let ticket = flow.surprise_me()?;
    let outcome = flow.resolve(state.source.as_ref(), ticket).await;
    finish(outcome)
}

/// POST /discover/image - Detect ingredients in a photo, then search
pub async fn post_image_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ImagePayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload
        .validate()
        .map_err(|err| AppError::ValidationError(err.to_string()))?;

    let image = STANDARD
        .decode(payload.image.as_bytes())
        .map_err(|err| AppError::ValidationError(format!("Image is not valid base64: {err}")))?;
    let detected = state.analyzer.ingredients_from_image(&image).await?;
    tracing::debug!(?detected, "image analysis completed");

    let mut flow = new_flow(&state, &headers);
    flow.browse_ingredients()?;
    let ticket = flow.ingredients_detected(detected.clone())?;
    match flow.resolve(state.source.as_ref(), ticket).await {
        ViewState::Results(FetchStatus::Success(recipes)) => Ok(Json(json!({
            "detected": detected,
            "recipes": recipes,
        }))),
        ViewState::Results(FetchStatus::Error(message)) => {
            Err(AppError::FetchFailed(message.clone()))
        }
        _ => Err(AppError::InternalError(
            "discovery flow ended off the results screen".to_string(),
        )),
    }
}

fn new_flow(state: &AppState, headers: &HeaderMap) -> DiscoveryFlow {
    let session = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(UserSession::for_user)
        .unwrap_or_default();

    DiscoveryFlow::new(session).with_request_timeout(Duration::from_secs(
        state.config.discovery.request_timeout_secs,
    ))
}

fn finish(state: &ViewState) -> Result<Json<serde_json::Value>, AppError> {
    match state {
        ViewState::Results(FetchStatus::Success(recipes)) => {
            Ok(Json(json!({ "recipes": recipes })))
        }
        ViewState::Results(FetchStatus::Error(message)) => {
            Err(AppError::FetchFailed(message.clone()))
        }
        _ => Err(AppError::InternalError(
            "discovery flow ended off the results screen".to_string(),
        )),
    }
}
