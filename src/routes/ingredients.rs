use axum::{Json, extract::Query, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /ingredients - Selectable ingredient catalog
/// An optional `q` narrows the catalog by case-insensitive substring.
pub async fn get_ingredients(Query(query): Query<CatalogQuery>) -> impl IntoResponse {
    let ingredients = match query.q.as_deref() {
        Some(q) => dishcover_recipe::filter_ingredients(q),
        None => dishcover_recipe::all_ingredients(),
    };
    Json(json!({ "ingredients": ingredients }))
}
