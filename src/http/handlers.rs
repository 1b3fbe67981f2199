//! HTTP request handlers for the Boruto API
//!
//! Implements the root, hero listing and hero search endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{BorutoError, Result};
use crate::core::services::Services;
use crate::core::types::ApiResponse;

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to Boruto Api";

/// Page used when the `page` parameter is absent
pub const DEFAULT_PAGE: &str = "1";

/// Decoded query string as ordered key/value pairs
///
/// Extracted as a pair list rather than a struct so that repeated
/// keys are accepted instead of rejected by the extractor.
pub type QueryPairs = Vec<(String, String)>;

/// First value of `key`, ignoring later repetitions
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Query string of `GET /heroes`
#[derive(Debug, Default)]
pub struct ListParams {
    pub page: Option<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_param(pairs, "page").map(str::to_string),
        }
    }
}

/// Query string of `GET /heroes/search`
#[derive(Debug, Default)]
pub struct SearchParams {
    pub name: String,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_param(pairs, "name").unwrap_or_default().to_string(),
        }
    }
}

/// Root handler
///
/// Fixed liveness text.
pub async fn root_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Parse the raw `page` parameter, defaulting to page 1
///
/// Only integer conversion happens here; the catalog decides
/// whether the number is in range.
///
/// # Errors
///
/// - `InvalidPageNumber`: the value is not a 32-bit integer
pub fn parse_page(raw: Option<&str>) -> Result<i32> {
    let raw = raw.unwrap_or(DEFAULT_PAGE);
    raw.parse::<i32>()
        .map_err(|_| BorutoError::InvalidPageNumber(raw.to_string()))
}

/// List heroes handler
///
/// Returns one catalog page with its neighbor pointers.
///
/// # Arguments
///
/// * `services` - Shared application services
/// * `query` - Query string; the first `page` value is used
///
/// # Errors
///
/// - `InvalidPageNumber`: `page` is not an integer (400)
/// - `PageOutOfRange`: `page` is outside the catalog (404)
pub async fn list_heroes_handler(
    State(services): State<Arc<Services>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<ApiResponse>> {
    let params = ListParams::from_pairs(&query);
    let page = parse_page(params.page.as_deref())?;
    let result = services.heroes.get_page(page)?;

    tracing::debug!(
        page = result.page,
        heroes = result.heroes.len(),
        prev_page = ?result.prev_page,
        next_page = ?result.next_page,
        "Serving hero page"
    );

    Ok(Json(ApiResponse::page(result)))
}

/// Search heroes handler
///
/// Case-insensitive name substring search over the whole catalog.
/// Never fails: an empty or unmatched query yields an empty list.
pub async fn search_heroes_handler(
    State(services): State<Arc<Services>>,
    Query(query): Query<QueryPairs>,
) -> Json<ApiResponse> {
    let params = SearchParams::from_pairs(&query);
    let heroes = services.heroes.search(&params.name);

    tracing::debug!(
        query = %params.name,
        matches = heroes.len(),
        "Hero search"
    );

    Json(ApiResponse::search(heroes))
}
