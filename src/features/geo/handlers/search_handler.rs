use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::geo::dtos::{SearchQuery, SearchResponseDto};
use crate::features::geo::services::GeoService;
use crate::shared::types::ErrorResponse;

/// Search countries, states, cities and regions by substring
///
/// Each category is capped at `limit` independently. `type` restricts the search
/// to one category; the others come back as empty arrays.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches grouped by category", body = SearchResponseDto),
        (status = 400, description = "Search query (q) parameter is required", body = ErrorResponse),
        (status = 500, description = "Search failed", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search(
    State(service): State<Arc<GeoService>>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<SearchResponseDto>> {
    let results = service
        .search(&query)
        .await
        .map_err(|e| e.context("Search failed"))?;
    Ok(Json(results))
}
