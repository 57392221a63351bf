use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppQuery, PathId, PathText};
use crate::features::geo::dtos::{
    CityListQuery, CityResponseDto, CountryListQuery, CountryResponseDto, LangQuery,
    RegionResponseDto, StateListQuery, StateResponseDto,
};
use crate::features::geo::services::GeoService;
use crate::shared::types::{ErrorResponse, PaginationQuery};

// ==================== Region Handlers ====================

/// List all regions
#[utoipa::path(
    get,
    path = "/regions",
    params(LangQuery),
    responses(
        (status = 200, description = "List of regions", body = Vec<RegionResponseDto>),
        (status = 500, description = "Failed to fetch regions", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<GeoService>>,
    AppQuery(query): AppQuery<LangQuery>,
) -> Result<Json<Vec<RegionResponseDto>>> {
    let regions = service
        .list_regions(query.lang.as_deref())
        .await
        .map_err(|e| e.context("Failed to fetch regions"))?;
    Ok(Json(regions))
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/regions/{continentId}",
    params(
        ("continentId" = i64, Path, description = "Region id"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Region details", body = RegionResponseDto),
        (status = 404, description = "Region not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch region details", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
    AppQuery(query): AppQuery<LangQuery>,
) -> Result<Json<RegionResponseDto>> {
    let region = service
        .get_region(id, query.lang.as_deref())
        .await
        .map_err(|e| e.context("Failed to fetch region details"))?;
    Ok(Json(region))
}

/// List countries in a region
#[utoipa::path(
    get,
    path = "/regions/{continentId}/countries",
    params(
        ("continentId" = i64, Path, description = "Region id"),
        LangQuery
    ),
    responses(
        (status = 200, description = "List of countries in the region", body = Vec<CountryResponseDto>),
        (status = 500, description = "Failed to fetch countries in region", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_countries_by_region(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
    AppQuery(query): AppQuery<LangQuery>,
) -> Result<Json<Vec<CountryResponseDto>>> {
    let countries = service
        .list_countries_by_region(id, query.lang.as_deref())
        .await
        .map_err(|e| e.context("Failed to fetch countries in region"))?;
    Ok(Json(countries))
}

// ==================== Country Handlers ====================

/// List countries, optionally filtered by name
#[utoipa::path(
    get,
    path = "/countries",
    params(CountryListQuery),
    responses(
        (status = 200, description = "List of countries", body = Vec<CountryResponseDto>),
        (status = 500, description = "Failed to fetch countries", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<GeoService>>,
    AppQuery(query): AppQuery<CountryListQuery>,
) -> Result<Json<Vec<CountryResponseDto>>> {
    let countries = service
        .list_countries(&query)
        .await
        .map_err(|e| e.context("Failed to fetch countries"))?;
    Ok(Json(countries))
}

/// Get a country by ISO2 code (case-insensitive)
#[utoipa::path(
    get,
    path = "/countries/code/{iso2}",
    params(
        ("iso2" = String, Path, description = "ISO 3166-1 alpha-2 code", example = "us"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Country details", body = CountryResponseDto),
        (status = 404, description = "Country not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch country", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn get_country_by_code(
    State(service): State<Arc<GeoService>>,
    PathText(iso2): PathText,
    AppQuery(query): AppQuery<LangQuery>,
) -> Result<Json<CountryResponseDto>> {
    let country = service
        .get_country_by_iso2(iso2.as_deref(), query.lang.as_deref())
        .await
        .map_err(|e| e.context("Failed to fetch country"))?;
    Ok(Json(country))
}

/// Get a country by id
#[utoipa::path(
    get,
    path = "/countries/{countryId}",
    params(
        ("countryId" = i64, Path, description = "Country id"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Country details", body = CountryResponseDto),
        (status = 404, description = "Country not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch country details", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
    AppQuery(query): AppQuery<LangQuery>,
) -> Result<Json<CountryResponseDto>> {
    let country = service
        .get_country(id, query.lang.as_deref())
        .await
        .map_err(|e| e.context("Failed to fetch country details"))?;
    Ok(Json(country))
}

/// List states in a country
#[utoipa::path(
    get,
    path = "/countries/{countryId}/states",
    params(
        ("countryId" = i64, Path, description = "Country id")
    ),
    responses(
        (status = 200, description = "List of states in the country", body = Vec<StateResponseDto>),
        (status = 500, description = "Failed to fetch states in country", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn list_states_by_country(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
) -> Result<Json<Vec<StateResponseDto>>> {
    let states = service
        .list_states_by_country(id)
        .await
        .map_err(|e| e.context("Failed to fetch states in country"))?;
    Ok(Json(states))
}

/// List a page of cities in a country
#[utoipa::path(
    get,
    path = "/countries/{countryId}/cities",
    params(
        ("countryId" = i64, Path, description = "Country id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "List of cities in the country", body = Vec<CityResponseDto>),
        (status = 500, description = "Failed to fetch cities in country", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn list_cities_by_country(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<Vec<CityResponseDto>>> {
    let cities = service
        .list_cities_by_country(id, query.page())
        .await
        .map_err(|e| e.context("Failed to fetch cities in country"))?;
    Ok(Json(cities))
}

// ==================== State Handlers ====================

/// List states, optionally of one country
#[utoipa::path(
    get,
    path = "/states",
    params(StateListQuery),
    responses(
        (status = 200, description = "List of states", body = Vec<StateResponseDto>),
        (status = 500, description = "Failed to fetch states", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn list_states(
    State(service): State<Arc<GeoService>>,
    AppQuery(query): AppQuery<StateListQuery>,
) -> Result<Json<Vec<StateResponseDto>>> {
    let states = service
        .list_states(&query)
        .await
        .map_err(|e| e.context("Failed to fetch states"))?;
    Ok(Json(states))
}

/// Get a state by id
#[utoipa::path(
    get,
    path = "/states/{stateId}",
    params(
        ("stateId" = i64, Path, description = "State id")
    ),
    responses(
        (status = 200, description = "State details", body = StateResponseDto),
        (status = 404, description = "State not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch state details", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn get_state(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
) -> Result<Json<StateResponseDto>> {
    let state = service
        .get_state(id)
        .await
        .map_err(|e| e.context("Failed to fetch state details"))?;
    Ok(Json(state))
}

/// List a page of cities in a state
#[utoipa::path(
    get,
    path = "/states/{stateId}/cities",
    params(
        ("stateId" = i64, Path, description = "State id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "List of cities in the state", body = Vec<CityResponseDto>),
        (status = 500, description = "Failed to fetch cities in state", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn list_cities_by_state(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<Vec<CityResponseDto>>> {
    let cities = service
        .list_cities_by_state(id, query.page())
        .await
        .map_err(|e| e.context("Failed to fetch cities in state"))?;
    Ok(Json(cities))
}

// ==================== City Handlers ====================

/// List cities with optional name, country and state filters
#[utoipa::path(
    get,
    path = "/cities",
    params(CityListQuery),
    responses(
        (status = 200, description = "List of cities", body = Vec<CityResponseDto>),
        (status = 500, description = "Failed to fetch cities", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn list_cities(
    State(service): State<Arc<GeoService>>,
    AppQuery(query): AppQuery<CityListQuery>,
) -> Result<Json<Vec<CityResponseDto>>> {
    let cities = service
        .list_cities(&query)
        .await
        .map_err(|e| e.context("Failed to fetch cities"))?;
    Ok(Json(cities))
}

/// Get a city by id
#[utoipa::path(
    get,
    path = "/cities/{cityId}",
    params(
        ("cityId" = i64, Path, description = "City id")
    ),
    responses(
        (status = 200, description = "City details", body = CityResponseDto),
        (status = 404, description = "City not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch city details", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn get_city(
    State(service): State<Arc<GeoService>>,
    PathId(id): PathId,
) -> Result<Json<CityResponseDto>> {
    let city = service
        .get_city(id)
        .await
        .map_err(|e| e.context("Failed to fetch city details"))?;
    Ok(Json(city))
}
