use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geo::handlers;
use crate::features::geo::services::GeoService;

/// Create routes for the geo feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<GeoService>) -> Router {
    Router::new()
        // Region routes
        .route("/regions", get(handlers::list_regions))
        .route("/regions/{continentId}", get(handlers::get_region))
        .route(
            "/regions/{continentId}/countries",
            get(handlers::list_countries_by_region),
        )
        // Country routes (code lookup must come before {countryId} route)
        .route("/countries", get(handlers::list_countries))
        .route("/countries/code/{iso2}", get(handlers::get_country_by_code))
        .route("/countries/{countryId}", get(handlers::get_country))
        .route(
            "/countries/{countryId}/states",
            get(handlers::list_states_by_country),
        )
        .route(
            "/countries/{countryId}/cities",
            get(handlers::list_cities_by_country),
        )
        // State routes
        .route("/states", get(handlers::list_states))
        .route("/states/{stateId}", get(handlers::get_state))
        .route("/states/{stateId}/cities", get(handlers::list_cities_by_state))
        // City routes
        .route("/cities", get(handlers::list_cities))
        .route("/cities/{cityId}", get(handlers::get_city))
        // Search
        .route("/search", get(handlers::search))
        .with_state(service)
}
