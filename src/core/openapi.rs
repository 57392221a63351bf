use utoipa::{Modify, OpenApi};

use crate::features::geo::{dtos as geo_dtos, handlers as geo_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::status,
        health_handlers::health_check,
        // Regions
        geo_handlers::list_regions,
        geo_handlers::get_region,
        geo_handlers::list_countries_by_region,
        // Countries
        geo_handlers::list_countries,
        geo_handlers::get_country_by_code,
        geo_handlers::get_country,
        geo_handlers::list_states_by_country,
        geo_handlers::list_cities_by_country,
        // States
        geo_handlers::list_states,
        geo_handlers::get_state,
        geo_handlers::list_cities_by_state,
        // Cities
        geo_handlers::list_cities,
        geo_handlers::get_city,
        // Search
        geo_handlers::search,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Health
            health_dtos::StatusResponseDto,
            // Geo
            geo_dtos::RegionResponseDto,
            geo_dtos::CountryResponseDto,
            geo_dtos::StateResponseDto,
            geo_dtos::CityResponseDto,
            geo_dtos::SearchResponseDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness and status"),
        (name = "regions", description = "Continents and their countries"),
        (name = "countries", description = "Countries, their states and cities"),
        (name = "states", description = "States and their cities"),
        (name = "cities", description = "Cities"),
        (name = "search", description = "Substring search across all categories")
    )
)]
pub struct ApiDoc;

/// Modifier to set OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/",
            "/health",
            "/regions",
            "/regions/{continentId}",
            "/regions/{continentId}/countries",
            "/countries",
            "/countries/code/{iso2}",
            "/countries/{countryId}",
            "/countries/{countryId}/states",
            "/countries/{countryId}/cities",
            "/states",
            "/states/{stateId}",
            "/states/{stateId}/cities",
            "/cities",
            "/cities/{cityId}",
            "/search",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Geo".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Geo");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
