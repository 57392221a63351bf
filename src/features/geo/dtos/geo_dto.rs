use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::geo::models::{City, Country, Region, State};
use crate::features::geo::translation::Localized;

// ==================== Query Parameters ====================

/// Optional translation language
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// Language code for translated names
    #[param(example = "fr")]
    pub lang: Option<String>,
}

/// Query parameters for listing countries
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryListQuery {
    /// Filter by name or native name (case-insensitive, partial match)
    #[param(example = "united")]
    pub name: Option<String>,
    /// Language code for translated names; also matched by `name`
    #[param(example = "fr")]
    pub lang: Option<String>,
}

/// Query parameters for listing states
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StateListQuery {
    /// Only states of this country
    #[param(value_type = Option<i64>, example = 233)]
    pub country_id: Option<String>,
    /// Maximum number of items (default: 100, max: 1000)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Number of matching items to skip (default: 0)
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

/// Query parameters for listing cities
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityListQuery {
    /// Filter by name (case-insensitive, partial match)
    #[param(example = "spring")]
    pub name: Option<String>,
    /// Only cities of this country
    #[param(value_type = Option<i64>)]
    pub country_id: Option<String>,
    /// Only cities of this state
    #[param(value_type = Option<i64>)]
    pub state_id: Option<String>,
    /// Maximum number of items (default: 100, max: 1000)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Number of matching items to skip (default: 0)
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

// ==================== Response DTOs ====================

/// Response DTO for region data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    pub id: i64,
    /// Translated name when a language was requested and a translation exists
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, String>>,
}

impl RegionResponseDto {
    pub fn localized(region: Region, lang: Option<&str>) -> Self {
        let name = region.display_name(lang).to_string();
        Self {
            id: region.id,
            name,
            translations: region.translations.map(|json| json.0),
        }
    }
}

/// Response DTO for country data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryResponseDto {
    pub id: i64,
    pub region_id: i64,
    pub iso2: String,
    pub iso3: String,
    /// Translated name when a language was requested and a translation exists
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, String>>,
}

impl CountryResponseDto {
    pub fn localized(country: Country, lang: Option<&str>) -> Self {
        let name = country.display_name(lang).to_string();
        Self {
            id: country.id,
            region_id: country.region_id,
            iso2: country.iso2,
            iso3: country.iso3,
            name,
            native: country.native,
            translations: country.translations.map(|json| json.0),
        }
    }
}

/// Response DTO for state data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StateResponseDto {
    pub id: i64,
    pub country_id: i64,
    pub name: String,
}

impl From<State> for StateResponseDto {
    fn from(state: State) -> Self {
        Self {
            id: state.id,
            country_id: state.country_id,
            name: state.name,
        }
    }
}

/// Response DTO for city data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityResponseDto {
    pub id: i64,
    pub country_id: i64,
    pub state_id: i64,
    pub name: String,
}

impl From<City> for CityResponseDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            country_id: city.country_id,
            state_id: city.state_id,
            name: city.name,
        }
    }
}
