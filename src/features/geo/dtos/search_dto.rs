use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::geo::dtos::{
    CityResponseDto, CountryResponseDto, RegionResponseDto, StateResponseDto,
};

/// Query parameters for the cross-category search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term (required; case-insensitive substring)
    #[param(example = "ger")]
    pub q: Option<String>,
    /// Restrict to one category: countries, states, cities or regions
    #[serde(rename = "type")]
    #[param(example = "countries")]
    pub kind: Option<String>,
    /// Language code for translated names; also matched against translations
    #[param(example = "fr")]
    pub lang: Option<String>,
    /// Per-category result cap (default: 50, max: 1000)
    #[param(value_type = Option<i64>, example = 50)]
    pub limit: Option<String>,
}

/// Search results grouped by category.
///
/// Categories excluded by `type` are always present as empty arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseDto {
    pub countries: Vec<CountryResponseDto>,
    pub states: Vec<StateResponseDto>,
    pub cities: Vec<CityResponseDto>,
    pub regions: Vec<RegionResponseDto>,
}
