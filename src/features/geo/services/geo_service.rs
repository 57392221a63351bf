use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::geo::dtos::{
    CityListQuery, CityResponseDto, CountryListQuery, CountryResponseDto, RegionResponseDto,
    SearchQuery, SearchResponseDto, StateListQuery, StateResponseDto,
};
use crate::features::geo::filters::{
    CityFilter, CountryFilter, CountryLookup, RegionFilter, SearchCategory, SearchParams,
    StateFilter,
};
use crate::features::geo::repositories::GeoRepository;
use crate::features::geo::translation::requested_language;
use crate::shared::types::Page;

/// Service for read-only lookups over regions, countries, states and cities
pub struct GeoService {
    repository: Arc<dyn GeoRepository>,
    default_language: String,
}

impl GeoService {
    pub fn new(repository: Arc<dyn GeoRepository>, default_language: impl Into<String>) -> Self {
        Self {
            repository,
            default_language: default_language.into(),
        }
    }

    fn language(&self, lang: Option<&str>) -> Option<String> {
        requested_language(lang, &self.default_language)
    }

    // ==================== Region Methods ====================

    /// List all regions
    pub async fn list_regions(&self, lang: Option<&str>) -> Result<Vec<RegionResponseDto>> {
        let lang = self.language(lang);
        self.regions(&RegionFilter::all(), lang.as_deref()).await
    }

    /// Get a region by its id
    pub async fn get_region(
        &self,
        id: Option<i64>,
        lang: Option<&str>,
    ) -> Result<RegionResponseDto> {
        let lang = self.language(lang);
        let region = match id {
            Some(id) => self.repository.find_region(id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::NotFound("Region not found".to_string()))?;

        Ok(RegionResponseDto::localized(region, lang.as_deref()))
    }

    async fn regions(
        &self,
        filter: &RegionFilter,
        lang: Option<&str>,
    ) -> Result<Vec<RegionResponseDto>> {
        let regions = self.repository.find_regions(filter).await?;

        Ok(regions
            .into_iter()
            .map(|r| RegionResponseDto::localized(r, lang))
            .collect())
    }

    // ==================== Country Methods ====================

    /// List countries, optionally filtered by name
    pub async fn list_countries(
        &self,
        query: &CountryListQuery,
    ) -> Result<Vec<CountryResponseDto>> {
        let lang = self.language(query.lang.as_deref());
        let filter = CountryFilter::from_query(query, lang.as_deref());
        self.countries(&filter, lang.as_deref()).await
    }

    /// List all countries of a region
    pub async fn list_countries_by_region(
        &self,
        region_id: Option<i64>,
        lang: Option<&str>,
    ) -> Result<Vec<CountryResponseDto>> {
        let Some(region_id) = region_id else {
            return Ok(Vec::new());
        };
        let lang = self.language(lang);
        self.countries(&CountryFilter::by_region(region_id), lang.as_deref())
            .await
    }

    /// Get a country by its id
    pub async fn get_country(
        &self,
        id: Option<i64>,
        lang: Option<&str>,
    ) -> Result<CountryResponseDto> {
        match id {
            Some(id) => self.country(&CountryLookup::Id(id), lang).await,
            None => Err(AppError::NotFound("Country not found".to_string())),
        }
    }

    /// Get a country by its ISO 3166-1 alpha-2 code (any case)
    pub async fn get_country_by_iso2(
        &self,
        iso2: Option<&str>,
        lang: Option<&str>,
    ) -> Result<CountryResponseDto> {
        match iso2 {
            Some(code) => self.country(&CountryLookup::iso2(code), lang).await,
            None => Err(AppError::NotFound("Country not found".to_string())),
        }
    }

    async fn country(
        &self,
        lookup: &CountryLookup,
        lang: Option<&str>,
    ) -> Result<CountryResponseDto> {
        let lang = self.language(lang);
        let country = self
            .repository
            .find_country(lookup)
            .await?
            .ok_or_else(|| AppError::NotFound("Country not found".to_string()))?;

        Ok(CountryResponseDto::localized(country, lang.as_deref()))
    }

    async fn countries(
        &self,
        filter: &CountryFilter,
        lang: Option<&str>,
    ) -> Result<Vec<CountryResponseDto>> {
        let countries = self.repository.find_countries(filter).await?;

        Ok(countries
            .into_iter()
            .map(|c| CountryResponseDto::localized(c, lang))
            .collect())
    }

    // ==================== State Methods ====================

    /// List states, optionally of one country
    pub async fn list_states(&self, query: &StateListQuery) -> Result<Vec<StateResponseDto>> {
        match StateFilter::from_query(query) {
            Some(filter) => self.states(&filter).await,
            None => Ok(Vec::new()),
        }
    }

    /// List all states of a country
    pub async fn list_states_by_country(
        &self,
        country_id: Option<i64>,
    ) -> Result<Vec<StateResponseDto>> {
        match country_id {
            Some(id) => self.states(&StateFilter::by_country(id)).await,
            None => Ok(Vec::new()),
        }
    }

    /// Get a state by its id
    pub async fn get_state(&self, id: Option<i64>) -> Result<StateResponseDto> {
        let state = match id {
            Some(id) => self.repository.find_state(id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::NotFound("State not found".to_string()))?;

        Ok(state.into())
    }

    async fn states(&self, filter: &StateFilter) -> Result<Vec<StateResponseDto>> {
        let states = self.repository.find_states(filter).await?;
        Ok(states.into_iter().map(Into::into).collect())
    }

    // ==================== City Methods ====================

    /// List cities with optional name, country and state filters
    pub async fn list_cities(&self, query: &CityListQuery) -> Result<Vec<CityResponseDto>> {
        match CityFilter::from_query(query) {
            Some(filter) => self.cities(&filter).await,
            None => Ok(Vec::new()),
        }
    }

    /// List a page of the cities of a country
    pub async fn list_cities_by_country(
        &self,
        country_id: Option<i64>,
        page: Page,
    ) -> Result<Vec<CityResponseDto>> {
        match country_id {
            Some(id) => self.cities(&CityFilter::by_country(id, page)).await,
            None => Ok(Vec::new()),
        }
    }

    /// List a page of the cities of a state
    pub async fn list_cities_by_state(
        &self,
        state_id: Option<i64>,
        page: Page,
    ) -> Result<Vec<CityResponseDto>> {
        match state_id {
            Some(id) => self.cities(&CityFilter::by_state(id, page)).await,
            None => Ok(Vec::new()),
        }
    }

    /// Get a city by its id
    pub async fn get_city(&self, id: Option<i64>) -> Result<CityResponseDto> {
        let city = match id {
            Some(id) => self.repository.find_city(id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

        Ok(city.into())
    }

    async fn cities(&self, filter: &CityFilter) -> Result<Vec<CityResponseDto>> {
        let cities = self.repository.find_cities(filter).await?;
        Ok(cities.into_iter().map(Into::into).collect())
    }

    // ==================== Search ====================

    /// Substring search across the categories selected by `type`.
    ///
    /// Categories are queried concurrently; each is capped at `limit` on its own.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponseDto> {
        let lang = self.language(query.lang.as_deref());
        let params = SearchParams::from_query(query, lang.as_deref())?;
        tracing::debug!(
            "Searching '{}' in {:?} (limit {})",
            params.text.term(),
            params.target,
            params.limit
        );

        let lang = params.lang.as_deref();
        let wants = |category| params.target.includes(category);

        let (countries, states, cities, regions) = tokio::try_join!(
            async {
                if !wants(SearchCategory::Countries) {
                    return Ok(Vec::new());
                }
                self.countries(&params.country_filter(), lang).await
            },
            async {
                if !wants(SearchCategory::States) {
                    return Ok(Vec::new());
                }
                self.states(&params.state_filter()).await
            },
            async {
                if !wants(SearchCategory::Cities) {
                    return Ok(Vec::new());
                }
                self.cities(&params.city_filter()).await
            },
            async {
                if !wants(SearchCategory::Regions) {
                    return Ok(Vec::new());
                }
                self.regions(&params.region_filter(), lang).await
            },
        )?;

        Ok(SearchResponseDto {
            countries,
            states,
            cities,
            regions,
        })
    }
}
