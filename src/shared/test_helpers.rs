#[cfg(test)]
pub use fixtures::*;

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum_test::TestServer;
    use sqlx::types::Json;

    use crate::core::config::{AppConfig, SwaggerConfig};
    use crate::core::error::{AppError, Result};
    use crate::core::router::build_router;
    use crate::features::geo::filters::{
        CityFilter, CountryFilter, CountryLookup, RegionFilter, StateFilter,
    };
    use crate::features::geo::models::{City, Country, Region, State, Translations};
    use crate::features::geo::repositories::GeoRepository;
    use crate::features::geo::GeoService;
    use crate::shared::types::Page;

    fn translations(pairs: &[(&str, &str)]) -> Option<Json<Translations>> {
        Some(Json(
            pairs
                .iter()
                .map(|(lang, name)| (lang.to_string(), name.to_string()))
                .collect(),
        ))
    }

    fn region(id: i64, name: &str, names: &[(&str, &str)]) -> Region {
        Region {
            id,
            name: name.to_string(),
            translations: if names.is_empty() {
                None
            } else {
                translations(names)
            },
        }
    }

    fn country(
        id: i64,
        region_id: i64,
        (iso2, iso3): (&str, &str),
        name: &str,
        native: &str,
        names: &[(&str, &str)],
    ) -> Country {
        Country {
            id,
            region_id,
            iso2: iso2.to_string(),
            iso3: iso3.to_string(),
            name: name.to_string(),
            native: Some(native.to_string()),
            translations: if names.is_empty() {
                None
            } else {
                translations(names)
            },
        }
    }

    fn state(id: i64, country_id: i64, name: &str) -> State {
        State {
            id,
            country_id,
            name: name.to_string(),
        }
    }

    fn city(id: i64, country_id: i64, state_id: i64, name: &str) -> City {
        City {
            id,
            country_id,
            state_id,
            name: name.to_string(),
        }
    }

    /// Small world used across handler and service tests, sorted by id
    pub struct Dataset {
        pub regions: Vec<Region>,
        pub countries: Vec<Country>,
        pub states: Vec<State>,
        pub cities: Vec<City>,
    }

    pub fn sample_dataset() -> Dataset {
        Dataset {
            regions: vec![
                region(1, "Africa", &[("fr", "Afrique"), ("de", "Afrika")]),
                region(2, "Americas", &[("fr", "Amérique")]),
                region(3, "Asia", &[]),
                region(4, "Europe", &[("fr", "Europe"), ("de", "Europa")]),
            ],
            countries: vec![
                country(
                    1,
                    4,
                    ("DE", "DEU"),
                    "Germany",
                    "Deutschland",
                    &[("fr", "Allemagne"), ("de", "Deutschland")],
                ),
                country(2, 4, ("FR", "FRA"), "France", "France", &[("de", "Frankreich")]),
                country(
                    3,
                    2,
                    ("US", "USA"),
                    "United States",
                    "United States",
                    &[("fr", "États-Unis"), ("de", "Vereinigte Staaten")],
                ),
                country(4, 1, ("NG", "NGA"), "Nigeria", "Nigeria", &[]),
                country(5, 3, ("JP", "JPN"), "Japan", "日本", &[("fr", "Japon")]),
            ],
            states: vec![
                state(10, 1, "Bavaria"),
                state(11, 1, "Berlin"),
                state(20, 2, "Île-de-France"),
                state(30, 3, "California"),
                state(31, 3, "Texas"),
                state(32, 3, "New York"),
                state(40, 4, "Lagos"),
            ],
            cities: vec![
                city(100, 1, 10, "Munich"),
                city(101, 1, 10, "Nuremberg"),
                city(102, 1, 10, "Augsburg"),
                city(110, 1, 11, "Berlin"),
                city(200, 2, 20, "Paris"),
                city(300, 3, 30, "Los Angeles"),
                city(301, 3, 30, "San Francisco"),
                city(302, 3, 30, "San Diego"),
                city(310, 3, 31, "Houston"),
                city(311, 3, 31, "Austin"),
                city(320, 3, 32, "New York City"),
                city(400, 4, 40, "Lagos"),
            ],
        }
    }

    /// Apply a page window to rows already in store order
    fn window<'a, T: Clone + 'a>(rows: impl Iterator<Item = &'a T>, page: &Page) -> Vec<T> {
        let rows = rows.skip(page.offset.max(0) as usize).cloned();
        match page.limit {
            Some(limit) => rows.take(limit.max(0) as usize).collect(),
            None => rows.collect(),
        }
    }

    /// In-memory store evaluating the same typed filters as the SQL repository
    pub struct InMemoryGeoRepository {
        data: Dataset,
    }

    impl InMemoryGeoRepository {
        pub fn new(data: Dataset) -> Self {
            Self { data }
        }
    }

    #[async_trait]
    impl GeoRepository for InMemoryGeoRepository {
        async fn find_regions(&self, filter: &RegionFilter) -> Result<Vec<Region>> {
            let rows = self.data.regions.iter().filter(|r| filter.matches(r));
            Ok(window(rows, &filter.page))
        }

        async fn find_region(&self, id: i64) -> Result<Option<Region>> {
            Ok(self.data.regions.iter().find(|r| r.id == id).cloned())
        }

        async fn find_countries(&self, filter: &CountryFilter) -> Result<Vec<Country>> {
            let rows = self.data.countries.iter().filter(|c| filter.matches(c));
            Ok(window(rows, &filter.page))
        }

        async fn find_country(&self, lookup: &CountryLookup) -> Result<Option<Country>> {
            Ok(self
                .data
                .countries
                .iter()
                .find(|c| lookup.matches(c))
                .cloned())
        }

        async fn find_states(&self, filter: &StateFilter) -> Result<Vec<State>> {
            let rows = self.data.states.iter().filter(|s| filter.matches(s));
            Ok(window(rows, &filter.page))
        }

        async fn find_state(&self, id: i64) -> Result<Option<State>> {
            Ok(self.data.states.iter().find(|s| s.id == id).cloned())
        }

        async fn find_cities(&self, filter: &CityFilter) -> Result<Vec<City>> {
            let rows = self.data.cities.iter().filter(|c| filter.matches(c));
            Ok(window(rows, &filter.page))
        }

        async fn find_city(&self, id: i64) -> Result<Option<City>> {
            Ok(self.data.cities.iter().find(|c| c.id == id).cloned())
        }
    }

    /// Store whose every call fails, for exercising the 500 paths
    pub struct FailingGeoRepository;

    fn unavailable<T>() -> Result<T> {
        Err(AppError::Internal("store unavailable".to_string()))
    }

    #[async_trait]
    impl GeoRepository for FailingGeoRepository {
        async fn find_regions(&self, _filter: &RegionFilter) -> Result<Vec<Region>> {
            unavailable()
        }

        async fn find_region(&self, _id: i64) -> Result<Option<Region>> {
            unavailable()
        }

        async fn find_countries(&self, _filter: &CountryFilter) -> Result<Vec<Country>> {
            unavailable()
        }

        async fn find_country(&self, _lookup: &CountryLookup) -> Result<Option<Country>> {
            unavailable()
        }

        async fn find_states(&self, _filter: &StateFilter) -> Result<Vec<State>> {
            unavailable()
        }

        async fn find_state(&self, _id: i64) -> Result<Option<State>> {
            unavailable()
        }

        async fn find_cities(&self, _filter: &CityFilter) -> Result<Vec<City>> {
            unavailable()
        }

        async fn find_city(&self, _id: i64) -> Result<Option<City>> {
            unavailable()
        }
    }

    pub fn sample_service() -> Arc<GeoService> {
        Arc::new(GeoService::new(
            Arc::new(InMemoryGeoRepository::new(sample_dataset())),
            "en",
        ))
    }

    pub fn failing_service() -> Arc<GeoService> {
        Arc::new(GeoService::new(Arc::new(FailingGeoRepository), "en"))
    }

    fn test_app_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            default_language: "en".to_string(),
        }
    }

    fn test_swagger_config() -> SwaggerConfig {
        SwaggerConfig {
            title: "Geographic API".to_string(),
            version: "test".to_string(),
            description: "test".to_string(),
        }
    }

    /// Full application router over the given service
    pub fn server_with(service: Arc<GeoService>) -> TestServer {
        let app = build_router(service, &test_app_config(), &test_swagger_config());
        TestServer::new(app).expect("failed to start test server")
    }

    pub fn sample_server() -> TestServer {
        server_with(sample_service())
    }

    pub fn failing_server() -> TestServer {
        server_with(failing_service())
    }
}
