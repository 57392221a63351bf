//! Store access for the geo feature.
//!
//! The service talks to the store only through [`GeoRepository`], so the same
//! handlers run against PostgreSQL in production and an in-memory fixture in tests.

mod pg_repository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::geo::filters::{
    CityFilter, CountryFilter, CountryLookup, RegionFilter, StateFilter,
};
use crate::features::geo::models::{City, Country, Region, State};

pub use pg_repository::PgGeoRepository;

/// Read-only queries over the four geo collections.
///
/// List methods return rows in store order (ascending `id`) after applying the
/// filter's page window. Single-row methods return the first match, if any.
#[async_trait]
pub trait GeoRepository: Send + Sync {
    async fn find_regions(&self, filter: &RegionFilter) -> Result<Vec<Region>>;

    async fn find_region(&self, id: i64) -> Result<Option<Region>>;

    async fn find_countries(&self, filter: &CountryFilter) -> Result<Vec<Country>>;

    async fn find_country(&self, lookup: &CountryLookup) -> Result<Option<Country>>;

    async fn find_states(&self, filter: &StateFilter) -> Result<Vec<State>>;

    async fn find_state(&self, id: i64) -> Result<Option<State>>;

    async fn find_cities(&self, filter: &CityFilter) -> Result<Vec<City>>;

    async fn find_city(&self, id: i64) -> Result<Option<City>>;
}
