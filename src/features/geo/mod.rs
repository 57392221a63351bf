//! Geographic lookup feature.
//!
//! Read-only access to a four-level hierarchy with optional name translation
//! and a cross-category substring search.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Regions (continents), translatable
//! - Level 2: Countries, translatable, addressable by ISO2 code
//! - Level 3: States
//! - Level 4: Cities
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions` | List all regions |
//! | GET | `/regions/{continentId}` | Get region by id |
//! | GET | `/regions/{continentId}/countries` | List countries in a region |
//! | GET | `/countries` | List countries, filter by `name` |
//! | GET | `/countries/code/{iso2}` | Get country by ISO2 code |
//! | GET | `/countries/{countryId}` | Get country by id |
//! | GET | `/countries/{countryId}/states` | List states in a country |
//! | GET | `/countries/{countryId}/cities` | List cities in a country (paged) |
//! | GET | `/states` | List states, filter by `country_id` (paged) |
//! | GET | `/states/{stateId}` | Get state by id |
//! | GET | `/states/{stateId}/cities` | List cities in a state (paged) |
//! | GET | `/cities` | List cities, filter by `name`, `country_id`, `state_id` (paged) |
//! | GET | `/cities/{cityId}` | Get city by id |
//! | GET | `/search` | Search all categories by `q` |

pub mod dtos;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod translation;

pub use repositories::PgGeoRepository;
pub use services::GeoService;
