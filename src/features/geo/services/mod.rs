mod geo_service;

pub use geo_service::GeoService;
