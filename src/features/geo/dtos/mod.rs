mod geo_dto;
mod search_dto;

pub use geo_dto::*;
pub use search_dto::*;
