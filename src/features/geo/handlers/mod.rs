pub mod geo_handler;
pub mod search_handler;

pub use geo_handler::*;
pub use search_handler::*;
