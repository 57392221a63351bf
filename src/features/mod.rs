pub mod geo;
pub mod health;
