use serde::Serialize;
use sqlx::FromRow;

/// State model representing an administrative subdivision of a country
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct State {
    pub id: i64,
    pub country_id: i64,
    pub name: String,
}
