use serde::Serialize;
use sqlx::FromRow;

/// City model; carries both its state and its country
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: i64,
    pub country_id: i64,
    pub state_id: i64,
    pub name: String,
}
