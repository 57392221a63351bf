use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use super::Translations;

/// Region model representing a top-level grouping such as a continent
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub translations: Option<Json<Translations>>,
}
