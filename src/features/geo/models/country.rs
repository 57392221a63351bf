use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use super::Translations;

/// Country model; `region_id` points into `regions`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: i64,
    pub region_id: i64,
    pub iso2: String,
    pub iso3: String,
    pub name: String,
    pub native: Option<String>,
    pub translations: Option<Json<Translations>>,
}
