use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::geo::filters::{
    CityFilter, CountryFilter, CountryLookup, RegionFilter, StateFilter, TextMatch,
};
use crate::features::geo::models::{City, Country, Region, State};
use crate::features::geo::repositories::GeoRepository;
use crate::shared::types::Page;

const REGION_COLUMNS: &str = "SELECT id, name, translations FROM regions";
const COUNTRY_COLUMNS: &str =
    "SELECT id, region_id, iso2, iso3, name, native, translations FROM countries";
const STATE_COLUMNS: &str = "SELECT id, country_id, name FROM states";
const CITY_COLUMNS: &str = "SELECT id, country_id, state_id, name FROM cities";

/// PostgreSQL-backed repository; filters are compiled to parameterised SQL
pub struct PgGeoRepository {
    pool: PgPool,
}

impl PgGeoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Opens a `WHERE TRUE` clause so every predicate can be appended with `AND`
fn select(columns: &'static str) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(columns);
    qb.push(" WHERE TRUE");
    qb
}

fn push_ilike(qb: &mut QueryBuilder<'static, Postgres>, column: &str, pattern: &str) {
    qb.push(column)
        .push(" ILIKE ")
        .push_bind(pattern.to_string())
        .push(r" ESCAPE '\'");
}

/// `translations ->> lang ILIKE pattern`; the language code is bound, never spliced
fn push_translation_ilike(qb: &mut QueryBuilder<'static, Postgres>, lang: &str, pattern: &str) {
    qb.push("translations ->> ")
        .push_bind(lang.to_string())
        .push(" ILIKE ")
        .push_bind(pattern.to_string())
        .push(r" ESCAPE '\'");
}

/// `AND (col1 ILIKE p OR col2 ILIKE p ...)` plus an optional translation column
fn push_text(
    qb: &mut QueryBuilder<'static, Postgres>,
    text: &TextMatch,
    columns: &[&str],
    lang: Option<&str>,
) {
    let pattern = text.like_pattern();
    qb.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        push_ilike(qb, column, &pattern);
    }
    if let Some(lang) = lang {
        qb.push(" OR ");
        push_translation_ilike(qb, lang, &pattern);
    }
    qb.push(")");
}

fn push_eq(qb: &mut QueryBuilder<'static, Postgres>, column: &str, value: Option<i64>) {
    if let Some(value) = value {
        qb.push(" AND ").push(column).push(" = ").push_bind(value);
    }
}

fn push_page(qb: &mut QueryBuilder<'static, Postgres>, page: &Page) {
    qb.push(" ORDER BY id ASC");
    if let Some(limit) = page.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }
    if page.offset > 0 {
        qb.push(" OFFSET ").push_bind(page.offset);
    }
}

#[async_trait]
impl GeoRepository for PgGeoRepository {
    async fn find_regions(&self, filter: &RegionFilter) -> Result<Vec<Region>> {
        let mut qb = select(REGION_COLUMNS);
        if let Some(text) = &filter.text {
            push_text(&mut qb, text, &["name"], filter.lang.as_deref());
        }
        push_page(&mut qb, &filter.page);

        qb.build_query_as::<Region>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch regions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_region(&self, id: i64) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, name, translations
            FROM regions
            WHERE id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region by id {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn find_countries(&self, filter: &CountryFilter) -> Result<Vec<Country>> {
        let mut qb = select(COUNTRY_COLUMNS);
        push_eq(&mut qb, "region_id", filter.region_id);
        if let Some(text) = &filter.text {
            let columns: &[&str] = if filter.match_codes {
                &["name", "native", "iso2", "iso3"]
            } else {
                &["name", "native"]
            };
            push_text(&mut qb, text, columns, filter.lang.as_deref());
        }
        push_page(&mut qb, &filter.page);

        qb.build_query_as::<Country>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch countries: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_country(&self, lookup: &CountryLookup) -> Result<Option<Country>> {
        let mut qb = select(COUNTRY_COLUMNS);
        match lookup {
            CountryLookup::Id(id) => {
                qb.push(" AND id = ").push_bind(*id);
            }
            CountryLookup::Iso2(code) => {
                qb.push(" AND iso2 = ").push_bind(code.clone());
            }
        }
        push_page(&mut qb, &Page::first(1));

        qb.build_query_as::<Country>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch country {:?}: {:?}", lookup, e);
                AppError::Database(e)
            })
    }

    async fn find_states(&self, filter: &StateFilter) -> Result<Vec<State>> {
        let mut qb = select(STATE_COLUMNS);
        push_eq(&mut qb, "country_id", filter.country_id);
        if let Some(text) = &filter.text {
            push_text(&mut qb, text, &["name"], None);
        }
        push_page(&mut qb, &filter.page);

        qb.build_query_as::<State>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch states: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_state(&self, id: i64) -> Result<Option<State>> {
        sqlx::query_as::<_, State>(
            r#"
            SELECT id, country_id, name
            FROM states
            WHERE id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch state by id {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn find_cities(&self, filter: &CityFilter) -> Result<Vec<City>> {
        let mut qb = select(CITY_COLUMNS);
        push_eq(&mut qb, "country_id", filter.country_id);
        push_eq(&mut qb, "state_id", filter.state_id);
        if let Some(text) = &filter.text {
            push_text(&mut qb, text, &["name"], None);
        }
        push_page(&mut qb, &filter.page);

        qb.build_query_as::<City>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch cities: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_city(&self, id: i64) -> Result<Option<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, country_id, state_id, name
            FROM cities
            WHERE id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch city by id {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_query_sql() {
        let filter = CityFilter {
            country_id: Some(233),
            state_id: Some(1416),
            text: TextMatch::new("spring"),
            page: Page {
                limit: Some(2),
                offset: 1,
            },
        };
        let mut qb = select(CITY_COLUMNS);
        push_eq(&mut qb, "country_id", filter.country_id);
        push_eq(&mut qb, "state_id", filter.state_id);
        if let Some(text) = &filter.text {
            push_text(&mut qb, text, &["name"], None);
        }
        push_page(&mut qb, &filter.page);

        assert_eq!(
            qb.sql(),
            "SELECT id, country_id, state_id, name FROM cities WHERE TRUE \
             AND country_id = $1 AND state_id = $2 AND (name ILIKE $3 ESCAPE '\\') \
             ORDER BY id ASC LIMIT $4 OFFSET $5"
        );
    }

    #[test]
    fn test_country_text_sql_with_translation() {
        let mut qb = select(COUNTRY_COLUMNS);
        push_text(
            &mut qb,
            &TextMatch::new("alle").unwrap(),
            &["name", "native", "iso2", "iso3"],
            Some("fr"),
        );
        push_page(&mut qb, &Page::unbounded());

        assert_eq!(
            qb.sql(),
            "SELECT id, region_id, iso2, iso3, name, native, translations FROM countries WHERE TRUE \
             AND (name ILIKE $1 ESCAPE '\\' OR native ILIKE $2 ESCAPE '\\' \
             OR iso2 ILIKE $3 ESCAPE '\\' OR iso3 ILIKE $4 ESCAPE '\\' \
             OR translations ->> $5 ILIKE $6 ESCAPE '\\') ORDER BY id ASC"
        );
    }
}
