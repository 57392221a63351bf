use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_LIST_LIMIT, MAX_LIMIT};
use crate::shared::validation::{non_empty, parse_leading_int};

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Skip/limit window applied by the store after filtering.
///
/// `limit: None` means every matching row is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: i64,
}

impl Page {
    /// No window at all
    pub const fn unbounded() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }

    /// First `limit` rows only
    pub fn first(limit: i64) -> Self {
        Self {
            limit: Some(limit.clamp(1, MAX_LIMIT)),
            offset: 0,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Standard `limit`/`offset` query parameters.
///
/// Values are kept raw so that garbage input falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Maximum number of items (default: 100, max: 1000)
    #[param(value_type = Option<i64>, example = 100)]
    pub limit: Option<String>,

    /// Number of matching items to skip (default: 0)
    #[param(value_type = Option<i64>, example = 0)]
    pub offset: Option<String>,
}

impl PaginationQuery {
    pub fn page(&self) -> Page {
        self.page_with_default(DEFAULT_LIST_LIMIT)
    }

    pub fn page_with_default(&self, default_limit: i64) -> Page {
        Page {
            limit: Some(resolve_limit(self.limit.as_deref(), default_limit)),
            offset: resolve_offset(self.offset.as_deref()),
        }
    }
}

/// Parse a `limit` value, falling back to `default` when absent, unparseable or < 1.
pub fn resolve_limit(raw: Option<&str>, default: i64) -> i64 {
    non_empty(raw)
        .and_then(parse_leading_int)
        .filter(|limit| *limit >= 1)
        .unwrap_or(default)
        .min(MAX_LIMIT)
}

/// Parse an `offset` value; anything absent, unparseable or negative is 0.
pub fn resolve_offset(raw: Option<&str>) -> i64 {
    non_empty(raw)
        .and_then(parse_leading_int)
        .unwrap_or(0)
        .max(0)
}
