/// Default page size for list endpoints that paginate
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Default per-category cap for `/search`
pub const DEFAULT_SEARCH_LIMIT: i64 = 50;

/// Maximum `limit` accepted on any endpoint
pub const MAX_LIMIT: i64 = 1000;

/// Language whose names are stored in the `name` column
pub const DEFAULT_LANGUAGE: &str = "en";

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// Body of the fallback 404 for unmatched routes
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Body of any 500 that has no route-specific message
pub const GENERIC_FAILURE: &str = "Something went wrong!";
