use axum::{routing::get, Router};

use crate::features::health::handlers;

/// Create routes for the health feature
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/health", get(handlers::health_check))
}
