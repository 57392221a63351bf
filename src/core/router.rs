use std::sync::Arc;

use axum::{http::StatusCode, Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::geo::{routes as geo_routes, GeoService};
use crate::features::health::routes as health_routes;
use crate::shared::constants::ROUTE_NOT_FOUND;
use crate::shared::types::ErrorResponse;

/// Endpoints listed in the startup log
pub const ENDPOINTS: &[&str] = &[
    "/",
    "/regions",
    "/regions/{continentId}",
    "/regions/{continentId}/countries",
    "/countries",
    "/countries/code/{iso2}",
    "/countries/{countryId}",
    "/countries/{countryId}/states",
    "/countries/{countryId}/cities",
    "/states",
    "/states/{stateId}",
    "/states/{stateId}/cities",
    "/cities",
    "/cities/{cityId}",
    "/search",
];

async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ROUTE_NOT_FOUND)),
    )
}

/// Build the application router with every feature, docs and middleware layered on
pub fn build_router(
    geo_service: Arc<GeoService>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger_config.title.clone(),
        version: swagger_config.version.clone(),
        description: swagger_config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    Router::new()
        .merge(swagger)
        .merge(health_routes::routes())
        .merge(geo_routes::routes(geo_service))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(middleware::cors_layer(
            app_config.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use serde_json::Value;

    use crate::shared::test_helpers::sample_server;

    #[tokio::test]
    async fn test_root_reports_status_and_timestamp() {
        let server = sample_server();
        let response = server.get("/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "Geographic API is running");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_check() {
        sample_server().get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unmatched_route_returns_json_404() {
        let server = sample_server();
        let response = server.get("/planets").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&serde_json::json!({ "error": "Route not found" }));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let server = sample_server();
        let response = server
            .get("/regions")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://example.com"),
            )
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn test_request_id_is_generated_and_kept() {
        let server = sample_server();

        let generated = server.get("/health").await;
        assert!(!generated.header("x-request-id").is_empty());

        let supplied = server
            .get("/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("abc-123"),
            )
            .await;
        assert_eq!(supplied.header("x-request-id"), "abc-123");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = sample_server();
        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();

        let doc: Value = response.json();
        assert!(doc["paths"]["/search"].is_object());
    }
}
