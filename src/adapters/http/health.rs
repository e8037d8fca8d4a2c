//! Liveness endpoint.

use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::response::ApiResponse;

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> ApiResponse<HealthStatus> {
    ApiResponse::ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
