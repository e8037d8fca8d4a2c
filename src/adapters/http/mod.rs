//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`app_router`] merges them behind
//! the shared JSON envelope defined in [`response`].

pub mod analytics;
pub mod health;
pub mod response;
pub mod survey;

use axum::Router;

pub use analytics::{analytics_routes, AnalyticsAppState};
pub use response::{ApiError, ApiResponse, ErrorResponse};
pub use survey::{survey_routes, SurveyAppState};

/// Builds the complete API router. Middleware layers are added by the caller.
pub fn app_router(analytics: AnalyticsAppState, survey: SurveyAppState) -> Router {
    Router::new()
        .merge(health::health_routes())
        .merge(analytics_routes(analytics))
        .merge(survey_routes(survey))
}
