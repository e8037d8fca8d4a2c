//! HTTP routes for analytics endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    campaign_culture, culture_profile, department_comparison, gap, leadership_review,
    likert_scores, stakeholder_comparison, AnalyticsAppState,
};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        .route("/api/analytics/culture-profile", post(culture_profile))
        .route("/api/analytics/likert-scores", post(likert_scores))
        .route("/api/analytics/gap", post(gap))
        .route("/api/analytics/departments/:campaign_id", get(department_comparison))
        .route("/api/analytics/stakeholders/:campaign_id", get(stakeholder_comparison))
        .route("/api/analytics/culture/:campaign_id", get(campaign_culture))
        .route("/api/analytics/leadership/:campaign_id", get(leadership_review))
        .with_state(state)
}
