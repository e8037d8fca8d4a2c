//! HTTP routes for survey endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{validate_submission, SurveyAppState};

pub fn survey_routes(state: SurveyAppState) -> Router {
    Router::new()
        .route("/api/survey/validate", post(validate_submission))
        .with_state(state)
}
