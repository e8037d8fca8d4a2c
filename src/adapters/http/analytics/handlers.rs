//! HTTP handlers for analytics endpoints.
//!
//! The POST endpoints score raw answers sent in the body; the GET endpoints
//! load a campaign through the application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};

use crate::application::handlers::analytics::{
    CompareCohortsHandler, CompareCohortsQuery, GetCampaignCultureHandler,
    GetCampaignCultureQuery, GetLeadershipReviewHandler, GetLeadershipReviewQuery,
    LeadershipReviewError,
};
use crate::config::{AnalyticsConfig, ValidationError};
use crate::domain::analysis::{
    CohortAggregator, CohortKey, GapAnalyzer, GapSeverityBands, LeadershipReview,
    LeadershipReviewAnalyzer, ReviewError, ScoringEngine,
};
use crate::domain::foundation::{CampaignId, DomainError, ErrorCode, ModuleCode};
use crate::domain::survey::{IpsativeAnswer, LikertAnswer};
use crate::domain::validation::{validate_ipsative_answer, validate_likert_answer};
use crate::ports::ResponseReader;

use super::super::response::{ApiError, ApiResponse};
use super::dto::{
    CampaignCultureResponse, CultureProfileRequest, CultureProfileResponse,
    DepartmentComparisonResponse, GapRequest, GapResponse, GapView, LikertScoresRequest,
    LikertScoresResponse, ModuleFilterParams, StakeholderComparisonResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analytics dependencies and policy.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub response_reader: Arc<dyn ResponseReader>,
    pub cohort_aggregator: CohortAggregator,
    pub leadership_analyzer: LeadershipReviewAnalyzer,
    pub severity_bands: Option<GapSeverityBands>,
}

impl AnalyticsAppState {
    /// Builds state with the policy taken from configuration.
    pub fn from_config(
        response_reader: Arc<dyn ResponseReader>,
        config: &AnalyticsConfig,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            response_reader,
            cohort_aggregator: config.cohort_aggregator(),
            leadership_analyzer: config.leadership_analyzer(),
            severity_bands: config.severity_bands()?,
        })
    }

    pub fn compare_cohorts_handler(&self) -> CompareCohortsHandler {
        CompareCohortsHandler::new(self.response_reader.clone(), self.cohort_aggregator)
    }

    pub fn campaign_culture_handler(&self) -> GetCampaignCultureHandler {
        GetCampaignCultureHandler::new(self.response_reader.clone())
    }

    pub fn leadership_review_handler(&self) -> GetLeadershipReviewHandler {
        GetLeadershipReviewHandler::new(self.response_reader.clone(), self.leadership_analyzer)
    }
}

impl From<LeadershipReviewError> for ApiError {
    fn from(err: LeadershipReviewError) -> Self {
        match err {
            LeadershipReviewError::Analytics(e) => e.into(),
            LeadershipReviewError::Review(e @ ReviewError::InsufficientRaters { .. }) => {
                ApiError::unprocessable(ErrorCode::InsufficientRaters, e.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Parsing helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_campaign_id(raw: &str) -> Result<CampaignId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid campaign ID format"))
}

fn parse_module(params: &ModuleFilterParams) -> Result<Option<ModuleCode>, ApiError> {
    params
        .module
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(|m| m.parse::<ModuleCode>())
        .transpose()
        .map_err(|e| DomainError::from(e).into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Stateless scoring
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analytics/culture-profile
///
/// Validates every distribution, then returns the mean culture profile.
pub async fn culture_profile(
    payload: Result<Json<CultureProfileRequest>, JsonRejection>,
) -> Result<ApiResponse<CultureProfileResponse>, ApiError> {
    let Json(request) = payload?;

    for (i, distribution) in request.distributions.iter().enumerate() {
        let field = format!("distributions[{}]", i);
        let answer = IpsativeAnswer {
            question_id: field.clone(),
            distribution: *distribution,
        };
        if let Some(err) = validate_ipsative_answer(&answer).error {
            return Err(ApiError::invalid_answer(&field, &err));
        }
    }

    let profile = ScoringEngine::calculate_culture_profile(&request.distributions);
    Ok(ApiResponse::ok(CultureProfileResponse {
        dominant: profile.dominant(),
        profile,
        distribution_count: request.distributions.len(),
    }))
}

/// POST /api/analytics/likert-scores
///
/// Validates every value against `1..=scaleMax`, then scores by dimension.
pub async fn likert_scores(
    payload: Result<Json<LikertScoresRequest>, JsonRejection>,
) -> Result<ApiResponse<LikertScoresResponse>, ApiError> {
    let Json(request) = payload?;

    for (i, item) in request.answers.iter().enumerate() {
        let field = format!("answers[{}]", i);
        let answer = LikertAnswer {
            question_id: field.clone(),
            value: item.value,
        };
        if let Some(err) = validate_likert_answer(&answer, 1, item.scale_max).error {
            return Err(ApiError::invalid_answer(&field, &err));
        }
    }

    Ok(ApiResponse::ok(LikertScoresResponse {
        dimensions: ScoringEngine::calculate_likert_dimension_scores(&request.answers),
    }))
}

/// POST /api/analytics/gap
pub async fn gap(
    State(state): State<AnalyticsAppState>,
    payload: Result<Json<GapRequest>, JsonRejection>,
) -> Result<ApiResponse<GapResponse>, ApiError> {
    let Json(request) = payload?;
    let gaps = GapAnalyzer::calculate_gap(&request.current, &request.preferred);

    Ok(ApiResponse::ok(GapResponse {
        gaps: GapView::from_results(gaps, state.severity_bands.as_ref()),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Campaign queries
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/analytics/departments/:campaign_id?module=
pub async fn department_comparison(
    State(state): State<AnalyticsAppState>,
    Path(campaign_id): Path<String>,
    params: Result<Query<ModuleFilterParams>, QueryRejection>,
) -> Result<ApiResponse<DepartmentComparisonResponse>, ApiError> {
    let campaign_id = parse_campaign_id(&campaign_id)?;
    let Query(params) = params?;
    let module = parse_module(&params)?;

    let comparison = state
        .compare_cohorts_handler()
        .handle(CompareCohortsQuery {
            campaign_id,
            key: CohortKey::Department,
            module,
        })
        .await?;

    Ok(ApiResponse::ok(DepartmentComparisonResponse::new(comparison, module)))
}

/// GET /api/analytics/stakeholders/:campaign_id?module=
pub async fn stakeholder_comparison(
    State(state): State<AnalyticsAppState>,
    Path(campaign_id): Path<String>,
    params: Result<Query<ModuleFilterParams>, QueryRejection>,
) -> Result<ApiResponse<StakeholderComparisonResponse>, ApiError> {
    let campaign_id = parse_campaign_id(&campaign_id)?;
    let Query(params) = params?;
    let module = parse_module(&params)?;

    let comparison = state
        .compare_cohorts_handler()
        .handle(CompareCohortsQuery {
            campaign_id,
            key: CohortKey::StakeholderGroup,
            module,
        })
        .await?;

    Ok(ApiResponse::ok(StakeholderComparisonResponse::new(comparison, module)))
}

/// GET /api/analytics/culture/:campaign_id
pub async fn campaign_culture(
    State(state): State<AnalyticsAppState>,
    Path(campaign_id): Path<String>,
) -> Result<ApiResponse<CampaignCultureResponse>, ApiError> {
    let campaign_id = parse_campaign_id(&campaign_id)?;

    let report = state
        .campaign_culture_handler()
        .handle(GetCampaignCultureQuery { campaign_id })
        .await?;

    Ok(ApiResponse::ok(CampaignCultureResponse::new(
        report,
        state.severity_bands.as_ref(),
    )))
}

/// GET /api/analytics/leadership/:campaign_id
pub async fn leadership_review(
    State(state): State<AnalyticsAppState>,
    Path(campaign_id): Path<String>,
) -> Result<ApiResponse<LeadershipReview>, ApiError> {
    let campaign_id = parse_campaign_id(&campaign_id)?;

    let review = state
        .leadership_review_handler()
        .handle(GetLeadershipReviewQuery { campaign_id })
        .await?;

    Ok(ApiResponse::ok(review))
}
