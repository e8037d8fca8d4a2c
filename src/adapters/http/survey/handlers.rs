//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::handlers::survey::{
    SubmissionError, SubmittedAnswer, ValidateSubmissionCommand, ValidateSubmissionHandler,
    ValidateSubmissionResult,
};
use crate::domain::foundation::OrganizationId;
use crate::ports::TenantReader;

use super::super::response::{ApiError, ApiResponse};
use super::dto::ValidateSubmissionRequest;

/// Header carrying the tenant the submission belongs to.
pub const ORGANIZATION_HEADER: &str = "x-organization-id";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyAppState {
    pub tenant_reader: Arc<dyn TenantReader>,
}

impl SurveyAppState {
    pub fn new(tenant_reader: Arc<dyn TenantReader>) -> Self {
        Self { tenant_reader }
    }

    pub fn validate_submission_handler(&self) -> ValidateSubmissionHandler {
        ValidateSubmissionHandler::new(self.tenant_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tenant extractor
// ════════════════════════════════════════════════════════════════════════════════

/// Organization resolved from the `x-organization-id` header.
///
/// Missing or malformed headers are rejected with 401 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationContext(pub OrganizationId);

impl<S> axum::extract::FromRequestParts<S> for OrganizationContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let raw = parts
                .headers
                .get(ORGANIZATION_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .ok_or_else(|| ApiError::unauthorized("Missing organization header"))?;

            raw.parse::<OrganizationId>()
                .map(OrganizationContext)
                .map_err(|_| ApiError::unauthorized("Invalid organization header"))
        })
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            e @ SubmissionError::UnauthorizedModules(_) => {
                ApiError::unauthorized_module(e.to_string())
            }
            SubmissionError::Analytics(e) => e.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/survey/validate
///
/// Checks module authorization for the caller's package, then every answer.
/// Answer problems are listed in the result rather than failing the request.
pub async fn validate_submission(
    State(state): State<SurveyAppState>,
    OrganizationContext(organization_id): OrganizationContext,
    payload: Result<Json<ValidateSubmissionRequest>, JsonRejection>,
) -> Result<ApiResponse<ValidateSubmissionResult>, ApiError> {
    let Json(request) = payload?;

    let modules = request.modules()?;
    let answers = request
        .answers
        .into_iter()
        .map(SubmittedAnswer::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let result = state
        .validate_submission_handler()
        .handle(ValidateSubmissionCommand {
            organization_id,
            modules,
            answers,
        })
        .await?;

    Ok(ApiResponse::ok(result))
}
