//! JSON envelope shared by every endpoint.
//!
//! Success: `{"success": true, "data": ...}`
//! Failure: `{"success": false, "error": {"code": ..., "message": ...}}`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::validation::AnswerError;
use crate::ports::AnalyticsError;

// ════════════════════════════════════════════════════════════════════════════════
// Success
// ════════════════════════════════════════════════════════════════════════════════

/// Successful response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Failure
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorResponse,
}

/// API error that implements IntoResponse.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ErrorResponse {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.error.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{} not found: {}", resource_type, id),
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized.as_str(), message)
    }

    pub fn unauthorized_module(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ErrorCode::UnauthorizedModule.as_str(), message)
    }

    pub fn unprocessable(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, code.as_str(), message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError.as_str(),
            message,
        )
    }

    /// Rejected answer, reported with its field path and localized message.
    pub fn invalid_answer(field: &str, err: &AnswerError) -> Self {
        Self::unprocessable(err.code(), format!("{}: {}", field, err.localized()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            success: false,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::CampaignNotFound(id) => ApiError::not_found("Campaign", &id.to_string()),
            AnalyticsError::OrganizationNotFound(id) => {
                ApiError::not_found("Organization", &id.to_string())
            }
            AnalyticsError::InvalidInput(msg) => ApiError::bad_request(msg),
            AnalyticsError::Database(msg) => {
                error!(error = %msg, "Database error while serving request");
                ApiError::internal("Database error")
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidSum
            | ErrorCode::NegativeValue
            | ErrorCode::NonInteger
            | ErrorCode::OutOfRange
            | ErrorCode::InsufficientRaters => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::CampaignNotFound | ErrorCode::OrganizationNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::UnauthorizedModule => StatusCode::FORBIDDEN,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let api_error = ApiError::new(status, err.code.as_str(), err.message);
        if err.details.is_empty() {
            return api_error;
        }
        let details: serde_json::Map<String, serde_json::Value> = err
            .details
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        api_error.with_details(serde_json::Value::Object(details))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
