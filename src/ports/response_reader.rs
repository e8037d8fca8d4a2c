use async_trait::async_trait;

use crate::domain::foundation::{CampaignId, ModuleCode, OrganizationId};
use crate::domain::survey::SurveyResponse;

/// Read-only port for completed survey responses
#[async_trait]
pub trait ResponseReader: Send + Sync {
    /// Gets every completed response of a campaign with its answers.
    /// When `module` is set, only answers of that module are returned;
    /// responses left without answers are dropped.
    async fn fetch_responses(
        &self,
        campaign_id: CampaignId,
        module: Option<ModuleCode>,
    ) -> Result<Vec<SurveyResponse>, AnalyticsError>;
}

/// Errors that can occur while reading analytics inputs
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(OrganizationId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        AnalyticsError::Database(err.to_string())
    }
}
