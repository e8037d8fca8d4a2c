//! GetCampaignCultureHandler - Query handler for the campaign OCAI report.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::{CampaignCultureAnalyzer, CampaignCultureReport};
use crate::domain::foundation::{CampaignId, ModuleCode};
use crate::ports::{AnalyticsError, ResponseReader};

#[derive(Debug, Clone)]
pub struct GetCampaignCultureQuery {
    pub campaign_id: CampaignId,
}

pub type GetCampaignCultureResult = CampaignCultureReport;

pub struct GetCampaignCultureHandler {
    reader: Arc<dyn ResponseReader>,
}

impl GetCampaignCultureHandler {
    pub fn new(reader: Arc<dyn ResponseReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetCampaignCultureQuery,
    ) -> Result<GetCampaignCultureResult, AnalyticsError> {
        let responses = self
            .reader
            .fetch_responses(query.campaign_id, Some(ModuleCode::M1Ocai))
            .await?;

        let report = CampaignCultureAnalyzer::analyze(&responses);
        debug!(
            campaign_id = %query.campaign_id,
            respondents = report.respondent_count,
            "Built campaign culture report"
        );
        Ok(report)
    }
}
