//! In-memory survey store implementing the read ports.
//!
//! Holds campaigns and organizations in process memory. Lock poisoning is
//! recovered from, since every write replaces whole entries.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{CampaignId, ModuleCode, OrganizationId};
use crate::domain::survey::{PackageTier, SurveyResponse};
use crate::ports::{AnalyticsError, ResponseReader, TenantReader};

/// Campaign responses and organization tiers kept in memory.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemorySurveyStore::new());
/// let campaign = CampaignId::new();
/// store.add_response(campaign, response);
///
/// let responses = store.fetch_responses(campaign, None).await?;
/// ```
#[derive(Default)]
pub struct InMemorySurveyStore {
    campaigns: RwLock<HashMap<CampaignId, Vec<SurveyResponse>>>,
    organizations: RwLock<HashMap<OrganizationId, PackageTier>>,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a campaign with no responses yet.
    pub fn create_campaign(&self, campaign_id: CampaignId) {
        self.campaigns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(campaign_id)
            .or_default();
    }

    /// Appends a completed response, creating the campaign if needed.
    pub fn add_response(&self, campaign_id: CampaignId, response: SurveyResponse) {
        self.campaigns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(campaign_id)
            .or_default()
            .push(response);
    }

    pub fn set_package_tier(&self, organization_id: OrganizationId, tier: PackageTier) {
        self.organizations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(organization_id, tier);
    }

    pub fn response_count(&self, campaign_id: CampaignId) -> usize {
        self.campaigns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&campaign_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl ResponseReader for InMemorySurveyStore {
    async fn fetch_responses(
        &self,
        campaign_id: CampaignId,
        module: Option<ModuleCode>,
    ) -> Result<Vec<SurveyResponse>, AnalyticsError> {
        let campaigns = self.campaigns.read().unwrap_or_else(PoisonError::into_inner);
        let responses = campaigns
            .get(&campaign_id)
            .ok_or(AnalyticsError::CampaignNotFound(campaign_id))?;

        Ok(responses
            .iter()
            .filter(|r| r.participates_in(module))
            .map(|r| SurveyResponse {
                answers: r.answers_for(module).cloned().collect(),
                ..r.clone()
            })
            .collect())
    }
}

#[async_trait]
impl TenantReader for InMemorySurveyStore {
    async fn package_tier(
        &self,
        organization_id: OrganizationId,
    ) -> Result<PackageTier, AnalyticsError> {
        self.organizations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&organization_id)
            .copied()
            .ok_or(AnalyticsError::OrganizationNotFound(organization_id))
    }
}
