//! CompareCohortsHandler - Query handler for department and stakeholder comparisons.
//!
//! Loads a campaign's responses and hands them to the cohort aggregator,
//! which applies the anonymity threshold before anything is returned.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::{CohortAggregator, CohortComparison, CohortKey};
use crate::domain::foundation::{CampaignId, ModuleCode};
use crate::ports::{AnalyticsError, ResponseReader};

/// Query to compare cohorts of one campaign.
#[derive(Debug, Clone)]
pub struct CompareCohortsQuery {
    pub campaign_id: CampaignId,
    pub key: CohortKey,
    /// Restrict the comparison to one survey module.
    pub module: Option<ModuleCode>,
}

pub type CompareCohortsResult = CohortComparison;

pub struct CompareCohortsHandler {
    reader: Arc<dyn ResponseReader>,
    aggregator: CohortAggregator,
}

impl CompareCohortsHandler {
    pub fn new(reader: Arc<dyn ResponseReader>, aggregator: CohortAggregator) -> Self {
        Self { reader, aggregator }
    }

    pub async fn handle(
        &self,
        query: CompareCohortsQuery,
    ) -> Result<CompareCohortsResult, AnalyticsError> {
        let responses = self
            .reader
            .fetch_responses(query.campaign_id, query.module)
            .await?;

        let comparison = self.aggregator.aggregate(&responses, query.key, query.module);
        debug!(
            campaign_id = %query.campaign_id,
            key = ?query.key,
            reported = comparison.cohorts.len(),
            excluded = comparison.excluded_cohorts,
            "Compared cohorts"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, ResponseId};
    use crate::domain::survey::{RecordedAnswer, SurveyResponse};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockResponseReader {
        responses: Vec<SurveyResponse>,
        should_fail: bool,
    }

    impl MockResponseReader {
        fn with_responses(responses: Vec<SurveyResponse>) -> Self {
            Self {
                responses,
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                responses: Vec::new(),
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl ResponseReader for MockResponseReader {
        async fn fetch_responses(
            &self,
            campaign_id: CampaignId,
            _module: Option<ModuleCode>,
        ) -> Result<Vec<SurveyResponse>, AnalyticsError> {
            if self.should_fail {
                return Err(AnalyticsError::CampaignNotFound(campaign_id));
            }
            Ok(self.responses.clone())
        }
    }

    fn department_responses(name: &str, size: usize) -> Vec<SurveyResponse> {
        (0..size)
            .map(|i| SurveyResponse {
                response_id: ResponseId::new(),
                participant_id: ParticipantId::new(format!("{name}-{i}")).unwrap(),
                department: Some(name.to_string()),
                stakeholder_group: None,
                rater_perspective: None,
                answers: vec![RecordedAnswer::Likert {
                    module: ModuleCode::M2Qci,
                    dimension: "Liderlik".to_string(),
                    value: 4.0,
                    reverse_scored: false,
                    scale_max: 5,
                }],
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_compare_cohorts_applies_threshold() {
        let mut responses = department_responses("İktisat", 5);
        responses.extend(department_responses("Hukuk", 2));
        let reader = Arc::new(MockResponseReader::with_responses(responses));
        let handler = CompareCohortsHandler::new(reader, CohortAggregator::default());

        let result = handler
            .handle(CompareCohortsQuery {
                campaign_id: CampaignId::new(),
                key: CohortKey::Department,
                module: None,
            })
            .await
            .unwrap();

        assert_eq!(result.cohorts.len(), 1);
        assert_eq!(result.cohorts[0].name, "İktisat");
        assert_eq!(result.excluded_cohorts, 1);
        assert_eq!(result.total_participants, 7);
    }

    #[tokio::test]
    async fn test_compare_cohorts_uses_configured_threshold() {
        let reader = Arc::new(MockResponseReader::with_responses(department_responses("Hukuk", 2)));
        let handler = CompareCohortsHandler::new(reader, CohortAggregator::new(2));

        let result = handler
            .handle(CompareCohortsQuery {
                campaign_id: CampaignId::new(),
                key: CohortKey::Department,
                module: Some(ModuleCode::M2Qci),
            })
            .await
            .unwrap();

        assert_eq!(result.cohorts.len(), 1);
        assert_eq!(result.min_group_size, 2);
    }

    #[tokio::test]
    async fn test_compare_cohorts_propagates_reader_error() {
        let handler =
            CompareCohortsHandler::new(Arc::new(MockResponseReader::failing()), CohortAggregator::default());

        let result = handler
            .handle(CompareCohortsQuery {
                campaign_id: CampaignId::new(),
                key: CohortKey::StakeholderGroup,
                module: None,
            })
            .await;

        assert!(matches!(result, Err(AnalyticsError::CampaignNotFound(_))));
    }
}
