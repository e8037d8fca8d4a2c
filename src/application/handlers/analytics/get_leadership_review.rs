//! GetLeadershipReviewHandler - Query handler for the 360° leadership review.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::analysis::{LeadershipReview, LeadershipReviewAnalyzer, ReviewError};
use crate::domain::foundation::{CampaignId, ModuleCode};
use crate::ports::{AnalyticsError, ResponseReader};

#[derive(Debug, Clone)]
pub struct GetLeadershipReviewQuery {
    pub campaign_id: CampaignId,
}

pub type GetLeadershipReviewResult = LeadershipReview;

/// Errors from loading or analyzing a 360° review.
#[derive(Debug, Error)]
pub enum LeadershipReviewError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}

pub struct GetLeadershipReviewHandler {
    reader: Arc<dyn ResponseReader>,
    analyzer: LeadershipReviewAnalyzer,
}

impl GetLeadershipReviewHandler {
    pub fn new(reader: Arc<dyn ResponseReader>, analyzer: LeadershipReviewAnalyzer) -> Self {
        Self { reader, analyzer }
    }

    pub async fn handle(
        &self,
        query: GetLeadershipReviewQuery,
    ) -> Result<GetLeadershipReviewResult, LeadershipReviewError> {
        let responses = self
            .reader
            .fetch_responses(query.campaign_id, Some(ModuleCode::M3Msai))
            .await?;

        let review = self.analyzer.analyze(&responses).map_err(|e| {
            warn!(campaign_id = %query.campaign_id, error = %e, "Leadership review withheld");
            e
        })?;

        debug!(
            campaign_id = %query.campaign_id,
            blind_spots = review.blind_spots.len(),
            "Built leadership review"
        );
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, RaterPerspective, ResponseId};
    use crate::domain::survey::{RecordedAnswer, SurveyResponse};
    use async_trait::async_trait;

    struct MockResponseReader {
        responses: Vec<SurveyResponse>,
    }

    #[async_trait]
    impl ResponseReader for MockResponseReader {
        async fn fetch_responses(
            &self,
            _campaign_id: CampaignId,
            _module: Option<ModuleCode>,
        ) -> Result<Vec<SurveyResponse>, AnalyticsError> {
            Ok(self.responses.clone())
        }
    }

    fn rater(id: &str, perspective: RaterPerspective, value: f64) -> SurveyResponse {
        SurveyResponse {
            response_id: ResponseId::new(),
            participant_id: ParticipantId::new(id).unwrap(),
            department: None,
            stakeholder_group: None,
            rater_perspective: Some(perspective),
            answers: vec![RecordedAnswer::Likert {
                module: ModuleCode::M3Msai,
                dimension: "vision".to_string(),
                value,
                reverse_scored: false,
                scale_max: 5,
            }],
        }
    }

    #[tokio::test]
    async fn test_review_reports_blind_spot() {
        let reader = Arc::new(MockResponseReader {
            responses: vec![
                rater("self", RaterPerspective::SelfAssessment, 5.0),
                rater("a", RaterPerspective::Peer, 3.0),
                rater("b", RaterPerspective::Peer, 3.0),
                rater("c", RaterPerspective::Superior, 3.0),
            ],
        });
        let handler = GetLeadershipReviewHandler::new(reader, LeadershipReviewAnalyzer::default());

        let review = handler
            .handle(GetLeadershipReviewQuery {
                campaign_id: CampaignId::new(),
            })
            .await
            .unwrap();

        assert_eq!(review.blind_spots.len(), 1);
        assert_eq!(review.blind_spots[0].gap, 2.0);
    }

    #[tokio::test]
    async fn test_review_refused_with_too_few_raters() {
        let reader = Arc::new(MockResponseReader {
            responses: vec![rater("self", RaterPerspective::SelfAssessment, 5.0)],
        });
        let handler = GetLeadershipReviewHandler::new(reader, LeadershipReviewAnalyzer::default());

        let result = handler
            .handle(GetLeadershipReviewQuery {
                campaign_id: CampaignId::new(),
            })
            .await;

        assert!(matches!(
            result,
            Err(LeadershipReviewError::Review(ReviewError::InsufficientRaters { actual: 0, .. }))
        ));
    }
}
