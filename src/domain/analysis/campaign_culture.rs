//! Campaign-wide OCAI culture report.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{CultureProfile, GapAnalyzer, GapResult, ScoringEngine};
use crate::domain::foundation::{CulturePerspective, CultureType, ModuleCode};
use crate::domain::survey::{Distribution, RecordedAnswer, SurveyResponse};

/// Aggregated OCAI picture of one campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCultureReport {
    /// Responses holding at least one OCAI answer.
    pub respondent_count: usize,
    pub current: CultureProfile,
    pub preferred: CultureProfile,
    pub dominant_current: CultureType,
    pub dominant_preferred: CultureType,
    pub gaps: Vec<GapResult>,
    /// Mean current distribution per OCAI dimension, one decimal.
    pub dimension_detail: BTreeMap<String, CultureProfile>,
}

/// Builds [`CampaignCultureReport`]s from stored responses.
pub struct CampaignCultureAnalyzer;

impl CampaignCultureAnalyzer {
    /// Averages each respondent's distributions per perspective, then
    /// averages those respondent profiles across the campaign.
    ///
    /// A respondent who never answered a perspective does not pull that
    /// perspective's mean towards zero.
    pub fn analyze(responses: &[SurveyResponse]) -> CampaignCultureReport {
        let mut respondent_count = 0;
        let mut current_profiles = Vec::new();
        let mut preferred_profiles = Vec::new();
        let mut by_dimension: BTreeMap<String, Vec<Distribution>> = BTreeMap::new();

        for response in responses {
            let mut current = Vec::new();
            let mut preferred = Vec::new();

            for answer in response.answers_for(Some(ModuleCode::M1Ocai)) {
                let RecordedAnswer::Ipsative {
                    dimension,
                    perspective,
                    distribution,
                    ..
                } = answer
                else {
                    continue;
                };
                match perspective {
                    CulturePerspective::Current => {
                        current.push(*distribution);
                        by_dimension
                            .entry(dimension.clone())
                            .or_default()
                            .push(*distribution);
                    }
                    CulturePerspective::Preferred => preferred.push(*distribution),
                }
            }

            if current.is_empty() && preferred.is_empty() {
                continue;
            }
            respondent_count += 1;
            if !current.is_empty() {
                current_profiles.push(ScoringEngine::mean_distribution(&current));
            }
            if !preferred.is_empty() {
                preferred_profiles.push(ScoringEngine::mean_distribution(&preferred));
            }
        }

        let current = CultureProfile::mean_of(&current_profiles).rounded();
        let preferred = CultureProfile::mean_of(&preferred_profiles).rounded();

        let dimension_detail = by_dimension
            .into_iter()
            .map(|(dimension, distributions)| {
                (dimension, ScoringEngine::calculate_culture_profile(&distributions))
            })
            .collect();

        CampaignCultureReport {
            respondent_count,
            dominant_current: current.dominant(),
            dominant_preferred: preferred.dominant(),
            gaps: GapAnalyzer::calculate_gap(&current, &preferred),
            current,
            preferred,
            dimension_detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, ResponseId};

    fn ocai(dimension: &str, perspective: CulturePerspective, d: [f64; 4]) -> RecordedAnswer {
        RecordedAnswer::Ipsative {
            module: ModuleCode::M1Ocai,
            dimension: dimension.to_string(),
            perspective,
            distribution: Distribution::new(d[0], d[1], d[2], d[3]),
        }
    }

    fn response(participant: &str, answers: Vec<RecordedAnswer>) -> SurveyResponse {
        SurveyResponse {
            response_id: ResponseId::new(),
            participant_id: ParticipantId::new(participant).unwrap(),
            department: None,
            stakeholder_group: None,
            rater_perspective: None,
            answers,
        }
    }

    #[test]
    fn averages_per_respondent_before_campaign() {
        // Respondent one answers two dimensions, respondent two answers one.
        let responses = vec![
            response(
                "p1",
                vec![
                    ocai("dominant", CulturePerspective::Current, [40.0, 20.0, 20.0, 20.0]),
                    ocai("leadership", CulturePerspective::Current, [20.0, 20.0, 20.0, 40.0]),
                    ocai("dominant", CulturePerspective::Preferred, [50.0, 20.0, 10.0, 20.0]),
                ],
            ),
            response(
                "p2",
                vec![
                    ocai("dominant", CulturePerspective::Current, [10.0, 30.0, 30.0, 30.0]),
                    ocai("dominant", CulturePerspective::Preferred, [30.0, 30.0, 20.0, 20.0]),
                ],
            ),
        ];

        let report = CampaignCultureAnalyzer::analyze(&responses);

        assert_eq!(report.respondent_count, 2);
        // p1 current = (30, 20, 20, 30), p2 = (10, 30, 30, 30)
        assert_eq!(report.current, CultureProfile::new(20.0, 25.0, 25.0, 30.0));
        assert_eq!(report.preferred, CultureProfile::new(40.0, 25.0, 15.0, 20.0));
        assert_eq!(report.dominant_current, CultureType::Hierarchy);
        assert_eq!(report.dominant_preferred, CultureType::Clan);
        assert_eq!(report.gaps[0].culture_type, CultureType::Clan);
        assert_eq!(report.gaps[0].gap, 20.0);
    }

    #[test]
    fn respondents_missing_a_perspective_are_skipped_for_it() {
        let responses = vec![
            response("p1", vec![ocai("dominant", CulturePerspective::Current, [40.0, 20.0, 20.0, 20.0])]),
            response(
                "p2",
                vec![
                    ocai("dominant", CulturePerspective::Current, [20.0, 40.0, 20.0, 20.0]),
                    ocai("dominant", CulturePerspective::Preferred, [25.0, 25.0, 25.0, 25.0]),
                ],
            ),
        ];

        let report = CampaignCultureAnalyzer::analyze(&responses);

        assert_eq!(report.respondent_count, 2);
        assert_eq!(report.preferred, CultureProfile::new(25.0, 25.0, 25.0, 25.0));
        assert!(report.preferred.is_complete_distribution());
    }

    #[test]
    fn dimension_detail_uses_current_answers_only() {
        let responses = vec![
            response(
                "p1",
                vec![
                    ocai("dominant", CulturePerspective::Current, [40.0, 20.0, 20.0, 20.0]),
                    ocai("dominant", CulturePerspective::Preferred, [100.0, 0.0, 0.0, 0.0]),
                ],
            ),
            response("p2", vec![ocai("dominant", CulturePerspective::Current, [20.0, 20.0, 20.0, 40.0])]),
        ];

        let report = CampaignCultureAnalyzer::analyze(&responses);

        assert_eq!(report.dimension_detail.len(), 1);
        assert_eq!(
            report.dimension_detail["dominant"],
            CultureProfile::new(30.0, 20.0, 20.0, 30.0)
        );
    }

    #[test]
    fn non_ocai_answers_are_ignored() {
        let responses = vec![response(
            "p1",
            vec![RecordedAnswer::Likert {
                module: ModuleCode::M4Uwes,
                dimension: "Dinçlik".to_string(),
                value: 5.0,
                reverse_scored: false,
                scale_max: 7,
            }],
        )];

        let report = CampaignCultureAnalyzer::analyze(&responses);

        assert_eq!(report.respondent_count, 0);
        assert_eq!(report.current, CultureProfile::default());
        assert!(report.dimension_detail.is_empty());
        assert!(report.gaps.iter().all(|g| g.gap == 0.0));
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = CampaignCultureAnalyzer::analyze(&[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["respondentCount"], 0);
        assert_eq!(json["dominantCurrent"], "clan");
        assert!(json["dimensionDetail"].is_object());
    }
}
