//! Cohort Aggregator - Department and stakeholder comparisons with anonymity.
//!
//! Cohorts smaller than the configured minimum group size are dropped
//! before results leave this module. Callers only ever see how many
//! cohorts were suppressed, never which ones.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{round2, ModuleCode, ParticipantId};
use crate::domain::survey::SurveyResponse;

use super::dimension_score::mean;

/// Minimum distinct participants a cohort needs before it is reported.
pub const MIN_GROUP_SIZE: usize = 5;

/// Attribute responses are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortKey {
    Department,
    StakeholderGroup,
}

impl CohortKey {
    fn name_of(self, response: &SurveyResponse) -> Option<String> {
        match self {
            CohortKey::Department => response
                .department
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            CohortKey::StakeholderGroup => response.stakeholder_group.map(|g| g.as_str().to_owned()),
        }
    }
}

/// Aggregate for one reportable cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub name: String,
    pub participant_count: usize,
    /// Mean of reverse-scored Likert values, two decimals.
    pub mean: f64,
    pub answer_count: usize,
}

/// Result of a cohort comparison after the anonymity rule is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortComparison {
    pub cohorts: Vec<CohortSummary>,
    pub excluded_cohorts: usize,
    pub total_participants: usize,
    pub min_group_size: usize,
}

#[derive(Default)]
struct CohortAccumulator<'a> {
    participants: HashSet<&'a ParticipantId>,
    values: Vec<f64>,
}

/// Groups survey responses into cohorts and enforces the anonymity threshold.
#[derive(Debug, Clone, Copy)]
pub struct CohortAggregator {
    min_group_size: usize,
}

impl Default for CohortAggregator {
    fn default() -> Self {
        Self::new(MIN_GROUP_SIZE)
    }
}

impl CohortAggregator {
    /// Creates an aggregator; a threshold of zero is raised to one.
    pub fn new(min_group_size: usize) -> Self {
        Self {
            min_group_size: min_group_size.max(1),
        }
    }

    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Compares cohorts formed by `key`, optionally restricted to `module`.
    ///
    /// Cohorts are ordered by mean descending, then by name ascending.
    pub fn aggregate(
        &self,
        responses: &[SurveyResponse],
        key: CohortKey,
        module: Option<ModuleCode>,
    ) -> CohortComparison {
        let mut participants: HashSet<&ParticipantId> = HashSet::new();
        let mut groups: BTreeMap<String, CohortAccumulator<'_>> = BTreeMap::new();

        for response in responses.iter().filter(|r| r.participates_in(module)) {
            participants.insert(&response.participant_id);

            let Some(name) = key.name_of(response) else {
                continue;
            };
            let group = groups.entry(name).or_default();
            group.participants.insert(&response.participant_id);
            group
                .values
                .extend(response.answers_for(module).filter_map(|a| a.likert_value()));
        }

        let total_groups = groups.len();
        let mut cohorts: Vec<CohortSummary> = groups
            .into_iter()
            .filter(|(_, g)| g.participants.len() >= self.min_group_size)
            .map(|(name, g)| CohortSummary {
                name,
                participant_count: g.participants.len(),
                mean: mean(&g.values).map(round2).unwrap_or(0.0),
                answer_count: g.values.len(),
            })
            .collect();

        cohorts.sort_by(|a, b| b.mean.total_cmp(&a.mean).then_with(|| a.name.cmp(&b.name)));

        CohortComparison {
            excluded_cohorts: total_groups - cohorts.len(),
            cohorts,
            total_participants: participants.len(),
            min_group_size: self.min_group_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CulturePerspective, ResponseId, StakeholderGroup};
    use crate::domain::survey::{Distribution, RecordedAnswer};
    use proptest::prelude::*;

    fn likert(module: ModuleCode, value: f64) -> RecordedAnswer {
        RecordedAnswer::Likert {
            module,
            dimension: "Adanmışlık".to_string(),
            value,
            reverse_scored: false,
            scale_max: 7,
        }
    }

    fn response(participant: &str, department: Option<&str>, answers: Vec<RecordedAnswer>) -> SurveyResponse {
        SurveyResponse {
            response_id: ResponseId::new(),
            participant_id: ParticipantId::new(participant).unwrap(),
            department: department.map(str::to_string),
            stakeholder_group: None,
            rater_perspective: None,
            answers,
        }
    }

    fn department(name: &str, size: usize, value: f64) -> Vec<SurveyResponse> {
        (0..size)
            .map(|i| {
                response(
                    &format!("{name}-{i}"),
                    Some(name),
                    vec![likert(ModuleCode::M4Uwes, value)],
                )
            })
            .collect()
    }

    #[test]
    fn cohort_below_threshold_is_excluded() {
        let responses = department("Hukuk", 4, 5.0);
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert!(result.cohorts.is_empty());
        assert_eq!(result.excluded_cohorts, 1);
        assert_eq!(result.total_participants, 4);
        assert_eq!(result.min_group_size, 5);
    }

    #[test]
    fn cohort_at_threshold_is_reported() {
        let responses = department("Tıp", 5, 4.0);
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert_eq!(result.cohorts.len(), 1);
        assert_eq!(result.cohorts[0].name, "Tıp");
        assert_eq!(result.cohorts[0].participant_count, 5);
        assert_eq!(result.cohorts[0].mean, 4.0);
        assert_eq!(result.cohorts[0].answer_count, 5);
        assert_eq!(result.excluded_cohorts, 0);
    }

    #[test]
    fn suppressed_names_never_appear() {
        let mut responses = department("Mühendislik", 6, 5.0);
        responses.extend(department("Güzel Sanatlar", 3, 2.0));
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert_eq!(result.excluded_cohorts, 1);
        assert_eq!(result.total_participants, 9);
        assert!(result.cohorts.iter().all(|c| c.name != "Güzel Sanatlar"));
    }

    #[test]
    fn cohorts_sorted_by_mean_then_name() {
        let mut responses = department("Zooloji", 5, 4.0);
        responses.extend(department("Anatomi", 5, 4.0));
        responses.extend(department("Fizik", 5, 6.0));
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        let names: Vec<_> = result.cohorts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fizik", "Anatomi", "Zooloji"]);
    }

    #[test]
    fn module_filter_drops_non_participating_responses() {
        let mut responses = department("Kimya", 5, 3.0);
        responses.push(response(
            "outsider",
            Some("Kimya"),
            vec![likert(ModuleCode::M5Pke, 1.0)],
        ));
        let result = CohortAggregator::default().aggregate(
            &responses,
            CohortKey::Department,
            Some(ModuleCode::M4Uwes),
        );

        assert_eq!(result.total_participants, 5);
        assert_eq!(result.cohorts[0].participant_count, 5);
        assert_eq!(result.cohorts[0].mean, 3.0);
    }

    #[test]
    fn responses_without_department_count_but_form_no_cohort() {
        let mut responses = department("Hukuk", 5, 3.0);
        responses.push(response("anon", None, vec![likert(ModuleCode::M4Uwes, 7.0)]));
        responses.push(response("blank", Some("  "), vec![likert(ModuleCode::M4Uwes, 7.0)]));
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert_eq!(result.total_participants, 7);
        assert_eq!(result.cohorts.len(), 1);
        assert_eq!(result.excluded_cohorts, 0);
    }

    #[test]
    fn repeated_participant_counts_once() {
        let responses: Vec<_> = (0..5)
            .map(|_| response("same", Some("Hukuk"), vec![likert(ModuleCode::M4Uwes, 3.0)]))
            .collect();
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert_eq!(result.total_participants, 1);
        assert!(result.cohorts.is_empty());
        assert_eq!(result.excluded_cohorts, 1);
    }

    #[test]
    fn ipsative_answers_do_not_enter_mean() {
        let responses: Vec<_> = (0..5)
            .map(|i| {
                response(
                    &format!("p{i}"),
                    Some("Hukuk"),
                    vec![
                        RecordedAnswer::Ipsative {
                            module: ModuleCode::M1Ocai,
                            dimension: "Baskın Özellikler".to_string(),
                            perspective: CulturePerspective::Current,
                            distribution: Distribution::new(25.0, 25.0, 25.0, 25.0),
                        },
                        likert(ModuleCode::M4Uwes, 2.0),
                    ],
                )
            })
            .collect();
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);

        assert_eq!(result.cohorts[0].mean, 2.0);
        assert_eq!(result.cohorts[0].answer_count, 5);
    }

    #[test]
    fn reverse_scored_values_enter_mean() {
        let responses: Vec<_> = (0..5)
            .map(|i| {
                response(
                    &format!("p{i}"),
                    Some("Hukuk"),
                    vec![RecordedAnswer::Likert {
                        module: ModuleCode::M5Pke,
                        dimension: "Tükenmişlik".to_string(),
                        value: 2.0,
                        reverse_scored: true,
                        scale_max: 5,
                    }],
                )
            })
            .collect();
        let result = CohortAggregator::default().aggregate(&responses, CohortKey::Department, None);
        assert_eq!(result.cohorts[0].mean, 4.0);
    }

    #[test]
    fn groups_by_stakeholder() {
        let responses: Vec<_> = (0..5)
            .map(|i| {
                let mut r = response(&format!("s{i}"), None, vec![likert(ModuleCode::M6Spu, 4.0)]);
                r.stakeholder_group = Some(StakeholderGroup::Student);
                r
            })
            .collect();
        let result =
            CohortAggregator::default().aggregate(&responses, CohortKey::StakeholderGroup, None);

        assert_eq!(result.cohorts.len(), 1);
        assert_eq!(result.cohorts[0].name, "student");
    }

    #[test]
    fn zero_threshold_is_raised_to_one() {
        let aggregator = CohortAggregator::new(0);
        assert_eq!(aggregator.min_group_size(), 1);

        let responses = department("Hukuk", 1, 3.0);
        let result = aggregator.aggregate(&responses, CohortKey::Department, None);
        assert_eq!(result.cohorts.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_comparison() {
        let result = CohortAggregator::default().aggregate(&[], CohortKey::Department, None);
        assert!(result.cohorts.is_empty());
        assert_eq!(result.excluded_cohorts, 0);
        assert_eq!(result.total_participants, 0);
    }

    proptest! {
        #[test]
        fn every_reported_cohort_meets_threshold(
            sizes in prop::collection::vec(0usize..10, 1..6),
            threshold in 1usize..8,
        ) {
            let mut responses = Vec::new();
            for (idx, size) in sizes.iter().enumerate() {
                responses.extend(department(&format!("Birim {idx}"), *size, 3.0));
            }
            let result = CohortAggregator::new(threshold)
                .aggregate(&responses, CohortKey::Department, None);

            prop_assert!(result.cohorts.iter().all(|c| c.participant_count >= threshold));
            let formed = sizes.iter().filter(|s| **s > 0).count();
            prop_assert_eq!(result.cohorts.len() + result.excluded_cohorts, formed);
        }
    }
}
