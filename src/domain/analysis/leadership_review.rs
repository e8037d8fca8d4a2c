//! Leadership Review - 360° comparison of self and other ratings.
//!
//! Ratings are grouped by rater perspective and subdimension. Blind spots
//! are subdimensions where the self rating differs from what everyone else
//! sees; strengths and development areas rank subdimensions by the other
//! perspectives only.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use super::dimension_score::mean;
use crate::domain::foundation::{round2, ModuleCode, RaterPerspective};
use crate::domain::survey::SurveyResponse;

pub const DEFAULT_BLIND_SPOT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TOP_N: usize = 5;
/// Non-self raters needed before a review can be shown to anyone.
pub const DEFAULT_MIN_OTHER_RATERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("at least {required} non-self raters are required, found {actual}")]
    InsufficientRaters { required: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdimensionScore {
    pub subdimension: String,
    pub mean: f64,
    pub count: usize,
}

/// All ratings given from one perspective.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveReport {
    pub subdimensions: Vec<SubdimensionScore>,
    pub overall_mean: f64,
    pub rater_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindSpot {
    pub subdimension: String,
    pub self_score: f64,
    pub others_score: f64,
    /// `self_score - others_score`; positive means the leader overrates.
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSubdimension {
    pub subdimension: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipReview {
    pub perspectives: BTreeMap<RaterPerspective, PerspectiveReport>,
    pub blind_spots: Vec<BlindSpot>,
    pub strengths: Vec<RankedSubdimension>,
    pub development_areas: Vec<RankedSubdimension>,
    pub other_rater_count: usize,
}

#[derive(Default)]
struct PerspectiveRatings<'a> {
    raters: HashSet<&'a str>,
    values: BTreeMap<String, Vec<f64>>,
}

/// Builds a [`LeadershipReview`] from M3 responses.
#[derive(Debug, Clone, Copy)]
pub struct LeadershipReviewAnalyzer {
    blind_spot_threshold: f64,
    top_n: usize,
    min_other_raters: usize,
}

impl Default for LeadershipReviewAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_BLIND_SPOT_THRESHOLD, DEFAULT_TOP_N, DEFAULT_MIN_OTHER_RATERS)
    }
}

impl LeadershipReviewAnalyzer {
    pub fn new(blind_spot_threshold: f64, top_n: usize, min_other_raters: usize) -> Self {
        Self {
            blind_spot_threshold,
            top_n,
            min_other_raters,
        }
    }

    /// Analyzes every response carrying a rater perspective and M3 answers.
    pub fn analyze(&self, responses: &[SurveyResponse]) -> Result<LeadershipReview, ReviewError> {
        let mut ratings: BTreeMap<RaterPerspective, PerspectiveRatings<'_>> = BTreeMap::new();
        // One participant may rate from several perspectives; count them once.
        let mut other_raters: HashSet<&str> = HashSet::new();

        for response in responses {
            let Some(perspective) = response.rater_perspective else {
                continue;
            };
            let mut answers = response.answers_for(Some(ModuleCode::M3Msai)).peekable();
            if answers.peek().is_none() {
                continue;
            }

            let entry = ratings.entry(perspective).or_default();
            entry.raters.insert(response.participant_id.as_str());
            if !perspective.is_self() {
                other_raters.insert(response.participant_id.as_str());
            }
            for answer in answers {
                if let Some(value) = answer.likert_value() {
                    entry
                        .values
                        .entry(answer.dimension().to_owned())
                        .or_default()
                        .push(value);
                }
            }
        }

        let other_rater_count = other_raters.len();
        if other_rater_count < self.min_other_raters {
            return Err(ReviewError::InsufficientRaters {
                required: self.min_other_raters,
                actual: other_rater_count,
            });
        }

        let perspectives: BTreeMap<RaterPerspective, PerspectiveReport> = ratings
            .into_iter()
            .map(|(perspective, r)| (perspective, Self::perspective_report(r)))
            .collect();

        let others = Self::other_means(&perspectives);
        let blind_spots = self.blind_spots(&perspectives, &others);
        let (strengths, development_areas) = self.rank(&others);

        Ok(LeadershipReview {
            perspectives,
            blind_spots,
            strengths,
            development_areas,
            other_rater_count,
        })
    }

    fn perspective_report(ratings: PerspectiveRatings<'_>) -> PerspectiveReport {
        let all: Vec<f64> = ratings.values.values().flatten().copied().collect();
        let subdimensions = ratings
            .values
            .into_iter()
            .map(|(subdimension, values)| SubdimensionScore {
                subdimension,
                mean: mean(&values).map(round2).unwrap_or(0.0),
                count: values.len(),
            })
            .collect();

        PerspectiveReport {
            subdimensions,
            overall_mean: mean(&all).map(round2).unwrap_or(0.0),
            rater_count: ratings.raters.len(),
        }
    }

    /// Per subdimension, the rounded means given by each non-self perspective.
    fn other_means(
        perspectives: &BTreeMap<RaterPerspective, PerspectiveReport>,
    ) -> BTreeMap<&str, Vec<f64>> {
        let mut others: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for (_, report) in perspectives.iter().filter(|(p, _)| !p.is_self()) {
            for sub in &report.subdimensions {
                others.entry(sub.subdimension.as_str()).or_default().push(sub.mean);
            }
        }
        others
    }

    fn blind_spots(
        &self,
        perspectives: &BTreeMap<RaterPerspective, PerspectiveReport>,
        others: &BTreeMap<&str, Vec<f64>>,
    ) -> Vec<BlindSpot> {
        let Some(own) = perspectives.get(&RaterPerspective::SelfAssessment) else {
            return Vec::new();
        };

        let mut spots: Vec<BlindSpot> = own
            .subdimensions
            .iter()
            .filter_map(|sub| {
                let others_mean = mean(others.get(sub.subdimension.as_str())?)?;
                let gap = round2(sub.mean - others_mean);
                (gap.abs() >= self.blind_spot_threshold).then(|| BlindSpot {
                    subdimension: sub.subdimension.clone(),
                    self_score: sub.mean,
                    others_score: round2(others_mean),
                    gap,
                })
            })
            .collect();

        spots.sort_by(|a, b| b.gap.abs().total_cmp(&a.gap.abs()));
        spots
    }

    fn rank(
        &self,
        others: &BTreeMap<&str, Vec<f64>>,
    ) -> (Vec<RankedSubdimension>, Vec<RankedSubdimension>) {
        let mut ranked: Vec<RankedSubdimension> = others
            .iter()
            .filter_map(|(subdimension, means)| {
                Some(RankedSubdimension {
                    subdimension: (*subdimension).to_owned(),
                    mean: round2(mean(means)?),
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.mean
                .total_cmp(&a.mean)
                .then_with(|| a.subdimension.cmp(&b.subdimension))
        });
        let strengths = ranked.iter().take(self.top_n).cloned().collect();

        ranked.sort_by(|a, b| {
            a.mean
                .total_cmp(&b.mean)
                .then_with(|| a.subdimension.cmp(&b.subdimension))
        });
        ranked.truncate(self.top_n);

        (strengths, ranked)
    }
}
