//! Scoring Engine - Culture profiles and Likert dimension scores.

use std::collections::{BTreeMap, HashMap};

use super::{CultureProfile, DimensionScore};
use crate::domain::survey::{Distribution, ScoredLikertItem};

/// Turns raw answers into per-dimension aggregates.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Mean points per culture type over every distribution passed in,
    /// rounded to one decimal.
    ///
    /// The caller decides what the slice represents: all questions of one
    /// respondent, or one question across respondents.
    ///
    /// # Edge Cases
    /// - Empty input: all four types are 0
    pub fn calculate_culture_profile(distributions: &[Distribution]) -> CultureProfile {
        Self::mean_distribution(distributions).rounded()
    }

    /// Unrounded mean distribution, dividing by `max(1, n)`.
    pub(crate) fn mean_distribution(distributions: &[Distribution]) -> CultureProfile {
        let n = distributions.len().max(1) as f64;
        CultureProfile::from_fn(|ct| {
            distributions.iter().map(|d| d.points_for(ct)).sum::<f64>() / n
        })
    }

    /// Groups Likert items by dimension and scores each group.
    ///
    /// Reverse-scored items are inverted (`scale_max + 1 - value`) before
    /// any statistic is taken.
    ///
    /// # Edge Cases
    /// - A dimension with no items is absent from the map, never zero
    pub fn calculate_likert_dimension_scores(
        items: &[ScoredLikertItem],
    ) -> BTreeMap<String, DimensionScore> {
        let mut grouped: HashMap<&str, Vec<f64>> = HashMap::new();
        for item in items {
            grouped
                .entry(item.dimension.as_str())
                .or_default()
                .push(item.scored_value());
        }

        grouped
            .into_iter()
            .filter_map(|(dimension, values)| {
                DimensionScore::from_values(&values).map(|score| (dimension.to_string(), score))
            })
            .collect()
    }
}
