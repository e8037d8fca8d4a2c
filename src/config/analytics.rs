//! Analytics policy configuration
//!
//! Thresholds that govern what the analytics endpoints may reveal.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    CohortAggregator, GapSeverityBands, LeadershipReviewAnalyzer, DEFAULT_BLIND_SPOT_THRESHOLD,
    DEFAULT_MIN_OTHER_RATERS, DEFAULT_TOP_N, MIN_GROUP_SIZE,
};

/// Analytics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Smallest cohort that may be reported
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,

    /// Self vs. others gap that counts as a 360° blind spot
    #[serde(default = "default_blind_spot_threshold")]
    pub blind_spot_threshold: f64,

    /// Number of strengths and development areas listed
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Non-self raters required before a 360° review is shown
    #[serde(default = "default_min_other_raters")]
    pub min_other_raters: usize,

    /// Gaps below this are `low`
    pub gap_severity_low_below: Option<f64>,

    /// Gaps at or above this are `high`
    pub gap_severity_high_from: Option<f64>,
}

impl AnalyticsConfig {
    /// Severity bands, or `None` when the deployment does not classify gaps.
    pub fn severity_bands(&self) -> Result<Option<GapSeverityBands>, ValidationError> {
        match (self.gap_severity_low_below, self.gap_severity_high_from) {
            (None, None) => Ok(None),
            (Some(low), Some(high)) => GapSeverityBands::new(low, high)
                .map(Some)
                .map_err(|_| ValidationError::InvalidSeverityBands),
            _ => Err(ValidationError::InvalidSeverityBands),
        }
    }

    pub fn cohort_aggregator(&self) -> CohortAggregator {
        CohortAggregator::new(self.min_group_size)
    }

    pub fn leadership_analyzer(&self) -> LeadershipReviewAnalyzer {
        LeadershipReviewAnalyzer::new(self.blind_spot_threshold, self.top_n, self.min_other_raters)
    }

    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_group_size == 0 {
            return Err(ValidationError::InvalidMinGroupSize);
        }
        if !self.blind_spot_threshold.is_finite() || self.blind_spot_threshold < 0.0 {
            return Err(ValidationError::InvalidBlindSpotThreshold);
        }
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        self.severity_bands()?;
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            min_group_size: default_min_group_size(),
            blind_spot_threshold: default_blind_spot_threshold(),
            top_n: default_top_n(),
            min_other_raters: default_min_other_raters(),
            gap_severity_low_below: None,
            gap_severity_high_from: None,
        }
    }
}

fn default_min_group_size() -> usize {
    MIN_GROUP_SIZE
}

fn default_blind_spot_threshold() -> f64 {
    DEFAULT_BLIND_SPOT_THRESHOLD
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_min_other_raters() -> usize {
    DEFAULT_MIN_OTHER_RATERS
}
