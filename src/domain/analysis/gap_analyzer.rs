//! Gap Analyzer - Current vs. preferred culture comparison.

use serde::{Deserialize, Serialize};

use super::CultureProfile;
use crate::domain::foundation::{round1, CultureType, ValidationError};

/// Direction a culture type needs to move to reach the preferred state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapDirection {
    Increase,
    Decrease,
    Unchanged,
}

/// Difference between preferred and current score for one culture type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapResult {
    #[serde(rename = "type")]
    pub culture_type: CultureType,
    pub current: f64,
    pub preferred: f64,
    /// `preferred - current`, one decimal.
    pub gap: f64,
    pub abs_gap: f64,
}

impl GapResult {
    pub fn direction(&self) -> GapDirection {
        if self.gap > 0.0 {
            GapDirection::Increase
        } else if self.gap < 0.0 {
            GapDirection::Decrease
        } else {
            GapDirection::Unchanged
        }
    }
}

/// Severity label for a gap magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

/// Cutoffs for [`GapSeverity`], supplied by the deployment.
///
/// `abs_gap < low_below` is low, `< high_from` is medium, anything else high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSeverityBands {
    low_below: f64,
    high_from: f64,
}

impl GapSeverityBands {
    /// Creates bands, requiring `0 <= low_below <= high_from`.
    pub fn new(low_below: f64, high_from: f64) -> Result<Self, ValidationError> {
        if !low_below.is_finite() || low_below < 0.0 {
            return Err(ValidationError::out_of_range(
                "gap_severity_low_below",
                0.0,
                100.0,
                low_below,
            ));
        }
        if !high_from.is_finite() || high_from < low_below {
            return Err(ValidationError::out_of_range(
                "gap_severity_high_from",
                low_below,
                100.0,
                high_from,
            ));
        }
        Ok(Self {
            low_below,
            high_from,
        })
    }

    pub fn low_below(&self) -> f64 {
        self.low_below
    }

    pub fn high_from(&self) -> f64 {
        self.high_from
    }

    pub fn classify(&self, abs_gap: f64) -> GapSeverity {
        if abs_gap < self.low_below {
            GapSeverity::Low
        } else if abs_gap < self.high_from {
            GapSeverity::Medium
        } else {
            GapSeverity::High
        }
    }
}

/// Gap analysis functions.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Computes the gap for each culture type, largest `abs_gap` first.
    ///
    /// Sorting is stable, so equal gaps keep clan, adhocracy, market,
    /// hierarchy order.
    pub fn calculate_gap(current: &CultureProfile, preferred: &CultureProfile) -> Vec<GapResult> {
        let mut gaps: Vec<GapResult> = CultureType::ALL
            .iter()
            .map(|&ct| {
                let gap = round1(preferred.get(ct) - current.get(ct));
                GapResult {
                    culture_type: ct,
                    current: current.get(ct),
                    preferred: preferred.get(ct),
                    gap,
                    abs_gap: gap.abs(),
                }
            })
            .collect();

        gaps.sort_by(|a, b| b.abs_gap.total_cmp(&a.abs_gap));
        gaps
    }

    /// The culture type needing the largest change, if any change is needed.
    pub fn largest_gap(gaps: &[GapResult]) -> Option<&GapResult> {
        gaps.iter()
            .filter(|g| g.abs_gap > 0.0)
            .fold(None, |best: Option<&GapResult>, g| match best {
                Some(b) if b.abs_gap >= g.abs_gap => Some(b),
                _ => Some(g),
            })
    }
}
