//! Descriptive statistics for a named Likert dimension.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::round2;

/// Arithmetic mean, `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean, sample standard deviation and count for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
}

impl DimensionScore {
    /// Computes the score of `values`, rounded to two decimals.
    ///
    /// The variance divisor is `n - 1` floored at 1, so a single value has
    /// `sd == 0`. Returns `None` when there are no values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let n = values.len();
        let divisor = n.saturating_sub(1).max(1) as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / divisor;

        Some(Self {
            mean: round2(mean),
            sd: round2(variance.sqrt()),
            n,
        })
    }
}
