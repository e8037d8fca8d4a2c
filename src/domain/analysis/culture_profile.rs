//! Culture profile value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{round1, CultureType};

/// Tolerance when checking that an ipsative profile still sums to 100.
const COMPLETE_SUM_TOLERANCE: f64 = 0.5;

/// Mean points per culture type across a set of ipsative distributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CultureProfile {
    pub clan: f64,
    pub adhocracy: f64,
    pub market: f64,
    pub hierarchy: f64,
}

impl CultureProfile {
    pub fn new(clan: f64, adhocracy: f64, market: f64, hierarchy: f64) -> Self {
        Self {
            clan,
            adhocracy,
            market,
            hierarchy,
        }
    }

    /// Builds a profile by evaluating `f` for each culture type.
    pub fn from_fn(mut f: impl FnMut(CultureType) -> f64) -> Self {
        Self {
            clan: f(CultureType::Clan),
            adhocracy: f(CultureType::Adhocracy),
            market: f(CultureType::Market),
            hierarchy: f(CultureType::Hierarchy),
        }
    }

    pub fn get(&self, culture_type: CultureType) -> f64 {
        match culture_type {
            CultureType::Clan => self.clan,
            CultureType::Adhocracy => self.adhocracy,
            CultureType::Market => self.market,
            CultureType::Hierarchy => self.hierarchy,
        }
    }

    pub fn total(&self) -> f64 {
        CultureType::ALL.iter().map(|ct| self.get(*ct)).sum()
    }

    /// Culture type with the highest score; ties resolve to the earlier type.
    pub fn dominant(&self) -> CultureType {
        let mut best = CultureType::Clan;
        for ct in CultureType::ALL {
            if self.get(ct) > self.get(best) {
                best = ct;
            }
        }
        best
    }

    /// True when the profile still sums to 100 within rounding tolerance.
    pub fn is_complete_distribution(&self) -> bool {
        (self.total() - 100.0).abs() < COMPLETE_SUM_TOLERANCE
    }

    /// Each component rounded to one decimal.
    pub fn rounded(&self) -> Self {
        Self::from_fn(|ct| round1(self.get(ct)))
    }

    /// Unrounded component-wise mean of `profiles`, dividing by `max(1, n)`.
    pub fn mean_of(profiles: &[CultureProfile]) -> Self {
        let n = profiles.len().max(1) as f64;
        Self::from_fn(|ct| profiles.iter().map(|p| p.get(ct)).sum::<f64>() / n)
    }
}
