//! Analysis Module - Pure domain services for survey scoring.
//!
//! # Components
//!
//! - `ScoringEngine` - OCAI culture profiles and Likert dimension statistics
//! - `GapAnalyzer` - Current vs. preferred culture gaps, optional severity bands
//! - `CohortAggregator` - Department / stakeholder comparison with anonymity threshold
//! - `CampaignCultureAnalyzer` - Campaign-wide OCAI report
//! - `LeadershipReviewAnalyzer` - 360° blind spots, strengths and development areas
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. Policy values such as the
//! anonymity threshold are passed in by the caller.

mod campaign_culture;
mod cohort_aggregator;
mod culture_profile;
mod dimension_score;
mod gap_analyzer;
mod leadership_review;
mod scoring_engine;

pub use campaign_culture::{CampaignCultureAnalyzer, CampaignCultureReport};
pub use cohort_aggregator::{
    CohortAggregator, CohortComparison, CohortKey, CohortSummary, MIN_GROUP_SIZE,
};
pub use culture_profile::CultureProfile;
pub use dimension_score::DimensionScore;
pub use gap_analyzer::{GapAnalyzer, GapDirection, GapResult, GapSeverity, GapSeverityBands};
pub use leadership_review::{
    BlindSpot, LeadershipReview, LeadershipReviewAnalyzer, PerspectiveReport, RankedSubdimension,
    ReviewError, SubdimensionScore, DEFAULT_BLIND_SPOT_THRESHOLD, DEFAULT_MIN_OTHER_RATERS,
    DEFAULT_TOP_N,
};
pub use scoring_engine::ScoringEngine;
