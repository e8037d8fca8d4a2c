//! Analytics query handlers.
//!
//! Read-only handlers that load campaign responses and run the analyzers.

mod compare_cohorts;
mod get_campaign_culture;
mod get_leadership_review;

pub use compare_cohorts::{CompareCohortsHandler, CompareCohortsQuery, CompareCohortsResult};
pub use get_campaign_culture::{
    GetCampaignCultureHandler, GetCampaignCultureQuery, GetCampaignCultureResult,
};
pub use get_leadership_review::{
    GetLeadershipReviewHandler, GetLeadershipReviewQuery, GetLeadershipReviewResult,
    LeadershipReviewError,
};
