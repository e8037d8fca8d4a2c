//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read survey responses; the single command handler checks
//! a submission before it is accepted.

pub mod handlers;

pub use handlers::analytics::{
    CompareCohortsHandler, CompareCohortsQuery, GetCampaignCultureHandler,
    GetCampaignCultureQuery, GetLeadershipReviewHandler, GetLeadershipReviewQuery,
    LeadershipReviewError,
};
pub use handlers::survey::{
    SubmissionError, SubmittedAnswer, ValidateSubmissionCommand, ValidateSubmissionHandler,
};
