//! Analytics HTTP adapter module.
//!
//! Scoring, gap, cohort comparison and campaign report endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalyticsAppState;
pub use routes::analytics_routes;
