//! Survey HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{OrganizationContext, SurveyAppState, ORGANIZATION_HEADER};
pub use routes::survey_routes;
