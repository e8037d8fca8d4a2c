//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the survey analytics domain.

mod culture_type;
mod errors;
mod ids;
mod module_code;
mod rounding;
mod stakeholder;

pub use culture_type::{CulturePerspective, CultureType};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CampaignId, OrganizationId, ParticipantId, ResponseId};
pub use module_code::ModuleCode;
pub use rounding::{round1, round2, round_half_up};
pub use stakeholder::{RaterPerspective, StakeholderGroup};
