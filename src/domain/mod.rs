//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `survey` - Module catalog, package tiers, answers and stored responses
//! - `validation` - Answer, module-set and CSV header validators
//! - `analysis` - Pure scoring services (profiles, gaps, cohorts, 360° review)

pub mod analysis;
pub mod foundation;
pub mod survey;
pub mod validation;
