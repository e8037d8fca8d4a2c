//! Campus Culture - Survey scoring and culture analytics for universities
//!
//! This crate scores OCAI culture distributions and Likert-scale modules,
//! compares current and preferred culture, and reports cohort results only
//! when a cohort is large enough to keep participants anonymous.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
