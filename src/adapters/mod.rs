//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes exposing scoring and analytics
//! - `memory` - In-memory survey store for tests and local runs
//! - `postgres` - PostgreSQL readers over recorded survey data

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemorySurveyStore;
pub use postgres::{PostgresResponseReader, PostgresTenantReader};
