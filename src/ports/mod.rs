//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read Ports
//!
//! - `ResponseReader` - Completed survey responses of a campaign
//! - `TenantReader` - Package tier of an organization

mod response_reader;
mod tenant_reader;

pub use response_reader::{AnalyticsError, ResponseReader};
pub use tenant_reader::TenantReader;
