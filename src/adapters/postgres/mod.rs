//! PostgreSQL adapters - Database implementations for read ports.
//!
//! - `PostgresResponseReader` - Completed responses joined with their answers
//! - `PostgresTenantReader` - Organization package tier lookup

mod response_reader;
mod tenant_reader;

pub use response_reader::PostgresResponseReader;
pub use tenant_reader::PostgresTenantReader;
