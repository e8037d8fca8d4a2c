//! PostgreSQL implementation of TenantReader.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::domain::foundation::OrganizationId;
use crate::domain::survey::PackageTier;
use crate::ports::{AnalyticsError, TenantReader};

/// Reads the package tier from the `organizations` table.
#[derive(Clone)]
pub struct PostgresTenantReader {
    pool: PgPool,
}

impl PostgresTenantReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrganizationRow {
    id: Uuid,
    package_tier: String,
}

fn parse_tier(row: &OrganizationRow) -> Result<PackageTier, AnalyticsError> {
    row.package_tier.parse().map_err(|_| {
        warn!(organization_id = %row.id, tier = %row.package_tier, "Unknown package tier");
        AnalyticsError::Database(format!("Invalid package tier value: {}", row.package_tier))
    })
}

#[async_trait]
impl TenantReader for PostgresTenantReader {
    async fn package_tier(
        &self,
        organization_id: OrganizationId,
    ) -> Result<PackageTier, AnalyticsError> {
        let row: OrganizationRow = sqlx::query_as(
            r#"
            SELECT id, package_tier FROM organizations WHERE id = $1
            "#,
        )
        .bind(organization_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AnalyticsError::OrganizationNotFound(organization_id))?;

        parse_tier(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tier: &str) -> OrganizationRow {
        OrganizationRow {
            id: Uuid::new_v4(),
            package_tier: tier.to_string(),
        }
    }

    #[test]
    fn parse_tier_case_insensitive() {
        assert_eq!(parse_tier(&row("STARTER")).unwrap(), PackageTier::Starter);
        assert_eq!(parse_tier(&row("Professional")).unwrap(), PackageTier::Professional);
        assert_eq!(parse_tier(&row("enterprise")).unwrap(), PackageTier::Enterprise);
    }

    #[test]
    fn parse_tier_rejects_unknown_value() {
        assert!(matches!(parse_tier(&row("platinum")), Err(AnalyticsError::Database(_))));
    }
}
