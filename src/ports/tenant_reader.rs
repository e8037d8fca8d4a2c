use async_trait::async_trait;

use super::AnalyticsError;
use crate::domain::foundation::OrganizationId;
use crate::domain::survey::PackageTier;

/// Read-only port for organization subscription data
#[async_trait]
pub trait TenantReader: Send + Sync {
    /// Gets the package tier an organization is subscribed to
    async fn package_tier(&self, organization_id: OrganizationId)
        -> Result<PackageTier, AnalyticsError>;
}
