use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{PolicyAuditRecord, TenantId, UsageEvent};

#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Persists the audit and its usage record together.
    async fn save(
        &self,
        record: &PolicyAuditRecord,
        usage: &UsageEvent,
    ) -> Result<(), RepositoryError>;

    async fn latest(&self, tenant_id: TenantId)
    -> Result<Option<PolicyAuditRecord>, RepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        tenant_id: TenantId,
        limit: usize,
    ) -> Result<Vec<PolicyAuditRecord>, RepositoryError>;
}
