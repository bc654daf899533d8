use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{AuditRepository, RepositoryError};
use crate::domain::{PolicyAuditRecord, TenantId, UsageEvent};

/// Keeps audits and their usage events in save order.
#[derive(Default)]
pub struct InMemoryAuditRepository {
    records: RwLock<Vec<PolicyAuditRecord>>,
    usage: RwLock<Vec<UsageEvent>>,
}

impl InMemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn usage_events(&self, tenant_id: TenantId) -> Vec<UsageEvent> {
        self.usage
            .read()
            .await
            .iter()
            .filter(|e| e.tenant_id == tenant_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn save(
        &self,
        record: &PolicyAuditRecord,
        usage: &UsageEvent,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let mut events = self.usage.write().await;
        records.push(record.clone());
        events.push(usage.clone());
        Ok(())
    }

    async fn latest(
        &self,
        tenant_id: TenantId,
    ) -> Result<Option<PolicyAuditRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .find(|r| r.tenant_id == tenant_id)
            .cloned())
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        limit: usize,
    ) -> Result<Vec<PolicyAuditRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.tenant_id == tenant_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
