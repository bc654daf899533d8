use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ChecklistRepository, RepositoryError};
use crate::domain::{ChecklistItem, DocType, Jurisdiction, TenantId};

/// Process-local checklist storage, one vector per tenant in insertion order.
#[derive(Default)]
pub struct InMemoryChecklistRepository {
    items: RwLock<HashMap<TenantId, Vec<ChecklistItem>>>,
}

impl InMemoryChecklistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChecklistRepository for InMemoryChecklistRepository {
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.get(&tenant_id).cloned().unwrap_or_default())
    }

    async fn list_matching(
        &self,
        tenant_id: TenantId,
        doc_types: &[DocType],
        jurisdictions: &[Jurisdiction],
    ) -> Result<Vec<ChecklistItem>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items
            .get(&tenant_id)
            .map(|tenant_items| {
                tenant_items
                    .iter()
                    .filter(|item| {
                        doc_types.contains(&item.doc_type)
                            && jurisdictions.contains(&item.jurisdiction)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_many(&self, new_items: &[ChecklistItem]) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        for item in new_items {
            items.entry(item.tenant_id).or_default().push(item.clone());
        }
        Ok(())
    }

    async fn delete_all(&self, tenant_id: TenantId) -> Result<u64, RepositoryError> {
        let mut items = self.items.write().await;
        Ok(items
            .remove(&tenant_id)
            .map(|removed| removed.len() as u64)
            .unwrap_or(0))
    }
}
