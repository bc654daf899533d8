use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{ChecklistItem, DocType, Jurisdiction, TenantId};

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// All of a tenant's items in insertion order.
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, RepositoryError>;

    /// Items whose doc-type is in `doc_types` and jurisdiction in `jurisdictions`.
    async fn list_matching(
        &self,
        tenant_id: TenantId,
        doc_types: &[DocType],
        jurisdictions: &[Jurisdiction],
    ) -> Result<Vec<ChecklistItem>, RepositoryError>;

    async fn insert_many(&self, items: &[ChecklistItem]) -> Result<(), RepositoryError>;

    /// Returns the number of removed items.
    async fn delete_all(&self, tenant_id: TenantId) -> Result<u64, RepositoryError>;
}
