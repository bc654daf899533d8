use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::TenantId;

/// Per-tenant key/value settings.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, tenant_id: TenantId, key: &str) -> Result<Option<String>, RepositoryError>;

    async fn set(&self, tenant_id: TenantId, key: &str, value: &str) -> Result<(), RepositoryError>;
}
