use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, SettingsRepository};
use crate::domain::TenantId;

#[derive(Default)]
pub struct InMemorySettingsRepository {
    values: RwLock<HashMap<(TenantId, String), String>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self, tenant_id: TenantId, key: &str) -> Result<Option<String>, RepositoryError> {
        let values = self.values.read().await;
        Ok(values.get(&(tenant_id, key.to_string())).cloned())
    }

    async fn set(
        &self,
        tenant_id: TenantId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let mut values = self.values.write().await;
        values.insert((tenant_id, key.to_string()), value.to_string());
        Ok(())
    }
}
