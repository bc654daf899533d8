use std::sync::Arc;

use crate::application::ports::{RepositoryError, SettingsRepository};
use crate::config::DEFAULT_SIMILARITY_THRESHOLD;
use crate::domain::{Industry, TenantId};

pub const THRESHOLD_KEY: &str = "embedding_similarity_threshold";
pub const INDUSTRY_KEY: &str = "industry";

fn valid_threshold(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Tenant-level matching threshold and industry.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    default_threshold: f32,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>, default_threshold: f32) -> Self {
        let default_threshold = if valid_threshold(default_threshold) {
            default_threshold
        } else {
            tracing::warn!(
                configured = default_threshold,
                "Configured threshold outside [0, 1], using built-in default"
            );
            DEFAULT_SIMILARITY_THRESHOLD
        };

        Self {
            repository,
            default_threshold,
        }
    }

    pub fn default_threshold(&self) -> f32 {
        self.default_threshold
    }

    /// Stored threshold, or the default when unset or unreadable.
    pub async fn get_threshold(&self, tenant_id: TenantId) -> Result<f32, SettingsError> {
        let Some(raw) = self.repository.get(tenant_id, THRESHOLD_KEY).await? else {
            return Ok(self.default_threshold);
        };

        match raw.trim().parse::<f32>() {
            Ok(value) if valid_threshold(value) => Ok(value),
            _ => {
                tracing::warn!(
                    tenant_id = %tenant_id,
                    stored = %raw,
                    "Ignoring invalid stored threshold"
                );
                Ok(self.default_threshold)
            }
        }
    }

    pub async fn set_threshold(
        &self,
        tenant_id: TenantId,
        value: f32,
    ) -> Result<(), SettingsError> {
        if !valid_threshold(value) {
            return Err(SettingsError::InvalidThreshold(value));
        }

        self.repository
            .set(tenant_id, THRESHOLD_KEY, &value.to_string())
            .await?;
        Ok(())
    }

    pub async fn get_industry(&self, tenant_id: TenantId) -> Result<Industry, SettingsError> {
        Ok(self
            .repository
            .get(tenant_id, INDUSTRY_KEY)
            .await?
            .map(|raw| Industry::new(&raw))
            .unwrap_or_default())
    }

    pub async fn set_industry(
        &self,
        tenant_id: TenantId,
        label: &str,
    ) -> Result<Industry, SettingsError> {
        let industry = Industry::new(label);
        self.repository
            .set(tenant_id, INDUSTRY_KEY, industry.as_str())
            .await?;
        Ok(industry)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
