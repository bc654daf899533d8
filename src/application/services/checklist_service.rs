use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::checklist_catalog::{CatalogEntry, DEFAULT_CHECKLIST};
use crate::application::ports::{ChecklistRepository, Embedder, EmbedderError, RepositoryError};
use crate::domain::{
    ChecklistItem, DocType, DocumentClassification, Industry, Jurisdiction, TenantId,
};

/// Seeds, resets and serves tenant checklists.
///
/// Seeding and reset for a tenant are serialized behind a per-tenant lock,
/// and lookups take the same lock shared, so an audit never reads a
/// half-deleted checklist.
pub struct ChecklistService {
    repository: Arc<dyn ChecklistRepository>,
    embedder: Arc<dyn Embedder>,
    catalog: Vec<CatalogEntry>,
    tenant_locks: Mutex<HashMap<TenantId, Arc<RwLock<()>>>>,
}

impl ChecklistService {
    pub fn new(repository: Arc<dyn ChecklistRepository>, embedder: Arc<dyn Embedder>) -> Self {
        Self::with_catalog(repository, embedder, DEFAULT_CHECKLIST.to_vec())
    }

    pub fn with_catalog(
        repository: Arc<dyn ChecklistRepository>,
        embedder: Arc<dyn Embedder>,
        catalog: Vec<CatalogEntry>,
    ) -> Self {
        Self {
            repository,
            embedder,
            catalog,
            tenant_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Locks nobody else holds are dropped on every lookup, so the registry
    /// only keeps tenants with an operation in flight.
    async fn tenant_lock(&self, tenant_id: TenantId) -> Arc<RwLock<()>> {
        let mut locks = self.tenant_locks.lock().await;
        locks.retain(|id, lock| *id == tenant_id || Arc::strong_count(lock) > 1);
        locks.entry(tenant_id).or_default().clone()
    }

    /// Number of tenants currently tracked by the lock registry.
    pub async fn tracked_tenants(&self) -> usize {
        let mut locks = self.tenant_locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.len()
    }

    /// Returns the tenant's checklist, seeding it first if it is empty.
    #[tracing::instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn ensure(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, ChecklistError> {
        let lock = self.tenant_lock(tenant_id).await;
        let _guard = lock.write().await;

        let existing = self.repository.list(tenant_id).await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        self.seed(tenant_id).await
    }

    /// Deletes every item for the tenant and seeds the catalog again.
    #[tracing::instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn reset(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, ChecklistError> {
        let lock = self.tenant_lock(tenant_id).await;
        let _guard = lock.write().await;

        let removed = self.repository.delete_all(tenant_id).await?;
        tracing::info!(removed, "Checklist cleared");

        self.seed(tenant_id).await
    }

    /// Items tagged with the document's doc-type or `general` and its
    /// jurisdiction or `general`. When nothing matches, the full checklist
    /// (seeded if necessary) is used instead.
    #[tracing::instrument(
        skip(self, classification),
        fields(
            tenant_id = %tenant_id,
            doc_type = %classification.doc_type,
            jurisdiction = %classification.jurisdiction,
        )
    )]
    pub async fn checklist_for(
        &self,
        tenant_id: TenantId,
        classification: &DocumentClassification,
    ) -> Result<Vec<ChecklistItem>, ChecklistError> {
        let doc_types = [classification.doc_type, DocType::General];
        let jurisdictions = [classification.jurisdiction, Jurisdiction::General];

        let filtered = {
            let lock = self.tenant_lock(tenant_id).await;
            let _guard = lock.read().await;
            self.repository
                .list_matching(tenant_id, &doc_types, &jurisdictions)
                .await?
        };

        if !filtered.is_empty() {
            return Ok(filtered);
        }

        tracing::debug!("No checklist items for classification, using full checklist");
        self.ensure(tenant_id).await
    }

    async fn seed(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, ChecklistError> {
        let texts: Vec<&str> = self.catalog.iter().map(|e| e.text).collect();
        let embeddings = if texts.is_empty() {
            Vec::new()
        } else {
            self.embedder.embed_many(&texts).await?
        };

        if embeddings.len() != self.catalog.len() {
            return Err(ChecklistError::Embedding(EmbedderError::InvalidResponse(
                format!(
                    "expected {} embeddings, got {}",
                    self.catalog.len(),
                    embeddings.len()
                ),
            )));
        }

        let items: Vec<ChecklistItem> = self
            .catalog
            .iter()
            .zip(embeddings)
            .map(|(entry, embedding)| {
                ChecklistItem::new(
                    tenant_id,
                    entry.doc_type,
                    entry.jurisdiction,
                    Industry::new(entry.industry),
                    entry.text,
                    embedding,
                )
            })
            .collect();

        self.repository.insert_many(&items).await?;

        let info = self.embedder.info();
        tracing::info!(
            items = items.len(),
            provider = %info.provider,
            model = %info.model,
            "Checklist seeded"
        );

        Ok(items)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
}
