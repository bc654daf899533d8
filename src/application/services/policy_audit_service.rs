use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;

use super::checklist_matcher::ChecklistMatcher;
use super::checklist_service::{ChecklistError, ChecklistService};
use super::scoring::{apply_guardrail, assess};
use super::settings_service::{SettingsError, SettingsService};
use crate::application::ports::{
    AuditRepository, DocumentClassifier, Embedder, EmbedderError, FileLoader, RepositoryError,
    TextSplitter, UploadStore, UploadStoreError,
};
use crate::domain::{
    AuditId, Chunk, DEFAULT_FILENAME, Document, PolicyAuditRecord, TenantId, UsageEvent,
};

/// Collaborators of [`PolicyAuditService`], wired by the caller.
///
/// `embedder` must be a fallback-carrying backend (the factory-built
/// `EmbeddingBackend`): an external provider's failures are absorbed there and
/// never reach [`AuditError::Embedding`].
pub struct PolicyAuditComponents {
    pub file_loader: Arc<dyn FileLoader>,
    pub text_splitter: Arc<dyn TextSplitter>,
    pub classifier: Arc<dyn DocumentClassifier>,
    pub embedder: Arc<dyn Embedder>,
    pub checklists: Arc<ChecklistService>,
    pub settings: Arc<SettingsService>,
    pub uploads: Arc<dyn UploadStore>,
    pub audits: Arc<dyn AuditRepository>,
}

/// Runs a policy document through extraction, classification, checklist
/// matching and scoring, then persists the guarded result.
pub struct PolicyAuditService {
    file_loader: Arc<dyn FileLoader>,
    text_splitter: Arc<dyn TextSplitter>,
    classifier: Arc<dyn DocumentClassifier>,
    matcher: ChecklistMatcher,
    checklists: Arc<ChecklistService>,
    settings: Arc<SettingsService>,
    uploads: Arc<dyn UploadStore>,
    audits: Arc<dyn AuditRepository>,
}

impl PolicyAuditService {
    pub fn new(components: PolicyAuditComponents) -> Self {
        Self {
            file_loader: components.file_loader,
            text_splitter: components.text_splitter,
            classifier: components.classifier,
            matcher: ChecklistMatcher::new(components.embedder),
            checklists: components.checklists,
            settings: components.settings,
            uploads: components.uploads,
            audits: components.audits,
        }
    }

    pub fn checklists(&self) -> &ChecklistService {
        &self.checklists
    }

    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }

    /// Extracted text and its chunks. Any extraction or splitting failure is
    /// reported as [`AuditError::UnprocessableDocument`]; the detail is logged only.
    pub async fn extract_and_chunk(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<(String, Vec<Chunk>), AuditError> {
        let text = self
            .file_loader
            .extract_text(data, document)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    filename = %document.filename,
                    "Document extraction failed"
                );
                AuditError::UnprocessableDocument
            })?;

        let chunks = self
            .text_splitter
            .split(&text, document.id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    filename = %document.filename,
                    "Document splitting failed"
                );
                AuditError::UnprocessableDocument
            })?;

        Ok((text, chunks))
    }

    #[tracing::instrument(
        skip(self, data, unit_cost),
        fields(tenant_id = %tenant_id, size = data.len())
    )]
    pub async fn run_audit(
        &self,
        data: Bytes,
        filename: &str,
        tenant_id: TenantId,
        unit_cost: f64,
    ) -> Result<PolicyAuditRecord, AuditError> {
        let filename = if filename.trim().is_empty() {
            DEFAULT_FILENAME
        } else {
            filename
        };
        let document = Document::pdf(filename, data.len() as u64);

        let (text, chunks) = self.extract_and_chunk(&data, &document).await?;

        let industry = self.settings.get_industry(tenant_id).await?;
        let classification = self.classifier.classify(&text, Some(&industry)).await;

        let checklist = self
            .checklists
            .checklist_for(tenant_id, &classification)
            .await?;
        if checklist.is_empty() {
            return Err(AuditError::EmptyChecklist);
        }

        let threshold = self.settings.get_threshold(tenant_id).await?;
        let chunk_texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let outcome = self
            .matcher
            .match_checklist(&checklist, &chunk_texts, threshold)
            .await
            .map_err(|e| match e {
                EmbedderError::DimensionMismatch { expected, actual } => {
                    AuditError::ChecklistDimensionMismatch { expected, actual }
                }
                other => AuditError::Embedding(other),
            })?;

        let result = apply_guardrail(assess(
            outcome,
            &classification,
            self.classifier.provider(),
        ));

        let file_path = self.uploads.save(data, &document.filename).await?;

        let usage = UsageEvent::policy_audit(
            tenant_id,
            unit_cost,
            result.matched_items().len(),
            result.gaps().len(),
        );
        let record = PolicyAuditRecord {
            id: AuditId::new(),
            tenant_id,
            filename: document.filename,
            file_path,
            result,
            created_at: Utc::now(),
        };

        self.audits.save(&record, &usage).await?;

        tracing::info!(
            audit_id = %record.id.as_uuid(),
            chunks = chunks.len(),
            checklist = checklist.len(),
            matched = record.result.matched_items().len(),
            gaps = record.result.gaps().len(),
            score = record.result.score(),
            rating = %record.result.rating(),
            doc_type = %record.result.doc_type(),
            jurisdiction = %record.result.jurisdiction(),
            "Policy audit complete"
        );

        Ok(record)
    }

    pub async fn latest_audit(
        &self,
        tenant_id: TenantId,
    ) -> Result<Option<PolicyAuditRecord>, AuditError> {
        Ok(self.audits.latest(tenant_id).await?)
    }

    pub async fn list_audits(
        &self,
        tenant_id: TenantId,
        limit: usize,
    ) -> Result<Vec<PolicyAuditRecord>, AuditError> {
        Ok(self.audits.list(tenant_id, limit).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("could not read this document")]
    UnprocessableDocument,
    #[error("tenant has no checklist items")]
    EmptyChecklist,
    #[error("checklist embedded at dimension {actual}, embedder produces {expected}")]
    ChecklistDimensionMismatch { expected: usize, actual: usize },
    #[error("checklist: {0}")]
    Checklist(#[from] ChecklistError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    /// Local embedding failure, such as a blocking task that did not finish.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("upload storage: {0}")]
    Upload(#[from] UploadStoreError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
