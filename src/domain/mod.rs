mod checklist_item;
mod chunk;
mod classification;
mod doc_type;
mod document;
mod embedding;
mod industry;
mod jurisdiction;
mod policy_audit;
mod storage_path;
mod tenant_id;
mod usage_event;

pub use checklist_item::{ChecklistItem, ChecklistItemId};
pub use chunk::{Chunk, ChunkId};
pub use classification::{
    DocumentClassification, INDUSTRY_ADJUSTMENT_NOTE, apply_industry_bias, has_strong_hipaa_signal,
};
pub use doc_type::DocType;
pub use document::{ContentType, DEFAULT_FILENAME, Document, DocumentId};
pub use embedding::Embedding;
pub use industry::Industry;
pub use jurisdiction::Jurisdiction;
pub use policy_audit::{
    AuditId, ClassifierNotes, GAP_REASON, MatchOutcome, PolicyAuditRecord, PolicyAuditResult,
    PolicyGap, Rating, Severity,
};
pub use storage_path::StoragePath;
pub use tenant_id::TenantId;
pub use usage_event::{POLICY_AUDIT_EVENT, UsageEvent};
