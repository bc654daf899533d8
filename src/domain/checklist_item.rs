use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DocType, Embedding, Industry, Jurisdiction, TenantId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistItemId(Uuid);

impl ChecklistItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChecklistItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// A tenant-scoped requirement statement with its embedding.
///
/// Items are created in bulk when a tenant's checklist is seeded and are never
/// mutated afterwards; a reset deletes them and seeds a fresh set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub tenant_id: TenantId,
    pub doc_type: DocType,
    pub jurisdiction: Jurisdiction,
    pub industry: Industry,
    pub text: String,
    pub embedding: Embedding,
    pub created_at: DateTime<Utc>,
}

impl ChecklistItem {
    pub fn new(
        tenant_id: TenantId,
        doc_type: DocType,
        jurisdiction: Jurisdiction,
        industry: Industry,
        text: impl Into<String>,
        embedding: Embedding,
    ) -> Self {
        Self {
            id: ChecklistItemId::new(),
            tenant_id,
            doc_type,
            jurisdiction,
            industry,
            text: text.into(),
            embedding,
            created_at: Utc::now(),
        }
    }

    /// True when the item applies to a document of this type and jurisdiction,
    /// counting `general` tags as wildcards.
    pub fn applies_to(&self, doc_type: DocType, jurisdiction: Jurisdiction) -> bool {
        (self.doc_type == doc_type || self.doc_type == DocType::General)
            && (self.jurisdiction == jurisdiction || self.jurisdiction == Jurisdiction::General)
    }
}
