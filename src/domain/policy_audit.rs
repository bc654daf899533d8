use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DocType, Jurisdiction, StoragePath, TenantId};

pub const GAP_REASON: &str = "No close match in submitted PDF";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyGap {
    pub checklist_item: String,
    pub reason: String,
    pub severity: Severity,
}

impl PolicyGap {
    pub fn unmatched(checklist_item: impl Into<String>) -> Self {
        Self {
            checklist_item: checklist_item.into(),
            reason: GAP_REASON.to_string(),
            severity: Severity::default(),
        }
    }
}

/// Qualitative band over the 0..=100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
    #[serde(rename = "High risk")]
    HighRisk,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Rating::OnTrack,
            70..=84 => Rating::NeedsAttention,
            _ => Rating::HighRisk,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::OnTrack => "On track",
            Rating::NeedsAttention => "Needs attention",
            Rating::HighRisk => "High risk",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Matched checklist texts and gaps, in checklist order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub gaps: Vec<PolicyGap>,
}

impl MatchOutcome {
    pub fn total(&self) -> usize {
        self.matched.len() + self.gaps.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierNotes {
    pub reasoning: String,
    pub provider: String,
}

/// Output aggregate of one audit. Score and rating are derived from the match
/// counts at construction and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyAuditResult {
    pub(crate) score: u8,
    pub(crate) rating: Rating,
    pub(crate) matched_items: Vec<String>,
    pub(crate) gaps: Vec<PolicyGap>,
    pub(crate) guardrail_note: String,
    pub(crate) doc_type: DocType,
    pub(crate) jurisdiction: Jurisdiction,
    pub(crate) classifier_notes: ClassifierNotes,
}

impl PolicyAuditResult {
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn matched_items(&self) -> &[String] {
        &self.matched_items
    }

    pub fn gaps(&self) -> &[PolicyGap] {
        &self.gaps
    }

    pub fn guardrail_note(&self) -> &str {
        &self.guardrail_note
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn classifier_notes(&self) -> &ClassifierNotes {
        &self.classifier_notes
    }

    /// Replaces the guardrail note. Any value set here is overwritten again
    /// when the guardrail runs.
    pub fn with_guardrail_note(mut self, note: impl Into<String>) -> Self {
        self.guardrail_note = note.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AuditId(Uuid);

impl AuditId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AuditId {
    fn default() -> Self {
        Self::new()
    }
}

/// The fully populated aggregate handed to persistence. Checklist texts are
/// copied in, so later checklist changes leave historical audits untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyAuditRecord {
    pub id: AuditId,
    pub tenant_id: TenantId,
    pub filename: String,
    #[serde(serialize_with = "serialize_storage_path")]
    pub file_path: StoragePath,
    #[serde(flatten)]
    pub result: PolicyAuditResult,
    pub created_at: DateTime<Utc>,
}

fn serialize_storage_path<S>(path: &StoragePath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(path.as_str())
}
