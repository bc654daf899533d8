use serde::{Deserialize, Serialize};

use super::{DocType, Industry, Jurisdiction};

const STRONG_HIPAA_PHRASES: [&str; 6] = [
    "protected health information",
    "phi",
    "covered entity",
    "business associate",
    "hipaa privacy rule",
    "hipaa security rule",
];

pub const INDUSTRY_ADJUSTMENT_NOTE: &str =
    "Adjusted jurisdiction to general for non-healthcare industry";

/// Per-audit result of document classification; folded into the audit's
/// classifier notes rather than stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassification {
    pub doc_type: DocType,
    pub jurisdiction: Jurisdiction,
    pub reasoning: String,
}

impl DocumentClassification {
    pub fn new(
        doc_type: DocType,
        jurisdiction: Jurisdiction,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            doc_type,
            jurisdiction,
            reasoning: reasoning.into(),
        }
    }
}

/// `hipaa` plus at least one phrase that only shows up in genuine HIPAA material.
pub fn has_strong_hipaa_signal(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("hipaa")
        && STRONG_HIPAA_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase))
}

/// Downgrades a `us-hipaa` jurisdiction to `general` when the tenant's industry
/// is known, is not healthcare, and the text lacks a strong HIPAA signal.
/// Returns the note to record when an adjustment was made.
pub fn apply_industry_bias(
    jurisdiction: Jurisdiction,
    text: &str,
    industry: Option<&Industry>,
) -> (Jurisdiction, Option<&'static str>) {
    match industry {
        Some(industry)
            if jurisdiction == Jurisdiction::UsHipaa
                && !industry.is_healthcare()
                && !has_strong_hipaa_signal(text) =>
        {
            (Jurisdiction::General, Some(INDUSTRY_ADJUSTMENT_NOTE))
        }
        _ => (jurisdiction, None),
    }
}
