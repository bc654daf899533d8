use crate::domain::{
    ClassifierNotes, DocumentClassification, MatchOutcome, PolicyAuditResult, Rating,
};

pub const GUARDRAIL_MESSAGE: &str = "Guardrail: This assessment is generated from the stored checklist items only. Verify with counsel before acting on legal conclusions.";

/// `round(matched / max(1, total) * 100)` with ties to even, and its rating band.
pub fn score(matched: usize, total: usize) -> (u8, Rating) {
    let ratio = matched.min(total) as f64 / total.max(1) as f64;
    let score = (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8;
    (score, Rating::from_score(score))
}

/// Scores a match outcome. The guardrail note is left empty until
/// [`apply_guardrail`] runs.
pub fn assess(
    outcome: MatchOutcome,
    classification: &DocumentClassification,
    provider: &str,
) -> PolicyAuditResult {
    let (score, rating) = score(outcome.matched.len(), outcome.total());

    PolicyAuditResult {
        score,
        rating,
        matched_items: outcome.matched,
        gaps: outcome.gaps,
        guardrail_note: String::new(),
        doc_type: classification.doc_type,
        jurisdiction: classification.jurisdiction,
        classifier_notes: ClassifierNotes {
            reasoning: classification.reasoning.clone(),
            provider: provider.to_string(),
        },
    }
}

/// Drops repeated matched texts (first occurrence wins) and pins the
/// guardrail note to [`GUARDRAIL_MESSAGE`]. Gaps are untouched.
pub fn apply_guardrail(mut result: PolicyAuditResult) -> PolicyAuditResult {
    let mut deduped: Vec<String> = Vec::with_capacity(result.matched_items.len());
    for item in result.matched_items.drain(..) {
        if !deduped.contains(&item) {
            deduped.push(item);
        }
    }

    result.matched_items = deduped;
    result.guardrail_note = GUARDRAIL_MESSAGE.to_string();
    result
}
