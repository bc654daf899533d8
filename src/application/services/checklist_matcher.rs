use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{ChecklistItem, Embedding, MatchOutcome, PolicyGap};

/// Nearest-chunk matching of checklist items against a document.
pub struct ChecklistMatcher {
    embedder: Arc<dyn Embedder>,
}

impl ChecklistMatcher {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Embeds every chunk up front, then decides each item against the full
    /// chunk set. An item matches iff its nearest chunk lies within
    /// `threshold` cosine distance (inclusive).
    ///
    /// Items embedded at a different dimension than the embedder produces are
    /// rejected with [`EmbedderError::DimensionMismatch`]; the checklist has
    /// to be reset before it can be matched again.
    #[tracing::instrument(skip_all, fields(items = items.len(), chunks = chunks.len(), threshold))]
    pub async fn match_checklist<S: AsRef<str>>(
        &self,
        items: &[ChecklistItem],
        chunks: &[S],
        threshold: f32,
    ) -> Result<MatchOutcome, EmbedderError> {
        check_dimensions(items, self.embedder.dimension())?;

        let texts: Vec<&str> = chunks.iter().map(AsRef::as_ref).collect();

        let chunk_embeddings = if texts.is_empty() {
            Vec::new()
        } else {
            self.embedder.embed_many(&texts).await?
        };

        Ok(match_embeddings(items, &chunk_embeddings, threshold))
    }
}

fn check_dimensions(items: &[ChecklistItem], expected: usize) -> Result<(), EmbedderError> {
    let Some(stale) = items
        .iter()
        .find(|item| item.embedding.dimensions() != expected)
    else {
        return Ok(());
    };

    let actual = stale.embedding.dimensions();
    tracing::warn!(
        expected,
        actual,
        tenant_id = %stale.tenant_id,
        "Checklist embedded at a different dimension, reset required"
    );
    Err(EmbedderError::DimensionMismatch { expected, actual })
}

/// Smallest cosine distance from `item` to any chunk, ignoring pairs where
/// the distance is undefined.
pub fn nearest_distance(item: &Embedding, chunks: &[Embedding]) -> Option<f32> {
    chunks
        .iter()
        .filter_map(|chunk| item.cosine_distance(chunk))
        .min_by(f32::total_cmp)
}

pub fn match_embeddings(
    items: &[ChecklistItem],
    chunk_embeddings: &[Embedding],
    threshold: f32,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for item in items {
        match nearest_distance(&item.embedding, chunk_embeddings) {
            Some(distance) if distance <= threshold => {
                tracing::trace!(distance, item = %item.text, "Checklist item matched");
                outcome.matched.push(item.text.clone());
            }
            _ => outcome.gaps.push(PolicyGap::unmatched(item.text.as_str())),
        }
    }

    outcome
}
