use std::sync::Arc;

use async_trait::async_trait;

use super::hash_embedder::HashEmbedder;
use crate::application::ports::{Embedder, EmbedderError, EmbedderInfo};
use crate::domain::Embedding;

/// Embedding strategy chosen once at construction.
///
/// The external variant always carries a hash fallback: any provider error,
/// short batch or wrong-dimension vector is logged and the whole batch is
/// re-embedded with the hash embedder, so callers never see a provider failure.
pub enum EmbeddingBackend {
    Hash(HashEmbedder),
    External {
        provider: Arc<dyn Embedder>,
        fallback: HashEmbedder,
    },
}

impl EmbeddingBackend {
    pub fn hash(dimension: usize) -> Self {
        Self::Hash(HashEmbedder::new(dimension))
    }

    pub fn with_fallback(provider: Arc<dyn Embedder>, dimension: usize) -> Self {
        Self::External {
            provider,
            fallback: HashEmbedder::new(dimension),
        }
    }

    fn fallback(&self) -> &HashEmbedder {
        match self {
            Self::Hash(hash) => hash,
            Self::External { fallback, .. } => fallback,
        }
    }
}

fn consistent(vectors: &[Embedding], expected_len: usize, dimension: usize) -> bool {
    vectors.len() == expected_len && vectors.iter().all(|v| v.dimensions() == dimension)
}

#[async_trait]
impl Embedder for EmbeddingBackend {
    async fn embed_one(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let mut vectors = self.embed_many(&[text]).await?;
        vectors
            .pop()
            .ok_or_else(|| EmbedderError::InvalidResponse("empty result".to_string()))
    }

    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        match self {
            Self::Hash(hash) => hash.embed_many(texts).await,
            Self::External { provider, fallback } => {
                match provider.embed_many(texts).await {
                    Ok(vectors) if consistent(&vectors, texts.len(), fallback.dimension()) => {
                        Ok(vectors)
                    }
                    Ok(vectors) => {
                        tracing::warn!(
                            expected = texts.len(),
                            received = vectors.len(),
                            dimension = fallback.dimension(),
                            "External embeddings inconsistent, using hash fallback"
                        );
                        fallback.embed_many(texts).await
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "External embedder unavailable, using hash fallback"
                        );
                        fallback.embed_many(texts).await
                    }
                }
            }
        }
    }

    fn dimension(&self) -> usize {
        self.fallback().dimension()
    }

    fn info(&self) -> EmbedderInfo {
        match self {
            Self::Hash(hash) => hash.info(),
            Self::External { provider, .. } => provider.info(),
        }
    }
}
