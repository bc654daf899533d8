use async_trait::async_trait;

use crate::domain::Embedding;

/// Maps text to fixed-dimension vectors.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed_one(&self, text: &str) -> Result<Embedding, EmbedderError>;

    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError>;

    fn dimension(&self) -> usize;

    fn info(&self) -> EmbedderInfo;
}

/// Which backend produced a set of vectors, for audit transparency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedderInfo {
    pub provider: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedderError {
    #[error("embedding api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("embedding rate limited")]
    RateLimited,
    #[error("embedding request timed out")]
    Timeout,
    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
    #[error("embedding task failed: {0}")]
    TaskFailed(String),
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
