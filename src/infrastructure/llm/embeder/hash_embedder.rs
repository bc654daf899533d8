use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::application::ports::{Embedder, EmbedderError, EmbedderInfo};
use crate::config::DEFAULT_EMBEDDING_DIMENSION;
use crate::domain::Embedding;

pub const HASH_PROVIDER: &str = "hash";
pub const HASH_MODEL: &str = "hash-embedding";

/// Texts per blocking task when a batch is spread across the blocking pool.
const BLOCKING_BATCH: usize = 64;

/// Deterministic bag-of-hashed-words embedder with no external dependency.
///
/// Text is lower-cased and split on whitespace; tokens with any non-ASCII
/// character are dropped. Each token adds one to the slot given by the first
/// four bytes of its SHA-256 digest (big-endian) modulo the dimension, and the
/// result is L2-normalized. Text without tokens maps to the zero vector.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn embed_text(&self, text: &str) -> Embedding {
        embed_text(text, self.dimension)
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSION)
    }
}

pub fn embed_text(text: &str, dimension: usize) -> Embedding {
    let dimension = dimension.max(1);
    let lowered = text.to_lowercase();
    let mut values = vec![0.0f32; dimension];
    let mut token_count = 0usize;

    for token in lowered.split_whitespace().filter(|t| t.is_ascii()) {
        let index = hash_token(token) as usize % dimension;
        values[index] += 1.0;
        token_count += 1;
    }

    if token_count == 0 {
        return Embedding::zeros(dimension);
    }

    Embedding::new(values).l2_normalized()
}

fn hash_token(token: &str) -> u32 {
    let digest = Sha256::digest(token.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed_one(&self, text: &str) -> Result<Embedding, EmbedderError> {
        Ok(self.embed_text(text))
    }

    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        if texts.len() <= BLOCKING_BATCH {
            return Ok(texts.iter().map(|t| self.embed_text(t)).collect());
        }

        let dimension = self.dimension;
        let tasks = texts.chunks(BLOCKING_BATCH).map(|batch| {
            let owned: Vec<String> = batch.iter().map(|t| (*t).to_string()).collect();
            tokio::task::spawn_blocking(move || {
                owned
                    .iter()
                    .map(|t| embed_text(t, dimension))
                    .collect::<Vec<_>>()
            })
        });

        let batches = futures::future::try_join_all(tasks)
            .await
            .map_err(|e| EmbedderError::TaskFailed(e.to_string()))?;

        Ok(batches.into_iter().flatten().collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn info(&self) -> EmbedderInfo {
        EmbedderInfo {
            provider: HASH_PROVIDER.to_string(),
            model: HASH_MODEL.to_string(),
        }
    }
}
