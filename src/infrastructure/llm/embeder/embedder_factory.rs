use std::sync::Arc;
use std::time::Duration;

use super::embedding_backend::EmbeddingBackend;
use super::openai_embedder::OpenAiEmbedder;
use crate::config::{EmbeddingProvider, EmbeddingsSettings, OpenAiSettings};

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: OpenAI embedder requires APP_OPENAI__API_KEY")]
    MissingApiKey,
    #[error("embedder initialization failed: {0}")]
    InitializationFailed(String),
}

impl EmbedderFactory {
    /// Builds the configured backend. Construction problems with the external
    /// provider degrade to the hash backend instead of failing.
    pub fn create(settings: &EmbeddingsSettings, openai: &OpenAiSettings) -> EmbeddingBackend {
        match settings.provider {
            EmbeddingProvider::Hash => {
                tracing::info!(dimension = settings.dimension, "Using hash embedding backend");
                EmbeddingBackend::hash(settings.dimension)
            }
            EmbeddingProvider::OpenAi => match Self::create_openai(settings, openai) {
                Ok(embedder) => {
                    tracing::info!(
                        model = %settings.model,
                        "Using OpenAI embedding backend with hash fallback"
                    );
                    EmbeddingBackend::with_fallback(Arc::new(embedder), settings.dimension)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "OpenAI embedder unavailable, using hash backend");
                    EmbeddingBackend::hash(settings.dimension)
                }
            },
        }
    }

    pub fn create_openai(
        settings: &EmbeddingsSettings,
        openai: &OpenAiSettings,
    ) -> Result<OpenAiEmbedder, EmbedderFactoryError> {
        let key = openai
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(EmbedderFactoryError::MissingApiKey)?;

        OpenAiEmbedder::new(
            &openai.base_url,
            key,
            settings.model.clone(),
            settings.dimension,
            Duration::from_secs(settings.timeout_secs),
        )
        .map_err(|e| EmbedderFactoryError::InitializationFailed(e.to_string()))
    }
}
