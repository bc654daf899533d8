use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::heuristic_classifier::HeuristicClassifier;
use super::llm_classifier::LlmClassifier;
use crate::application::ports::DocumentClassifier;
use crate::config::{ClassifierProvider, ClassifierSettings, OpenAiSettings};
use crate::domain::{DocumentClassification, Industry};
use crate::infrastructure::llm::OpenAiClient;

/// Classification strategy chosen once at construction.
pub enum ClassifierBackend {
    Heuristic(HeuristicClassifier),
    Llm(LlmClassifier),
}

#[async_trait]
impl DocumentClassifier for ClassifierBackend {
    async fn classify(&self, text: &str, industry: Option<&Industry>) -> DocumentClassification {
        match self {
            Self::Heuristic(classifier) => classifier.classify(text, industry).await,
            Self::Llm(classifier) => classifier.classify(text, industry).await,
        }
    }

    fn provider(&self) -> &'static str {
        match self {
            Self::Heuristic(classifier) => classifier.provider(),
            Self::Llm(classifier) => classifier.provider(),
        }
    }
}

pub struct ClassifierFactory;

impl ClassifierFactory {
    /// The model path is only taken when explicitly configured and an API key
    /// is present; anything else yields the heuristic rules.
    pub fn create(settings: &ClassifierSettings, openai: &OpenAiSettings) -> ClassifierBackend {
        if settings.provider != ClassifierProvider::OpenAi {
            return ClassifierBackend::Heuristic(HeuristicClassifier::new());
        }

        let Some(api_key) = openai.api_key.clone().filter(|k| !k.trim().is_empty()) else {
            tracing::warn!("Model classifier configured without API key, using heuristic rules");
            return ClassifierBackend::Heuristic(HeuristicClassifier::new());
        };

        match OpenAiClient::new(
            &openai.base_url,
            api_key,
            settings.model.clone(),
            Duration::from_secs(settings.timeout_secs),
        ) {
            Ok(client) => {
                tracing::info!(
                    model = %settings.model,
                    "Using model classifier with heuristic fallback"
                );
                ClassifierBackend::Llm(LlmClassifier::new(
                    Arc::new(client),
                    settings.max_prompt_chars,
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model classifier unavailable, using heuristic rules");
                ClassifierBackend::Heuristic(HeuristicClassifier::new())
            }
        }
    }
}
