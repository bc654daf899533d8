use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::heuristic_classifier::HeuristicClassifier;
use crate::application::ports::{DocumentClassifier, LlmClient, LlmClientError};
use crate::domain::{
    DocType, DocumentClassification, Industry, Jurisdiction, apply_industry_bias,
};
use crate::infrastructure::observability::sanitize_prompt;

pub const LLM_PROVIDER: &str = "openai";
const DEFAULT_REASONING: &str = "OpenAI classification";

const SYSTEM_PROMPT: &str = "You classify compliance documents. Respond with a single JSON object \
    with string keys doc_type, jurisdiction and reasoning, and nothing else.";

#[derive(Debug, Deserialize)]
struct LlmClassification {
    #[serde(default)]
    doc_type: Option<String>,
    #[serde(default)]
    jurisdiction: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Model-backed classifier. Every request or parse failure falls back to the
/// heuristic rules, so `classify` always produces a result.
pub struct LlmClassifier {
    client: Arc<dyn LlmClient>,
    heuristic: HeuristicClassifier,
    max_prompt_chars: usize,
}

impl LlmClassifier {
    pub fn new(client: Arc<dyn LlmClient>, max_prompt_chars: usize) -> Self {
        Self {
            client,
            heuristic: HeuristicClassifier::new(),
            max_prompt_chars,
        }
    }

    fn build_prompt(&self, text: &str, industry: Option<&Industry>) -> String {
        let doc_types = DocType::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let excerpt: String = text.chars().take(self.max_prompt_chars).collect();
        let industry = industry.map(Industry::as_str).unwrap_or("general");

        format!(
            "Classify the document text into a JSON object with keys: \
             doc_type ({doc_types}), \
             jurisdiction (us-ca, us-hipaa, eu, general), \
             reasoning (short string).\n\n\
             Industry context: {industry}\n\n\
             Text:\n{excerpt}"
        )
    }

    async fn request(
        &self,
        text: &str,
        industry: Option<&Industry>,
    ) -> Result<DocumentClassification, LlmClientError> {
        let prompt = self.build_prompt(text, industry);
        let raw = self.client.complete_json(SYSTEM_PROMPT, &prompt).await?;

        let parsed: LlmClassification = serde_json::from_str(raw.trim()).map_err(|e| {
            LlmClientError::InvalidResponse(format!(
                "{e}: {}",
                sanitize_prompt(&raw)
            ))
        })?;

        let doc_type = DocType::normalize(parsed.doc_type.as_deref().unwrap_or("general"));
        let jurisdiction =
            Jurisdiction::normalize(parsed.jurisdiction.as_deref().unwrap_or("general"));
        let (jurisdiction, adjustment) = apply_industry_bias(jurisdiction, text, industry);

        let mut reasoning = parsed
            .reasoning
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REASONING.to_string());
        if let Some(note) = adjustment {
            reasoning = format!("{reasoning}; {note}");
        }

        Ok(DocumentClassification::new(doc_type, jurisdiction, reasoning))
    }
}

#[async_trait]
impl DocumentClassifier for LlmClassifier {
    #[tracing::instrument(skip(self, text, industry), fields(text_len = text.len()))]
    async fn classify(&self, text: &str, industry: Option<&Industry>) -> DocumentClassification {
        match self.request(text, industry).await {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    text_preview = %sanitize_prompt(text),
                    "Model classification failed, using heuristic rules"
                );
                self.heuristic.classify_text(text, industry)
            }
        }
    }

    fn provider(&self) -> &'static str {
        LLM_PROVIDER
    }
}
