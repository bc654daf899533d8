use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use policy_audit::application::ports::{DocumentClassifier, LlmClient, LlmClientError};
use policy_audit::domain::{DocType, INDUSTRY_ADJUSTMENT_NOTE, Industry, Jurisdiction};
use policy_audit::infrastructure::classification::{
    HeuristicClassifier, LLM_PROVIDER, LlmClassifier,
};

struct CannedLlmClient {
    response: Result<String, ()>,
    prompts: Mutex<Vec<String>>,
}

impl CannedLlmClient {
    fn replying(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmClient for CannedLlmClient {
    async fn complete_json(&self, _system: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .map_err(|_| LlmClientError::ApiRequestFailed("connection refused".to_string()))
    }
}

#[tokio::test]
async fn given_valid_json_when_classifying_then_labels_are_normalized() {
    let client = Arc::new(CannedLlmClient::replying(
        r#"{"doc_type": "Privacy Notice", "jurisdiction": "EU", "reasoning": "Mentions GDPR"}"#,
    ));
    let classifier = LlmClassifier::new(client, 4000);

    let result = classifier.classify("Some text", None).await;

    assert_eq!(result.doc_type, DocType::PrivacyPolicy);
    assert_eq!(result.jurisdiction, Jurisdiction::Eu);
    assert_eq!(result.reasoning, "Mentions GDPR");
}

#[tokio::test]
async fn given_unknown_labels_when_classifying_then_both_become_general() {
    let client = Arc::new(CannedLlmClient::replying(
        r#"{"doc_type": "newsletter", "jurisdiction": "mars", "reasoning": ""}"#,
    ));
    let classifier = LlmClassifier::new(client, 4000);

    let result = classifier.classify("Some text", None).await;

    assert_eq!(result.doc_type, DocType::General);
    assert_eq!(result.jurisdiction, Jurisdiction::General);
    assert_eq!(result.reasoning, "OpenAI classification");
}

#[tokio::test]
async fn given_hipaa_answer_for_retail_tenant_when_classifying_then_bias_note_is_appended() {
    let client = Arc::new(CannedLlmClient::replying(
        r#"{"doc_type": "policy", "jurisdiction": "us-hipaa", "reasoning": "HIPAA mentioned"}"#,
    ));
    let classifier = LlmClassifier::new(client, 4000);
    let retail = Industry::new("retail");

    let result = classifier
        .classify("We follow HIPAA where it applies.", Some(&retail))
        .await;

    assert_eq!(result.jurisdiction, Jurisdiction::General);
    assert_eq!(
        result.reasoning,
        format!("HIPAA mentioned; {INDUSTRY_ADJUSTMENT_NOTE}")
    );
}

#[tokio::test]
async fn given_failing_client_when_classifying_then_matches_heuristic_result() {
    let text = "Incident response plan for ransomware under HIPAA.";
    let classifier = LlmClassifier::new(Arc::new(CannedLlmClient::failing()), 4000);

    let result = classifier.classify(text, None).await;

    assert_eq!(result, HeuristicClassifier::new().classify_text(text, None));
    assert_eq!(result.doc_type, DocType::IncidentResponse);
}

#[tokio::test]
async fn given_malformed_json_when_classifying_then_falls_back_to_heuristics() {
    let text = "Employee handbook";
    let classifier = LlmClassifier::new(
        Arc::new(CannedLlmClient::replying("definitely not json")),
        4000,
    );

    let result = classifier.classify(text, None).await;

    assert_eq!(result.doc_type, DocType::EmployeeHandbook);
}

#[tokio::test]
async fn given_long_text_when_classifying_then_prompt_contains_only_leading_excerpt() {
    let client = Arc::new(CannedLlmClient::replying(
        r#"{"doc_type": "policy", "jurisdiction": "general", "reasoning": "ok"}"#,
    ));
    let classifier = LlmClassifier::new(client.clone(), 10);
    let retail = Industry::new("retail");

    classifier
        .classify("abcdefghijKLMNOPQRST", Some(&retail))
        .await;

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("abcdefghij"));
    assert!(!prompts[0].contains("KLMNOPQRST"));
    assert!(prompts[0].contains("Industry context: retail"));
    assert!(prompts[0].contains("formulary"));
}

#[test]
fn given_llm_classifier_when_reading_provider_then_reports_openai() {
    let classifier = LlmClassifier::new(Arc::new(CannedLlmClient::failing()), 4000);

    assert_eq!(classifier.provider(), LLM_PROVIDER);
}
