use async_trait::async_trait;

use crate::domain::{DocumentClassification, Industry};

/// Infers doc-type and jurisdiction from raw document text.
///
/// Classification never fails: implementations backed by an external
/// provider fall back to the heuristic rules on any error.
#[async_trait]
pub trait DocumentClassifier: Send + Sync {
    async fn classify(&self, text: &str, industry: Option<&Industry>) -> DocumentClassification;

    fn provider(&self) -> &'static str;
}
