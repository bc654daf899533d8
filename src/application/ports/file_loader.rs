use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Returns the document's text with paragraphs separated by blank lines.
    /// A readable document without text yields an empty string.
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("document is encrypted: {0}")]
    Encrypted(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
