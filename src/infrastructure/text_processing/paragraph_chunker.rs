use async_trait::async_trait;

use super::text_sanitizer::split_paragraphs;
use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::config::DEFAULT_MAX_CHUNK_CHARS;
use crate::domain::{Chunk, DocumentId};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Packs whole paragraphs into chunks of at most `max_chars` characters.
///
/// A paragraph is never split; one longer than the budget becomes a chunk of
/// its own. Chunks keep document order and every non-blank paragraph lands in
/// exactly one chunk.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphChunker {
    max_chars: usize,
}

impl ParagraphChunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        chunk_paragraphs(text, self.max_chars)
    }
}

impl Default for ParagraphChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_CHARS)
    }
}

pub fn chunk_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    let separator_len = PARAGRAPH_SEPARATOR.chars().count();
    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut size = 0usize;

    for paragraph in split_paragraphs(text) {
        let len = paragraph.chars().count();
        let added = if buffer.is_empty() {
            len
        } else {
            len + separator_len
        };

        if !buffer.is_empty() && size + added > max_chars {
            chunks.push(buffer.join(PARAGRAPH_SEPARATOR));
            buffer.clear();
            size = 0;
            buffer.push(paragraph);
            size += len;
            continue;
        }

        buffer.push(paragraph);
        size += added;
    }

    if !buffer.is_empty() {
        chunks.push(buffer.join(PARAGRAPH_SEPARATOR));
    }

    chunks
}

#[async_trait]
impl TextSplitter for ParagraphChunker {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        Ok(self
            .chunk_text(text)
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| Chunk::new(chunk, document_id, index))
            .collect())
    }
}
