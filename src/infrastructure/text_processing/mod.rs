pub mod paragraph_chunker;
pub mod pdf_adapter;
pub mod text_sanitizer;

pub use paragraph_chunker::{ParagraphChunker, chunk_paragraphs};
pub use pdf_adapter::PdfAdapter;
pub use text_sanitizer::{sanitize_extracted_text, split_paragraphs};
