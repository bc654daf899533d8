mod audit_repository;
mod checklist_repository;
mod document_classifier;
mod embedder;
mod file_loader;
mod llm_client;
mod repository_error;
mod settings_repository;
mod text_splitter;
mod upload_store;

pub use audit_repository::AuditRepository;
pub use checklist_repository::ChecklistRepository;
pub use document_classifier::DocumentClassifier;
pub use embedder::{Embedder, EmbedderError, EmbedderInfo};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use settings_repository::SettingsRepository;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use upload_store::{UploadStore, UploadStoreError};
