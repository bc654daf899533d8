mod embedder_factory;
mod embedding_backend;
mod hash_embedder;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use embedding_backend::EmbeddingBackend;
pub use hash_embedder::{HASH_MODEL, HASH_PROVIDER, HashEmbedder, embed_text};
pub use openai_embedder::{OPENAI_PROVIDER, OpenAiEmbedder};
