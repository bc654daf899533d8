mod embeder;
mod openai_client;

pub use embeder::{
    EmbedderFactory, EmbedderFactoryError, EmbeddingBackend, HASH_MODEL, HASH_PROVIDER,
    HashEmbedder, OPENAI_PROVIDER, OpenAiEmbedder, embed_text,
};
pub use openai_client::OpenAiClient;
