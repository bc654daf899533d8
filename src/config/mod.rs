mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BillingSettings, ClassifierProvider, ClassifierSettings, DEFAULT_EMBEDDING_DIMENSION,
    DEFAULT_MAX_CHUNK_CHARS, DEFAULT_SIMILARITY_THRESHOLD, DatabaseSettings, EmbeddingProvider,
    EmbeddingsSettings, LoggingSettings, MatchingSettings, OpenAiSettings, Settings,
    StorageSettings,
};
