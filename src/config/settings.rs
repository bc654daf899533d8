use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.45;
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1500;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub embeddings: EmbeddingsSettings,
    pub classifier: ClassifierSettings,
    pub openai: OpenAiSettings,
    pub matching: MatchingSettings,
    pub storage: StorageSettings,
    pub billing: BillingSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) under `APP_*` environment
    /// variables, e.g. `APP_EMBEDDINGS__PROVIDER=openai`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    #[default]
    Hash,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingsSettings {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub dimension: usize,
    pub timeout_secs: u64,
}

impl Default for EmbeddingsSettings {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::Hash,
            model: "text-embedding-3-small".to_string(),
            dimension: DEFAULT_EMBEDDING_DIMENSION,
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierProvider {
    #[default]
    Heuristic,
    #[serde(rename = "openai")]
    OpenAi,
}

impl ClassifierProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierProvider::Heuristic => "heuristic",
            ClassifierProvider::OpenAi => "openai",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub provider: ClassifierProvider,
    pub model: String,
    pub timeout_secs: u64,
    pub max_prompt_chars: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            provider: ClassifierProvider::Heuristic,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 20,
            max_prompt_chars: 4000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    pub default_threshold: f32,
    pub max_chunk_chars: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub upload_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_path: "storage/policy_audits".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BillingSettings {
    pub scan_unit_cost: f64,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            scan_unit_cost: 4.50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}
