//! Configuration management

use crate::error::{Result, StoreGeniusError};
use crate::search::Metric;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog and embedding file locations
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// LLM service configuration
    #[serde(default)]
    pub llm_service: LLMServiceConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where the catalog lives and how its embeddings were produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog CSV (product_name, short_description, final_price)
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// Embedding matrix aligned row-for-row with the catalog
    #[serde(default = "default_embeddings_path")]
    pub embeddings: PathBuf,

    /// Embedding width, required for raw `.f32`/`.bin` files
    #[serde(default)]
    pub dimensions: Option<usize>,

    /// Similarity convention the embedding file was produced under
    #[serde(default)]
    pub metric: Metric,

    /// Instruction prepended to every query text before embedding
    #[serde(default = "default_query_prefix")]
    pub query_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            embeddings: default_embeddings_path(),
            dimensions: None,
            metric: Metric::default(),
            query_prefix: default_query_prefix(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    std::env::var("STOREGENIUS_CATALOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("df_with_embeddings.csv"))
}

fn default_embeddings_path() -> PathBuf {
    std::env::var("STOREGENIUS_EMBEDDINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("product_embeddings.csv"))
}

fn default_query_prefix() -> String {
    "Query: ".to_string()
}

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of the generation service (Ollama)
    pub url: String,

    /// Model name used for keyword generation
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Base URL for embeddings service (can be different from LLM URL)
    #[serde(default)]
    pub embedding_url: Option<String>,

    /// Model name for embeddings
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl LLMServiceConfig {
    /// Get the embeddings URL (falls back to main URL if not specified)
    pub fn embeddings_url(&self) -> &str {
        self.embedding_url.as_deref().unwrap_or(&self.url)
    }
}

impl Default for LLMServiceConfig {
    fn default() -> Self {
        Self {
            url: default_llm_url(),
            model: default_llm_model(),
            embedding_url: std::env::var("STOREGENIUS_EMBEDDING_URL").ok(),
            embedding_model: default_embedding_model(),
            api_key: std::env::var("STOREGENIUS_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_llm_url() -> String {
    std::env::var("OLLAMA_HOST").unwrap_or_else(|_| "http://localhost:11434".to_string())
}

fn default_llm_model() -> String {
    std::env::var("STOREGENIUS_LLM_MODEL").unwrap_or_else(|_| "storeGeniusLLM".to_string())
}

fn default_embedding_model() -> String {
    std::env::var("STOREGENIUS_EMBEDDING_MODEL")
        .unwrap_or_else(|_| "BAAI/bge-base-en".to_string())
}

fn default_timeout() -> u64 {
    120
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results per prompt, or per keyword in trend mode
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    5
}

impl Config {
    /// Load config from `$STOREGENIUS_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        let path = std::env::var("STOREGENIUS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            config
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Reject settings that can never work
    pub fn validate(&self) -> Result<()> {
        if self.llm_service.url.trim().is_empty() {
            return Err(StoreGeniusError::Config(
                "llm_service.url must not be empty".to_string(),
            ));
        }
        if self.llm_service.timeout_secs == 0 {
            return Err(StoreGeniusError::Config(
                "llm_service.timeout_secs must be positive".to_string(),
            ));
        }
        if crate::catalog::is_raw_embedding_file(&self.catalog.embeddings)
            && self.catalog.dimensions.is_none()
        {
            return Err(StoreGeniusError::Config(format!(
                "catalog.dimensions is required for raw embedding file {}",
                self.catalog.embeddings.display()
            )));
        }
        Ok(())
    }
}
