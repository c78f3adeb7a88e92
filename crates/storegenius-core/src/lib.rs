//! StoreGenius Core Library
//!
//! Retrieval of catalog items for shopper prompts and trend phrases.
//!
//! # Features
//! - Exact nearest-neighbor search over precomputed catalog embeddings
//! - Price constraint extraction from free text
//! - LLM-driven keyword expansion for trend phrases
//! - Blocking HTTP clients for Ollama generation and embeddings

pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod search;

pub use catalog::{Catalog, CatalogItem};
pub use config::{CatalogConfig, Config, LLMServiceConfig, SearchConfig};
pub use error::{Error, Result, StoreGeniusError};
pub use llm::{extract_keywords, Embedder, HttpEmbedder, LLMClient, OllamaClient};
pub use search::{
    parse_price_range, search_by_prompt, suggest_for_trend, KeywordMatches, Metric, PriceRange,
    PromptSearch, RetrievalContext, SearchOptions, SearchResult, TrendSuggestions, VectorIndex,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "storegenius";
