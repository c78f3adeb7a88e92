//! LLM integration
//!
//! Provides traits and implementations for:
//! - Keyword generation via an external Ollama service
//! - Embedding generation via external services (Ollama, vLLM, OpenAI, etc.)
//! - Keyword extraction from free-form model output

mod client;
mod http_embedder;
mod keywords;
mod traits;

pub use client::OllamaClient;
pub use http_embedder::HttpEmbedder;
pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use traits::*;
