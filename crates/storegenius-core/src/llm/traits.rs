//! Collaborator trait definitions
//!
//! Both traits are blocking: each call returns only once the external
//! service has answered or failed.

use crate::error::Result;

/// Embedding generation trait
pub trait Embedder: Send + Sync {
    /// Generate embedding for single text
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for batch of texts, in input order
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Free-form text generation trait
pub trait LLMClient: Send + Sync {
    /// Generate a complete (non-streamed) response for the prompt
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get model name
    fn model_name(&self) -> &str;
}
