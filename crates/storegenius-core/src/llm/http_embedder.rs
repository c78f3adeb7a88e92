//! HTTP-based embedder using an OpenAI-compatible embeddings endpoint

use super::Embedder;
use crate::config::LLMServiceConfig;
use crate::error::{Result, StoreGeniusError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Embedder that calls `POST {embedding_url}/v1/embeddings` (Ollama, vLLM, OpenAI, etc.)
pub struct HttpEmbedder {
    http_client: reqwest::blocking::Client,
    config: LLMServiceConfig,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    /// Create from configuration
    pub fn new(config: LLMServiceConfig) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(StoreGeniusError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(LLMServiceConfig::default())
    }

    fn embeddings_endpoint(&self) -> String {
        format!(
            "{}/v1/embeddings",
            self.config.embeddings_url().trim_end_matches('/')
        )
    }
}

impl Embedder for HttpEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.embed_batch(&[text.to_string()])?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| StoreGeniusError::Embedding("No embedding returned".to_string()))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbedRequest {
            model: &self.config.embedding_model,
            input: texts,
        };

        let mut req = self.http_client.post(self.embeddings_endpoint()).json(&request);
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(StoreGeniusError::ExternalError(format!(
                "Embedding service error (HTTP {}): {}",
                status, body
            )));
        }

        let embed_response: EmbedResponse = serde_json::from_str(&response.text()?)?;
        if embed_response.data.len() != texts.len() {
            return Err(StoreGeniusError::Embedding(format!(
                "requested {} embeddings, service returned {}",
                texts.len(),
                embed_response.data.len()
            )));
        }

        tracing::debug!("Embedded batch of {} texts", texts.len());
        Ok(embed_response
            .data
            .into_iter()
            .map(|d| d.embedding)
            .collect())
    }

    fn model_name(&self) -> &str {
        &self.config.embedding_model
    }
}
