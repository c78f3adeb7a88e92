//! HTTP client for the Ollama generation endpoint

use super::LLMClient;
use crate::config::LLMServiceConfig;
use crate::error::{Result, StoreGeniusError};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Blocking client for `POST {url}/api/generate`
pub struct OllamaClient {
    http_client: reqwest::blocking::Client,
    config: LLMServiceConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

impl OllamaClient {
    /// Create new client from configuration
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

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.url.trim_end_matches('/'))
    }
}

impl LLMClient for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();
        tracing::info!("Querying {} for product keywords", self.config.model);

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let mut req = self.http_client.post(self.generate_url()).json(&request);
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(StoreGeniusError::ExternalError(format!(
                "LLM service error (HTTP {}): {}",
                status, body
            )));
        }

        let body: GenerateResponse = serde_json::from_str(&response.text()?)?;
        let text = body.response.ok_or_else(|| {
            StoreGeniusError::Llm("response field missing from generate reply".to_string())
        })?;

        tracing::debug!(
            "LLM replied with {} chars in {}ms",
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
