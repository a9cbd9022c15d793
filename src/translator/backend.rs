//! Translation service backends
//!
//! The orchestrator only needs "prompt in, reply text out"; concrete
//! transports implement `TranslationBackend`. The bundled implementation
//! talks to an Ollama-compatible chat endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use super::error::TranslateError;

/// Default endpoint of a local Ollama server
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Request ceiling; model replies can take minutes on modest hardware
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// A service that turns an instruction prompt into reply text
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Submit `prompt` and return the raw reply text.
    async fn complete(&self, prompt: &str) -> Result<String, TranslateError>;

    /// Probe whether the service is reachable.
    async fn health_check(&self) -> bool {
        true
    }
}

/// Chat client for an Ollama-compatible server
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Build from the environment: `OLLAMA_BASE_URL` overrides the default
    /// local endpoint.
    pub fn from_env(model: impl Into<String>) -> Self {
        let base_url =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        Self::new(base_url, model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TranslationBackend for OllamaBackend {
    async fn complete(&self, prompt: &str) -> Result<String, TranslateError> {
        let request = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false,
            "options": {"temperature": 0.1},
        });

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslateError::Api { status, message });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidReply(format!("undecodable chat reply: {}", e)))?;
        Ok(reply.message.content)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

// Ollama chat API reply shape
#[derive(Debug, Deserialize)]
struct ChatReply {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
