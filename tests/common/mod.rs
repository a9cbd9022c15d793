//! Shared test utilities for integration tests

use async_trait::async_trait;
use semsql::{TranslateError, TranslationBackend};

/// Backend that replies with a fixed body, whatever the prompt
pub struct ScriptedBackend {
    reply: String,
}

impl ScriptedBackend {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl TranslationBackend for ScriptedBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, TranslateError> {
        Ok(self.reply.clone())
    }
}

/// Backend that always fails with a transport error
pub struct UnreachableBackend;

#[async_trait]
impl TranslationBackend for UnreachableBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Transport("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
