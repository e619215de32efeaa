//! Capability seam between the relay and whichever model provider answers it.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Provider answered 2xx but the payload had no text where expected.
    #[error("unexpected provider payload: {0}")]
    InvalidResponse(serde_json::Value),

    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait Completer: Send + Sync {
    /// Human-readable provider name for logging.
    fn name(&self) -> &'static str;

    /// Run a single-turn completion and return the generated text untouched.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
