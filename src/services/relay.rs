// src/services/relay.rs
use std::sync::Arc;

use tracing::{debug, warn};

use super::completion::Completer;
use crate::error::AppError;
use crate::message::RelayRequest;

/// Server side of the chat widget: turns one user question into one
/// completion request.
#[derive(Clone, Default)]
pub struct Relay {
    completer: Option<Arc<dyn Completer>>,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("completer", &self.completer.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl Relay {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer: Some(completer) }
    }

    /// A relay with no credential; every call reports `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self { completer: None }
    }

    pub fn is_configured(&self) -> bool {
        self.completer.is_some()
    }

    pub async fn handle(&self, request: &RelayRequest) -> Result<String, AppError> {
        let Some(completer) = &self.completer else {
            warn!("chat request rejected: API key not configured");
            return Err(AppError::NotConfigured);
        };

        let prompt = build_prompt(&request.context, &request.message);
        debug!(provider = completer.name(), prompt_len = prompt.len(), "forwarding chat request");

        Ok(completer.complete(&prompt).await?)
    }
}

pub fn build_prompt(context: &str, message: &str) -> String {
    format!("{context}\n\nUser question: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_puts_context_before_question() {
        assert_eq!(build_prompt("bio", "hi?"), "bio\n\nUser question: hi?");
    }

    #[tokio::test]
    async fn unconfigured_relay_refuses() {
        let relay = Relay::unconfigured();
        let req = RelayRequest { message: "m".into(), context: "c".into() };
        assert_eq!(relay.handle(&req).await, Err(AppError::NotConfigured));
    }
}
