// src/services/relay_client.rs
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::relay::Relay;
use crate::message::{RelayRequest, RelayResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// How the presenter reaches the relay endpoint.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn send(&self, request: &RelayRequest) -> Result<RelayResponse, ClientError>;
}

/// Talks to `POST /api/chat` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    http: reqwest::Client,
    url: String,
}

impl HttpRelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), url: url.into() }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, request: &RelayRequest) -> Result<RelayResponse, ClientError> {
        let response = self.http.post(&self.url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        Ok(response.json::<RelayBody>().await?.into())
    }
}

/// Lenient view of the relay body: foreign relays may send neither field.
#[derive(Debug, Default, Deserialize)]
struct RelayBody {
    response: Option<String>,
    error: Option<String>,
}

impl From<RelayBody> for RelayResponse {
    fn from(body: RelayBody) -> Self {
        match body.error.filter(|e| !e.is_empty()) {
            Some(error) => RelayResponse::failure(error),
            // A body without text reads as an empty reply.
            None => RelayResponse::success(body.response.unwrap_or_default()),
        }
    }
}

// In-process use skips HTTP but keeps the same `{response}` / `{error}` shape.
#[async_trait]
impl RelayClient for Relay {
    async fn send(&self, request: &RelayRequest) -> Result<RelayResponse, ClientError> {
        Ok(match self.handle(request).await {
            Ok(text) => RelayResponse::success(text),
            Err(err) => RelayResponse::failure(err.to_string()),
        })
    }
}
