// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::RelayResponse;
use crate::services::completion::CompletionError;

/// Failures surfaced by the relay endpoint. The `Display` text is what the
/// caller sees; upstream details stay in the server log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("Failed to get response from AI")]
    Upstream,

    #[error("Invalid response from AI")]
    InvalidResponse,

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Upstream { .. } => AppError::Upstream,
            CompletionError::InvalidResponse(_) => AppError::InvalidResponse,
            CompletionError::Transport(_) => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(RelayResponse::failure(self.to_string()))).into_response()
    }
}
