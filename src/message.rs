// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRequest {
    pub message: String,
    pub context: String,
}

/// Body returned by `POST /api/chat`. Exactly one of the two fields is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Success { response: String },
    Failure { error: String },
}

impl RelayResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { response: text.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }
}
