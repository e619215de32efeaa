// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;
use crate::services::relay::Relay;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self { relay }
    }

    pub fn from_config(config: &Config) -> Self {
        let relay = match &config.api_key {
            Some(key) => Relay::new(Arc::new(GeminiClient::new(config.api_url.clone(), key.clone()))),
            None => Relay::unconfigured(),
        };
        Self::new(relay)
    }
}
