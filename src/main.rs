use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_chat::config::{Config, DEFAULT_LOG_FILTER};
use portfolio_chat::{routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let (filter, bad_filter) = match config.env_filter() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Some(err) = bad_filter {
        warn!(filter = %config.log_filter, error = %err, "invalid log filter, using {DEFAULT_LOG_FILTER}");
    }

    let state = Arc::new(AppState::from_config(&config));
    if !state.relay.is_configured() {
        warn!("GEMINI_API_KEY is not set; /api/chat will report it on every request");
    }

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, static_dir = %config.static_dir, "portfolio chat relay listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
