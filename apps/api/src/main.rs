mod config;
mod errors;
mod feeds;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feeds::fetcher::HttpFeedFetcher;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BidGenius API v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_dev_session_secret() {
        warn!("SESSION_SECRET not set; using the insecure development default");
    }

    // Initialize LLM client (optional: AI endpoints answer 400 without a key)
    let llm = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(key.clone())) as Arc<dyn TextGenerator>)
        }
        None => {
            warn!("GEMINI_API_KEY not set; generation endpoints are disabled");
            None
        }
    };

    info!("Serving static jobs from {}", config.jobs_file);

    let state = AppState {
        config: config.clone(),
        llm,
        feeds: Arc::new(HttpFeedFetcher::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
