mod agents;
mod concierge;
mod config;
mod errors;
mod llm_client;
mod routes;
mod schema;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::concierge::Concierge;
use crate::config::Config;
use crate::llm_client::search::GoogleSearchGrounding;
use crate::llm_client::{GeminiClient, ModelTier};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Navigator v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (one instance, shared by every stage)
    let gemini = GeminiClient::new(config.gemini_api_key.clone(), &config.gemini_base_url)?;
    info!(
        "Gemini client initialized (reasoning: {}, fast: {})",
        ModelTier::Reasoning.model(),
        ModelTier::Fast.model()
    );

    let search = GoogleSearchGrounding::new(gemini.clone());
    info!(
        "Live search via google_search tool (on failure: {:?})",
        config.search_failure_policy
    );

    let concierge = Concierge::new(
        Arc::new(gemini),
        Arc::new(search),
        config.search_failure_policy,
    );

    let state = AppState {
        concierge: Arc::new(concierge),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the web frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
