//! Main Entrypoint for the Agent Relay Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Building the provider client and the relay that wraps it.
//! 3. Constructing the Axum router and applying middleware.
//! 4. Starting the web server and handling graceful shutdown.

use agent_relay_api::{config::Config, router::create_router, state::AppState};
use agent_relay_core::{AgentRelay, llm_client::OpenAICompatibleClient};
use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C; shutting down");
        return;
    }
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    if config.api_key.is_empty() {
        warn!("GROQ_API_KEY is not set; provider calls will fail until it is configured");
    }

    // --- 2. Initialize the relay ---
    let llm_client = OpenAICompatibleClient::with_credentials(
        &config.api_key,
        &config.provider_base_url,
        config.chat_model.clone(),
    );
    let relay = AgentRelay::new(Arc::new(llm_client), config.prompts);

    let app_state = Arc::new(AppState {
        relay: Arc::new(relay),
        config: Arc::new(config.clone()),
    });

    // --- 3. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // --- 4. Start Server ---
    info!(
        model = %config.chat_model,
        provider = %config.provider_base_url,
        static_dir = %config.static_dir.display(),
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
