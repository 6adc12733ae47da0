//! Proverbs agent server entry point.
//!
//! Builds the agent graph over the OpenAI-compatible provider, mounts
//! it at `/` behind the AG-UI streaming endpoint, and runs the axum
//! server with graceful shutdown on ctrl-c.

use agent::{ProverbsAgent, ToolRegistry, build_graph};
use anyhow::Result;
use llm::OpenAiCompatible;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = OpenAiCompatible::new(reqwest::Client::new());
    let registry = Arc::new(ToolRegistry::builtin());
    let graph = build_graph(model, registry)?;
    let agent = ProverbsAgent::new(graph);
    tracing::info!("agent '{}' mounted at /", ProverbsAgent::NAME);

    let app = agui::router(agent);

    let address = format!("0.0.0.0:{}", listen_port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Listen port from `PORT`, defaulting to 8124. A value that does not
/// parse falls back to the default.
fn listen_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8124)
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {error}");
        return;
    }
    tracing::info!("received shutdown signal");
}
