// Main entry point for API server

use anyhow::{Context, Result};
use server_core::{
    server::{build_app, build_engine, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,resource_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Labor-Rights Resource Portal API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load resources (fail-open: an unreadable collection serves empty results)
    let engine = build_engine(&config);
    tracing::info!(source = %engine.origin(), "Loading resources...");
    match engine.load().await {
        Ok(library) => tracing::info!(count = library.len(), "Resources ready"),
        Err(e) => tracing::warn!(error = %e, "Continuing without resources"),
    }

    // Build application
    let state = AppState::new(engine, config.default_page_size);
    let app = build_app(state, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Resources API: http://localhost:{}/api/resources", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
