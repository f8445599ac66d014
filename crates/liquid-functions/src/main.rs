//! Liquid Functions - Main entry point
//!
//! Starts the HTTP host with every built-in function registered.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liquid_functions::config::AppConfig;
use liquid_functions::functions::FunctionRegistry;
use liquid_functions::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,liquid_functions=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Liquid Functions host");

    // Load configuration
    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let functions = FunctionRegistry::with_defaults();
    let listen_addr = config.listen_addr();
    let function_route = config.function_route();
    let state = Arc::new(AppState::new(config, functions));

    for name in state.functions.names() {
        tracing::info!("Function registered: {} -> {}", name, function_route.replace("{function}", name));
    }

    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    tracing::info!("Listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Liquid Functions host stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
