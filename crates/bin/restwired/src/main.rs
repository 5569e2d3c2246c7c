//! # restwired — restwire daemon
//!
//! Composition root that wires resource handlers into the dispatch layer
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize tracing with an env-filter directive
//! - Construct one in-memory resource handler per configured name
//! - Build the axum router: health probe, registered resources, request tracing
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the only crate that depends on all other crates. It is wiring
//! only; no dispatch or storage logic belongs here.

mod config;

use axum::Router;
use axum::routing::get;
use restwire_axum::register::register_resource_handler;
use restwire_memory::MemoryResourceHandler;
use tower_http::trace::TraceLayer;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    let app = build_router(&config);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "restwired listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Assemble the router: health probe plus one memory-backed collection per
/// configured resource name. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
fn build_router(config: &Config) -> Router {
    let mut app = Router::new().route("/health", get(health_check));
    for name in &config.resources.names {
        app = register_resource_handler(app, MemoryResourceHandler::new(name.as_str()));
    }
    app.layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
