//! Solea Server - Storefront and admin API.
//!
//! This binary serves the public storefront API and the admin API from one
//! process on one port.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Flat JSON files as the persistence layer (`products.json`,
//!   `orders.json`, `settings.json` under the configured data dir)
//! - Stateless admin auth: Basic credentials checked against the settings
//!   store on every admin request
//!
//! Seed the data directory first: `cargo run -p solea-cli -- seed`

#![cfg_attr(not(test), forbid(unsafe_code))]

use solea_server::config::ServerConfig;
use solea_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "solea_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env().expect("Failed to load configuration");
    tracing::info!(data_dir = %config.data_dir.display(), "Using data directory");

    let state = AppState::new(config.clone());
    let app = solea_server::app(state);

    let addr = config.socket_addr();
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
