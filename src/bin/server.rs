//! OramaX API Server Binary
//!
//! Main entry point for the exoplanet API gateway. It wires the
//! placeholder pipeline backends into the application state, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin oramax-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `API_PREFIX`: Route prefix (default: /exoplanet)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS allow-list
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oramax_api::config::ServerConfig;
use oramax_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting OramaX exoplanet API server");

    let config = ServerConfig::from_env();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let prefix = config.api_prefix.clone();

    // Placeholder backends until the real pipeline services are wired in
    let state = AppState::with_placeholders(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}{}/health", addr, prefix);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
