//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression,
//! tracing), and creates the axum router ready for serving. Every
//! endpoint is nested under the configured path prefix.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Fixed origin allow-list; all methods and headers are permitted for
    // those origins.
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/suggest", get(handlers::suggest))
        .route("/fetch_detect", post(handlers::fetch_detect))
        .route("/predict", post(handlers::predict))
        .route("/predict-file", post(handlers::predict_file));

    let prefix = state.config.api_prefix.clone();

    Router::new()
        .nest(&prefix, api)
        // Uploaded light-curve files are buffered whole in memory.
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
