//! HTTP server module for the OramaX exoplanet API.
//!
//! This module provides an axum-based gateway exposing the detection and
//! classification capabilities as a REST API. Handlers validate input,
//! delegate to the injected pipeline collaborators, and shape JSON
//! responses; no detection logic lives here.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Pipeline Layer (pipeline/ capability traits)             │
//! │  - Catalog resolution                                     │
//! │  - Transit detection                                      │
//! │  - Light-curve classification                             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
