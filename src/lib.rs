//! # OramaX Exoplanet API
//!
//! HTTP gateway in front of the OramaX exoplanet-detection pipeline.
//!
//! The service accepts target identifiers or raw light-curve data and
//! returns candidate transit signals or classification probabilities.
//! The stable part is the API contract: request validation, response
//! shaping, and the capability seams where the real catalog search,
//! transit detection, and classifier plug in. The backends shipped here
//! are deterministic placeholders.
//!
//! ## Architecture
//!
//! - [`config`]: server configuration from environment variables
//! - [`pipeline`]: capability traits for the detection/classification
//!   backends, plus their placeholder implementations
//! - [`http`]: axum-based HTTP server, handlers, and DTOs
//!
//! Every request is stateless: entities are built per request and
//! discarded once the response is serialized, so identical requests
//! produce identical responses.

pub mod config;
pub mod http;
pub mod pipeline;
