//! Capability interfaces for the detection and classification backends.
//!
//! The HTTP gateway never talks to a concrete pipeline directly. Each
//! backend concern is modeled as a trait object injected through
//! [`crate::http::AppState`], so the real catalog search, transit
//! detection, and classifier services can be swapped in without touching
//! the HTTP contract. The implementations shipped here are deterministic
//! placeholders that reproduce the behavior the frontend currently
//! depends on.
//!
//! # Thread Safety
//!
//! All traits require `Send + Sync`: the gateway invokes them
//! concurrently, one call per in-flight request, and holds no lock around
//! the delegation. Any resource pooling (model instances, catalog
//! connections) is the implementation's own concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod catalog;
pub mod classify;
pub mod detect;

pub use catalog::HeuristicCatalog;
pub use classify::{FixedFileClassifier, PositiveFractionClassifier};
pub use detect::SyntheticPipeline;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type for pipeline collaborators.
///
/// The placeholder implementations never fail, but real backends will:
/// catalog queries time out, classifier processes crash. The gateway maps
/// every variant to a server-error response at the HTTP boundary instead
/// of letting the raw failure propagate.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Catalog lookup failed (query error, archive unreachable).
    #[error("catalog error: {0}")]
    Catalog(String),
    /// Detection pipeline failed (download, periodogram, ranking).
    #[error("detection error: {0}")]
    Detection(String),
    /// Classifier failed (model load, inference, file parsing).
    #[error("classifier error: {0}")]
    Classifier(String),
}

/// A single catalog suggestion returned to the search box.
///
/// Both fields are non-empty whenever an item is produced; `id` is a
/// catalog-style designation such as `TIC 268125229`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: String,
    pub label: String,
}

/// A hypothesized periodic transit signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Orbital period in days, > 0
    pub period: f64,
    /// Transit duration in days, > 0
    pub duration: f64,
    /// Fractional flux drop, 0–1
    pub depth: f64,
    /// Detection statistic, unbounded
    pub power: f64,
    /// Classifier confidence in [0, 1]
    pub probability: f64,
}

/// Preprocessing options forwarded to the detection pipeline.
///
/// Known options get typed fields; anything else rides along in `extra`
/// (flattened on the wire) and is echoed back to the client untouched, so
/// clients can audit exactly which configuration produced a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Detrending method name (e.g. "spline", "biweight")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detrend: Option<String>,
    /// Outlier rejection threshold in standard deviations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma_clip: Option<f64>,
    /// Whether to normalize the flux to unit median
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,
    /// Forward-compatible escape hatch for options this gateway does not
    /// know about yet. Never validated, echoed verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Resolves free-text queries against a target catalog.
///
/// A real implementation queries an astronomical archive (MAST or
/// similar) and returns identifiers ranked by match confidence, best
/// match first. The ranking order is part of the contract.
#[async_trait]
pub trait CatalogResolver: Send + Sync {
    /// Suggest catalog identifiers for a free-text query.
    ///
    /// # Arguments
    /// * `query` - Free-text input, may be empty or pathological
    /// * `domain` - Catalog namespace scoping the search (e.g. "TESS")
    ///
    /// # Returns
    /// * `Ok(Vec<SuggestionItem>)` - Ranked matches, possibly empty
    /// * `Err(PipelineError)` - If the catalog backend fails
    async fn suggest(&self, query: &str, domain: &str) -> PipelineResult<Vec<SuggestionItem>>;
}

/// Fetches photometry for a target and searches it for transit signals.
///
/// A real implementation downloads the light curve, applies the requested
/// preprocessing, runs a periodogram search (BLS or similar), and returns
/// candidates ordered by descending detection power.
#[async_trait]
pub trait DetectionPipeline: Send + Sync {
    /// Run detection for a target.
    ///
    /// # Arguments
    /// * `target` - Catalog designation of the object to analyze
    /// * `preprocess` - Preprocessing options, applied before the search
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - Candidates ordered by descending power
    /// * `Err(PipelineError)` - If fetch or detection fails
    async fn fetch_and_detect(
        &self,
        target: &str,
        preprocess: &PreprocessConfig,
    ) -> PipelineResult<Vec<Candidate>>;
}

/// Maps a raw light curve to a planet probability.
#[async_trait]
pub trait LightCurveClassifier: Send + Sync {
    /// Classify a light curve.
    ///
    /// Samples arrive as raw JSON values: non-numeric entries are
    /// tolerated and must be ignored by the implementation, not treated
    /// as an error. The caller guarantees `samples` is non-empty.
    ///
    /// # Returns
    /// * `Ok(f64)` - Planet probability in [0, 1]
    /// * `Err(PipelineError)` - If inference fails
    async fn classify(&self, samples: &[Value]) -> PipelineResult<f64>;
}

/// Maps an uploaded light-curve file to a planet probability.
#[async_trait]
pub trait FileClassifier: Send + Sync {
    /// Classify a packaged light-curve file (e.g. a FITS product).
    ///
    /// # Arguments
    /// * `filename` - Client-supplied name, useful for format sniffing
    /// * `content` - Full file content, already buffered
    ///
    /// # Returns
    /// * `Ok(f64)` - Planet probability in [0, 1]
    /// * `Err(PipelineError)` - If parsing or inference fails
    async fn classify_file(&self, filename: &str, content: &[u8]) -> PipelineResult<f64>;
}
