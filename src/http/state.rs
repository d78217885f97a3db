//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pipeline::{
    CatalogResolver, DetectionPipeline, FileClassifier, FixedFileClassifier, HeuristicCatalog,
    LightCurveClassifier, PositiveFractionClassifier, SyntheticPipeline,
};

/// Shared application state passed to all handlers.
///
/// Holds one trait object per pipeline capability so concrete backends
/// can be substituted without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (prefix, CORS allow-list)
    pub config: Arc<ServerConfig>,
    /// Catalog search backend for suggestions
    pub catalog: Arc<dyn CatalogResolver>,
    /// Fetch-and-detect pipeline backend
    pub detector: Arc<dyn DetectionPipeline>,
    /// Classifier for raw light-curve arrays
    pub classifier: Arc<dyn LightCurveClassifier>,
    /// Classifier for uploaded light-curve files
    pub file_classifier: Arc<dyn FileClassifier>,
}

impl AppState {
    /// Create application state with explicit backends.
    pub fn new(
        config: Arc<ServerConfig>,
        catalog: Arc<dyn CatalogResolver>,
        detector: Arc<dyn DetectionPipeline>,
        classifier: Arc<dyn LightCurveClassifier>,
        file_classifier: Arc<dyn FileClassifier>,
    ) -> Self {
        Self {
            config,
            catalog,
            detector,
            classifier,
            file_classifier,
        }
    }

    /// Create application state wired to the built-in placeholder
    /// backends.
    pub fn with_placeholders(config: ServerConfig) -> Self {
        Self::new(
            Arc::new(config),
            Arc::new(HeuristicCatalog),
            Arc::new(SyntheticPipeline),
            Arc::new(PositiveFractionClassifier),
            Arc::new(FixedFileClassifier),
        )
    }
}
