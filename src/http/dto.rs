//! Data Transfer Objects for the HTTP API.
//!
//! Request/response payloads for the gateway endpoints. The pipeline
//! domain types (suggestions, candidates, preprocessing options) already
//! derive Serialize/Deserialize and are re-exported here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::pipeline::{Candidate, PreprocessConfig, SuggestionItem};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Liveness flag, always true while the process serves requests
    pub ok: bool,
}

/// Query parameters for the suggest endpoint.
///
/// Both parameters are optional on the wire: a missing `q` behaves like
/// an empty query instead of a client error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuggestQuery {
    /// Free-text query
    #[serde(default)]
    pub q: String,
    /// Catalog namespace scoping the search
    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_domain() -> String {
    "TESS".to_string()
}

/// Suggest response: ranked items plus the domain echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Suggestions, best match first
    pub items: Vec<SuggestionItem>,
    /// Domain the search was scoped to
    pub domain: String,
}

/// Request body for the fetch-and-detect endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectRequest {
    /// Target designation; a fixed default is assumed when absent
    #[serde(default)]
    pub target: Option<String>,
    /// Preprocessing options, echoed back in the response
    #[serde(default)]
    pub preprocess: PreprocessConfig,
}

/// Fetch-and-detect response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    /// Resolved target the detection ran against
    pub target: String,
    /// Candidates ordered by descending detection power
    pub candidates: Vec<Candidate>,
    /// Preprocessing options exactly as the client sent them
    pub preprocess: PreprocessConfig,
}

/// Request body for the predict endpoint.
///
/// `lightcurve` is deliberately loose: a wrong-typed value must reach the
/// handler's own validation (one fixed 400 message) rather than die in a
/// framework deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictRequest {
    #[serde(default)]
    pub lightcurve: Option<Value>,
}

/// Predict response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Planet probability in [0, 1]
    pub planet_prob: f64,
    /// Total sample count, non-numeric entries included
    pub n: usize,
}

/// Predict-from-file response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictFileResponse {
    /// Planet probability in [0, 1]
    pub planet_prob: f64,
    /// Uploaded payload size in bytes
    pub size: usize,
    /// Client-supplied filename
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suggest_query_defaults() {
        let query: SuggestQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.q, "");
        assert_eq!(query.domain, "TESS");
    }

    #[test]
    fn detect_request_accepts_empty_object() {
        let request: DetectRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.target.is_none());
        assert_eq!(request.preprocess, PreprocessConfig::default());
    }

    #[test]
    fn preprocess_echoes_unknown_keys_verbatim() {
        let input = json!({"detrend": "spline", "window": 42, "flags": ["a", "b"]});
        let config: PreprocessConfig = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(config.detrend.as_deref(), Some("spline"));
        assert_eq!(serde_json::to_value(&config).unwrap(), input);
    }

    #[test]
    fn empty_preprocess_serializes_to_empty_object() {
        let config = PreprocessConfig::default();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({}));
    }

    #[test]
    fn predict_request_tolerates_wrong_type() {
        let request: PredictRequest =
            serde_json::from_value(json!({"lightcurve": "not a list"})).unwrap();
        assert!(matches!(request.lightcurve, Some(Value::String(_))));
    }
}
