//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint: it validates the
//! request, delegates to the injected pipeline collaborator, and shapes
//! the JSON response. No handler keeps state across requests.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};

use super::dto::{
    DetectRequest, DetectResponse, HealthResponse, PredictFileResponse, PredictRequest,
    PredictResponse, SuggestQuery, SuggestResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::pipeline::detect::DEFAULT_TARGET;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET {prefix}/health
///
/// Liveness probe for orchestration and monitoring. Never fails.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

// =============================================================================
// Catalog Suggestions
// =============================================================================

/// GET {prefix}/suggest?q=...&domain=...
///
/// Suggest catalog identifiers for a free-text query. Empty and
/// pathological queries are normalized, never rejected: an empty query
/// yields an empty item list with the domain echoed unchanged.
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> HandlerResult<SuggestResponse> {
    let items = state.catalog.suggest(&query.q, &query.domain).await?;

    Ok(Json(SuggestResponse {
        items,
        domain: query.domain,
    }))
}

// =============================================================================
// Detection
// =============================================================================

/// POST {prefix}/fetch_detect
///
/// Fetch photometry for a target and search it for transit candidates.
/// Missing keys get defaults instead of errors; the preprocessing
/// options are echoed back verbatim so clients can audit what
/// configuration produced the result.
pub async fn fetch_detect(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> HandlerResult<DetectResponse> {
    let target = request
        .target
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let candidates = state
        .detector
        .fetch_and_detect(&target, &request.preprocess)
        .await?;

    Ok(Json(DetectResponse {
        target,
        candidates,
        preprocess: request.preprocess,
    }))
}

// =============================================================================
// Classification
// =============================================================================

/// POST {prefix}/predict
///
/// Classify a raw light curve. `lightcurve` must be a non-empty JSON
/// array; absence, a wrong type, and emptiness are all rejected with the
/// same 400 message. Non-numeric elements inside the array are tolerated
/// (the classifier ignores them) and still count toward `n`.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> HandlerResult<PredictResponse> {
    let samples = match request.lightcurve.as_ref().and_then(|v| v.as_array()) {
        Some(samples) if !samples.is_empty() => samples,
        _ => return Err(AppError::BadRequest("lightcurve array required".to_string())),
    };

    let planet_prob = state.classifier.classify(samples).await?;

    Ok(Json(PredictResponse {
        planet_prob,
        n: samples.len(),
    }))
}

/// POST {prefix}/predict-file
///
/// Classify an uploaded light-curve file sent as the multipart field
/// `file`. The whole payload is buffered before classification, so peak
/// memory scales with the upload size (bounded by the router's body
/// limit).
pub async fn predict_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<PredictFileResponse> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?;
            upload = Some((filename, content));
            break;
        }
    }

    let (filename, content) =
        upload.ok_or_else(|| AppError::BadRequest("file field required".to_string()))?;

    tracing::debug!(
        filename = %filename,
        size_bytes = content.len(),
        "classifying uploaded light-curve file"
    );

    let planet_prob = state
        .file_classifier
        .classify_file(&filename, &content)
        .await?;

    Ok(Json(PredictFileResponse {
        planet_prob,
        size: content.len(),
        filename,
    }))
}
