//! Placeholder light-curve classifiers.

use async_trait::async_trait;
use serde_json::Value;

use super::{FileClassifier, LightCurveClassifier, PipelineResult};

/// Probability reported for every uploaded file by the placeholder.
pub const PLACEHOLDER_FILE_PROB: f64 = 0.66;

/// Toy classifier scoring the fraction of positive samples.
///
/// Computes `min(0.999, 0.5 + min(0.4, positives / n * 0.4))` where
/// `positives` counts numeric samples greater than zero and `n` is the
/// total sample count. Non-numeric samples count toward `n` but never
/// toward `positives`.
// TODO: swap in the trained CNN classifier; only the numeric-sequence ->
// probability signature is contractual, not this formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveFractionClassifier;

#[async_trait]
impl LightCurveClassifier for PositiveFractionClassifier {
    async fn classify(&self, samples: &[Value]) -> PipelineResult<f64> {
        let positives = samples
            .iter()
            .filter(|v| v.as_f64().is_some_and(|x| x > 0.0))
            .count();
        let fraction = positives as f64 / samples.len().max(1) as f64;
        Ok(f64::min(0.999, 0.5 + f64::min(0.4, fraction * 0.4)))
    }
}

/// Stand-in for a classifier operating on packaged light-curve files.
///
/// Ignores the content entirely and reports a fixed probability.
// TODO: parse the uploaded product (FITS/CSV) into a light curve and
// delegate to the real classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFileClassifier;

#[async_trait]
impl FileClassifier for FixedFileClassifier {
    async fn classify_file(&self, _filename: &str, _content: &[u8]) -> PipelineResult<f64> {
        Ok(PLACEHOLDER_FILE_PROB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn three_of_five_positive_scores_074() {
        let samples = vec![json!(1), json!(2), json!(3), json!(-1), json!(-2)];
        let prob = PositiveFractionClassifier.classify(&samples).await.unwrap();
        assert!((prob - 0.74).abs() < 1e-12);
    }

    #[tokio::test]
    async fn all_positive_caps_at_09() {
        let samples: Vec<Value> = (1..=10).map(|v| json!(v)).collect();
        let prob = PositiveFractionClassifier.classify(&samples).await.unwrap();
        // cap applies: 0.5 + min(0.4, 0.4) = 0.9
        assert!((prob - 0.9).abs() < 1e-12);
    }

    #[tokio::test]
    async fn non_numeric_samples_are_ignored_for_the_count() {
        let samples = vec![json!("spike"), json!(null), json!(1.5), json!(-0.2)];
        let prob = PositiveFractionClassifier.classify(&samples).await.unwrap();
        // one positive out of four samples
        assert!((prob - (0.5 + 0.25 * 0.4)).abs() < 1e-12);
    }

    #[tokio::test]
    async fn no_positives_scores_baseline() {
        let samples = vec![json!(-1), json!(0), json!(-3.5)];
        let prob = PositiveFractionClassifier.classify(&samples).await.unwrap();
        assert!((prob - 0.5).abs() < 1e-12);
    }

    #[tokio::test]
    async fn file_classifier_is_content_independent() {
        let a = FixedFileClassifier.classify_file("a.fits", &[]).await.unwrap();
        let b = FixedFileClassifier.classify_file("b.csv", &[1, 2, 3]).await.unwrap();
        assert_eq!(a, PLACEHOLDER_FILE_PROB);
        assert_eq!(a, b);
    }
}
