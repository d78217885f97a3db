//! Placeholder detection pipeline.

use async_trait::async_trait;

use super::{Candidate, DetectionPipeline, PipelineResult, PreprocessConfig};

/// Target assumed when a detection request names none.
pub const DEFAULT_TARGET: &str = "TIC 268125229";

/// Stand-in for the real fetch-and-detect pipeline.
///
/// Ignores the target and preprocessing options entirely and returns one
/// synthetic candidate with plausible transit parameters. The candidate
/// list it produces is ordered by descending power by construction, the
/// same convention a real periodogram search must follow.
// TODO: wire up the actual pipeline (photometry download, preprocessing,
// BLS periodogram search) and return its ranked candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticPipeline;

#[async_trait]
impl DetectionPipeline for SyntheticPipeline {
    async fn fetch_and_detect(
        &self,
        _target: &str,
        _preprocess: &PreprocessConfig,
    ) -> PipelineResult<Vec<Candidate>> {
        Ok(vec![Candidate {
            period: 2.743,
            duration: 0.08,
            depth: 0.0031,
            power: 18.4,
            probability: 0.87,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_single_fixed_candidate() {
        let candidates = SyntheticPipeline
            .fetch_and_detect("TIC 307210830", &PreprocessConfig::default())
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].period, 2.743);
        assert_eq!(candidates[0].power, 18.4);
    }

    #[tokio::test]
    async fn candidate_fields_are_in_range() {
        let candidates = SyntheticPipeline
            .fetch_and_detect(DEFAULT_TARGET, &PreprocessConfig::default())
            .await
            .unwrap();
        let c = &candidates[0];
        assert!(c.period > 0.0);
        assert!(c.duration > 0.0);
        assert!((0.0..=1.0).contains(&c.depth));
        assert!((0.0..=1.0).contains(&c.probability));
    }
}
