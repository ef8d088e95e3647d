//! Verifier implementations.
//!
//! These cover the non-biometric corners of the capability: disabled,
//! detection-only fallback, precomputed out-of-band results, and a timeout
//! wrapper. A true biometric verifier (reference-photo comparison) plugs in
//! behind the same trait from its own crate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use sermon_models::{VideoId, VideoRecord};

use crate::error::{FaceError, FaceResult};
use crate::verifier::{FaceObservation, FaceVerifier};

/// Confidence reported by the detection-only fallback on a face hit.
///
/// Kept below any sensible verification threshold so detection alone can
/// never be mistaken for recognition.
pub const DETECTION_HIT_CONFIDENCE: f64 = 0.30;

/// Verifier used when face verification is not configured.
///
/// Always reports not-verified at confidence 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledVerifier;

#[async_trait]
impl FaceVerifier for DisabledVerifier {
    async fn verify(&self, _video: &VideoRecord) -> FaceResult<FaceObservation> {
        Ok(FaceObservation::unverified())
    }

    fn name(&self) -> &'static str {
        "disabled"
    }

    fn performs_recognition(&self) -> bool {
        false
    }
}

/// Presence-only face detection backend.
///
/// Answers "is there a face in this video's imagery", nothing more.
#[async_trait]
pub trait FaceDetector: Send + Sync {
    /// Returns true when at least one face is present.
    async fn detect_face(&self, video: &VideoRecord) -> FaceResult<bool>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}

/// Fallback verifier wrapping a presence-only detector.
///
/// Detection of *a* face is not verification of *the* face: this verifier
/// never reports `verified=true`. A detection hit is surfaced as a fixed
/// low confidence so downstream diagnostics can tell "a face was there"
/// from "nothing at all".
pub struct DetectionOnlyVerifier<D: FaceDetector> {
    detector: D,
    hit_confidence: f64,
}

impl<D: FaceDetector> DetectionOnlyVerifier<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            hit_confidence: DETECTION_HIT_CONFIDENCE,
        }
    }

    /// Override the confidence reported on a detection hit.
    pub fn with_hit_confidence(mut self, confidence: f64) -> Self {
        self.hit_confidence = confidence;
        self
    }
}

#[async_trait]
impl<D: FaceDetector> FaceVerifier for DetectionOnlyVerifier<D> {
    async fn verify(&self, video: &VideoRecord) -> FaceResult<FaceObservation> {
        let hit = self.detector.detect_face(video).await?;
        if hit {
            debug!(
                video_id = %video.video_id,
                detector = self.detector.name(),
                "Face detected (detection only, not a recognition match)"
            );
            Ok(FaceObservation::unverified_at(self.hit_confidence))
        } else {
            Ok(FaceObservation::unverified())
        }
    }

    fn name(&self) -> &'static str {
        "detection-only"
    }

    fn performs_recognition(&self) -> bool {
        false
    }
}

/// Verifier backed by precomputed outcomes.
///
/// Supports running the slow biometric step out-of-band: verify a batch of
/// videos elsewhere, persist the observations, then feed them back into the
/// pure scoring path through this lookup. Videos with no recorded outcome
/// report not-verified.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedVerifier {
    outcomes: HashMap<VideoId, FaceObservation>,
}

impl PrecomputedVerifier {
    pub fn new(outcomes: HashMap<VideoId, FaceObservation>) -> Self {
        Self { outcomes }
    }

    /// Record an outcome for a video.
    pub fn insert(&mut self, video_id: impl Into<VideoId>, observation: FaceObservation) {
        self.outcomes.insert(video_id.into(), observation);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[async_trait]
impl FaceVerifier for PrecomputedVerifier {
    async fn verify(&self, video: &VideoRecord) -> FaceResult<FaceObservation> {
        Ok(self
            .outcomes
            .get(&video.video_id)
            .copied()
            .unwrap_or_else(FaceObservation::unverified))
    }

    fn name(&self) -> &'static str {
        "precomputed"
    }

    fn performs_recognition(&self) -> bool {
        true
    }
}

/// Wraps another verifier with a hard deadline.
///
/// Verification that has not returned within the deadline reports
/// [`FaceError::Timeout`]; the caller translates that into not-verified like
/// any other boundary failure.
pub struct TimeoutVerifier<V: FaceVerifier> {
    inner: V,
    deadline: Duration,
}

impl<V: FaceVerifier> TimeoutVerifier<V> {
    pub fn new(inner: V, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl<V: FaceVerifier> FaceVerifier for TimeoutVerifier<V> {
    async fn verify(&self, video: &VideoRecord) -> FaceResult<FaceObservation> {
        match tokio::time::timeout(self.deadline, self.inner.verify(video)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    video_id = %video.video_id,
                    verifier = self.inner.name(),
                    deadline_secs = self.deadline.as_secs(),
                    "Face verification timed out"
                );
                Err(FaceError::Timeout(self.deadline.as_secs()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "timeout"
    }

    fn performs_recognition(&self) -> bool {
        self.inner.performs_recognition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(bool);

    #[async_trait]
    impl FaceDetector for FixedDetector {
        async fn detect_face(&self, _video: &VideoRecord) -> FaceResult<bool> {
            Ok(self.0)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct SlowVerifier;

    #[async_trait]
    impl FaceVerifier for SlowVerifier {
        async fn verify(&self, _video: &VideoRecord) -> FaceResult<FaceObservation> {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(FaceObservation::verified(0.99))
        }

        fn name(&self) -> &'static str {
            "slow"
        }

        fn performs_recognition(&self) -> bool {
            true
        }
    }

    fn record() -> VideoRecord {
        VideoRecord::new("vid-1", "Sunday Service")
    }

    #[tokio::test]
    async fn test_disabled_verifier_reports_unverified() {
        let obs = DisabledVerifier.verify(&record()).await.unwrap();
        assert!(!obs.verified);
        assert_eq!(obs.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_detection_only_never_verifies_on_hit() {
        let verifier = DetectionOnlyVerifier::new(FixedDetector(true));
        let obs = verifier.verify(&record()).await.unwrap();
        assert!(!obs.verified);
        assert_eq!(obs.confidence, DETECTION_HIT_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_detection_only_miss_reports_zero() {
        let verifier = DetectionOnlyVerifier::new(FixedDetector(false));
        let obs = verifier.verify(&record()).await.unwrap();
        assert!(!obs.verified);
        assert_eq!(obs.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_precomputed_lookup_and_miss() {
        let mut verifier = PrecomputedVerifier::default();
        verifier.insert("vid-1", FaceObservation::verified(0.88));

        let hit = verifier.verify(&record()).await.unwrap();
        assert!(hit.verified);
        assert_eq!(hit.confidence, 0.88);

        let miss = verifier
            .verify(&VideoRecord::new("vid-2", "Other"))
            .await
            .unwrap();
        assert!(!miss.verified);
    }

    #[tokio::test]
    async fn test_timeout_verifier_reports_timeout() {
        let verifier = TimeoutVerifier::new(SlowVerifier, Duration::from_millis(20));
        let err = verifier.verify(&record()).await.unwrap_err();
        assert!(matches!(err, FaceError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_timeout_verifier_passes_fast_results_through() {
        let mut inner = PrecomputedVerifier::default();
        inner.insert("vid-1", FaceObservation::verified(0.91));
        let verifier = TimeoutVerifier::new(inner, Duration::from_secs(5));
        let obs = verifier.verify(&record()).await.unwrap();
        assert!(obs.verified);
    }
}
