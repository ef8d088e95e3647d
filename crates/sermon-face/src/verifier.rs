//! The face verifier trait and its observation type.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sermon_models::VideoRecord;

use crate::error::FaceResult;

/// Outcome of one face verification attempt.
///
/// Serializable so out-of-band verification runs can persist outcomes and
/// feed them back into the scoring path later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaceObservation {
    /// True when the target speaker's face was positively matched
    pub verified: bool,

    /// Match confidence in [0,1]; meaningful even when not verified
    /// (detection-only backends report a low fixed confidence on a hit)
    pub confidence: f64,
}

impl FaceObservation {
    /// A positive biometric match at the given confidence.
    pub fn verified(confidence: f64) -> Self {
        Self {
            verified: true,
            confidence,
        }
    }

    /// No match (or no verification attempted).
    pub fn unverified() -> Self {
        Self {
            verified: false,
            confidence: 0.0,
        }
    }

    /// No match, but with a residual confidence (e.g. a detection-only hit).
    pub fn unverified_at(confidence: f64) -> Self {
        Self {
            verified: false,
            confidence,
        }
    }

    /// Re-validate a claimed verification against a minimum confidence.
    ///
    /// A verifier claiming `verified=true` below the threshold is downgraded
    /// to not-verified; the confidence is kept for diagnostics.
    pub fn gated(self, min_confidence: f64) -> Self {
        if self.verified && self.confidence < min_confidence {
            Self {
                verified: false,
                confidence: self.confidence,
            }
        } else {
            self
        }
    }

    /// True when verified at or above the given threshold.
    pub fn meets(&self, min_confidence: f64) -> bool {
        self.verified && self.confidence >= min_confidence
    }
}

impl Default for FaceObservation {
    fn default() -> Self {
        Self::unverified()
    }
}

/// Face verification provider.
///
/// Implementations may perform network and file IO (thumbnail download,
/// frame extraction, model inference) and must be internally synchronized:
/// the engine calls `verify` concurrently during batch classification.
#[async_trait]
pub trait FaceVerifier: Send + Sync {
    /// Attempt to verify the target speaker's face in the video's visual
    /// material.
    ///
    /// Errors are a boundary concern: the engine translates any `Err` into
    /// an unverified observation and never distinguishes "verification
    /// failed" from "verification found no match".
    async fn verify(&self, video: &VideoRecord) -> FaceResult<FaceObservation>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Whether this provider performs true biometric recognition
    /// (vs presence-only detection).
    fn performs_recognition(&self) -> bool;
}
