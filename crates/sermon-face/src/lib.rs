//! Face verification capability boundary.
//!
//! The classification engine treats face verification as an injectable
//! capability: a single trait, [`FaceVerifier`], whose implementations may be
//! backed by real biometric comparison, a detection-only fallback, or
//! precomputed out-of-band results. Verification of *the* target speaker is
//! strictly distinct from detection of *a* face; detection-only backends
//! must never report `verified=true`.
//!
//! Timeouts and failure handling live at this boundary, not in the scoring
//! engine: a verifier that errors or times out is reported to the engine as
//! not-verified at confidence 0.0.

pub mod error;
pub mod providers;
pub mod verifier;

pub use error::{FaceError, FaceResult};
pub use providers::{
    DetectionOnlyVerifier, DisabledVerifier, FaceDetector, PrecomputedVerifier, TimeoutVerifier,
};
pub use verifier::{FaceObservation, FaceVerifier};
