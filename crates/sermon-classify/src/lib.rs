//! Multi-signal content classification engine for sermon videos.
//!
//! Decides whether a discovered video is a genuine sermon by a specific
//! speaker (vs music or unrelated content) by combining:
//!
//! - keyword matching against curated preaching/music lexicons
//! - textual identity markers (the speaker's name, aliases, church)
//! - channel trust tiers (unknown / known / trusted / verified)
//! - duration heuristics (weak, corroborating-only signal)
//! - optional biometric face verification (injected capability)
//!
//! The verdict is a category (`PREACHING | MUSIC | UNKNOWN`), a heuristic
//! confidence in [0,1], and a review flag, produced by a staged decision
//! cascade under an "absence of evidence is evidence of rejection" policy:
//! hard safety gates run before any soft scoring, so a false positive sermon
//! attribution is never published on keyword strength alone.
//!
//! [`Classifier::score`] is a pure function of the video record, an injected
//! face observation, and the configuration, safe to call from any number of
//! threads without synchronization.

pub mod config;
pub mod duration;
pub mod engine;
pub mod identity;
pub mod language;
pub mod lexicon;
pub mod trust;

pub use config::{ClassifierConfig, ConfigError};
pub use duration::DurationThresholds;
pub use engine::{summarize, ClassificationSummary, Classifier};
pub use identity::{IdentityMarkers, IdentityMatch};
pub use language::{detect_language, LanguageLexicon};
pub use lexicon::Lexicon;
pub use trust::TrustTiers;
