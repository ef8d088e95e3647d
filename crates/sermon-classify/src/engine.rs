//! The staged decision cascade.
//!
//! Classification is not a classic state machine but a fixed-order cascade
//! with early-exit short circuits:
//!
//! 1. Verified-channel auto-accept
//! 2. Strong-music short circuit
//! 3. Hard gate: unknown channel with no face and no personal name
//! 4. Hard gate: no personal name without a verified face
//! 5. Soft scoring: signal tally, then ranked rules in fixed textual order
//! 6. Strict-channel downgrade and the review flag
//!
//! The gates run first because they encode safety (never publish a false
//! positive sermon attribution); the ranked rules only arbitrate among
//! already-gated candidates. Rule order within the soft stage is a
//! tie-break: several conditions overlap, and the first match wins.
//!
//! The confidence constants below are hand-tuned, carried over unchanged
//! from the production lexicon tuning; they are ordinal strengths, not
//! calibrated probabilities.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use sermon_face::{DisabledVerifier, FaceObservation, FaceVerifier};
use sermon_models::{Classification, ContentType, TrustLevel, VideoRecord};

use crate::config::{ClassifierConfig, ConfigError};
use crate::identity::IdentityMatch;
use crate::language::detect_language;
use crate::trust::channel_in_list;

/// Confidence for the tier-3 channel auto-accept.
pub const VERIFIED_CHANNEL_CONFIDENCE: f64 = 0.95;

/// Confidence for the strong-music short circuit.
pub const STRONG_MUSIC_CONFIDENCE: f64 = 0.95;

/// Confidence when a verified face is present; decisive, bypasses the tally.
pub const FACE_VERIFIED_CONFIDENCE: f64 = 0.98;

/// Confidence for the unknown-channel rejection gate.
pub const UNKNOWN_CHANNEL_CONFIDENCE: f64 = 0.20;

/// Confidence for the missing-personal-name rejection gate.
pub const NO_PERSONAL_NAME_CONFIDENCE: f64 = 0.25;

/// Confidence for the strict-mode rejection in the scoring stage.
pub const STRICT_MODE_CONFIDENCE: f64 = 0.25;

/// Confidence assigned when a strict channel's PREACHING verdict is
/// downgraded for lack of face verification.
pub const STRICT_CHANNEL_DOWNGRADE_CONFIDENCE: f64 = 0.30;

/// Minimum weighted signal tally required before any PREACHING verdict.
pub const MIN_SIGNAL_TALLY: f64 = 2.0;

/// Preaching keyword count that registers as a tally signal.
pub const PREACHING_SIGNAL_KEYWORDS: u32 = 3;

/// The classification engine.
///
/// Owns an immutable configuration and an injected face verifier. One
/// instance serves any number of threads: `score` is pure, and `classify`
/// only awaits the verifier.
pub struct Classifier {
    config: ClassifierConfig,
    verifier: Arc<dyn FaceVerifier>,
}

impl Classifier {
    /// Engine with no face verification configured.
    ///
    /// The configuration is validated once here; the scoring path assumes
    /// it holds.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        Self::with_verifier(config, Arc::new(DisabledVerifier))
    }

    /// Engine with an injected face verifier.
    pub fn with_verifier(
        config: ClassifierConfig,
        verifier: Arc<dyn FaceVerifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, verifier })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Run the injected verifier, then score.
    ///
    /// Verifier failures are a boundary concern: any error is translated to
    /// an unverified observation before scoring, so the engine never
    /// distinguishes "verification failed" from "no match found".
    pub async fn classify(&self, video: &VideoRecord) -> Classification {
        let observation = match self.verifier.verify(video).await {
            Ok(observation) => observation,
            Err(error) => {
                warn!(
                    video_id = %video.video_id,
                    verifier = self.verifier.name(),
                    %error,
                    "Face verification failed; treating as not verified"
                );
                FaceObservation::unverified()
            }
        };
        self.score(video, observation)
    }

    /// Classify a batch of independent records concurrently.
    ///
    /// Results are returned in input order. Scoring itself is pure; only
    /// the face-verification calls overlap.
    pub async fn classify_batch(&self, videos: &[VideoRecord]) -> Vec<Classification> {
        join_all(videos.iter().map(|video| self.classify(video))).await
    }

    /// The pure decision cascade: a function of the video record, the face
    /// observation, and the configuration. Bit-identical inputs yield
    /// bit-identical verdicts.
    pub fn score(&self, video: &VideoRecord, face: FaceObservation) -> Classification {
        let config = &self.config;
        let text = video.searchable_text();

        // Language is always computed, even for rejected videos.
        let language = detect_language(&text, &config.language);

        let identity = config.identity.scan(&text, config.require_personal_name);
        let trust = config.trust_tiers.resolve(video.channel_name.as_deref());

        // A claimed verification below the minimum confidence is downgraded
        // (detection-only fallbacks must never pass as recognition).
        let face = face.gated(config.min_face_confidence);
        if face.verified {
            info!(video_id = %video.video_id, confidence = face.confidence, "Face verified");
        }

        let verdict = |content_type, confidence, needs_review| Classification {
            content_type,
            confidence_score: confidence,
            needs_review,
            identity_matched: identity.personal_name,
            channel_trust_level: trust,
            face_verified: face.verified,
            language_detected: language,
        };

        // 1. Verified channel: auto-accept, skip everything else.
        if trust == TrustLevel::Verified {
            return verdict(ContentType::Preaching, VERIFIED_CHANNEL_CONFIDENCE, false);
        }

        // 2. Strong music indicators, absent a verified face.
        if config.lexicon.has_strong_music_indicator(&text) && !face.verified {
            return verdict(ContentType::Music, STRONG_MUSIC_CONFIDENCE, false);
        }

        let preaching_score = config.lexicon.preaching_score(&text);
        let music_score = config.lexicon.music_score(&text);
        let duration_score = config.duration.score(video.duration);

        // 3. Hard gate: unknown channel with neither a verified face nor
        // the speaker's name.
        if trust == TrustLevel::Unknown && !face.verified && !identity.personal_name {
            debug!(
                video_id = %video.video_id,
                title = %video.title,
                "Rejected: unknown channel with no identity or face"
            );
            return verdict(ContentType::Unknown, UNKNOWN_CHANNEL_CONFIDENCE, true);
        }

        // 4. Hard gate: the speaker's literal name is required for every
        // non-verified channel; a church name or channel trust alone never
        // substitutes for it. Only a verified face can stand in.
        if !identity.personal_name && !face.verified {
            debug!(
                video_id = %video.video_id,
                title = %video.title,
                "Rejected: no personal name and no verified face"
            );
            return verdict(ContentType::Unknown, NO_PERSONAL_NAME_CONFIDENCE, true);
        }

        // 5. Soft scoring over gated candidates.
        let (content_type, confidence) = decide(
            preaching_score,
            music_score,
            duration_score,
            face.verified,
            &identity,
            trust,
            config.strict_mode,
        );

        // 6. Strict channels require an actual face match before a
        // PREACHING verdict stands.
        let is_strict = channel_in_list(video.channel_name.as_deref(), &config.strict_channels);
        if is_strict && !face.verified {
            if content_type == ContentType::Preaching {
                debug!(
                    video_id = %video.video_id,
                    "Strict channel: downgrading PREACHING for review (no face match)"
                );
                return verdict(
                    ContentType::Unknown,
                    STRICT_CHANNEL_DOWNGRADE_CONFIDENCE,
                    true,
                );
            }
            return verdict(content_type, confidence, true);
        }

        let needs_review = confidence < config.review_threshold && !face.verified;
        verdict(content_type, confidence, needs_review)
    }
}

/// The soft-scoring stage: signal tally plus ranked rules.
///
/// Rules are evaluated in fixed textual order; several conditions overlap
/// and the first match wins. Reordering changes outcomes silently, so
/// treat the order itself as part of the contract.
#[allow(clippy::too_many_arguments)]
fn decide(
    preaching_score: u32,
    music_score: u32,
    duration_score: f64,
    face_verified: bool,
    identity: &IdentityMatch,
    trust: TrustLevel,
    strict_mode: bool,
) -> (ContentType, f64) {
    // Face verification, when present, is decisive.
    if face_verified {
        return (ContentType::Preaching, FACE_VERIFIED_CONFIDENCE);
    }

    // Weighted positive signals toward PREACHING.
    let mut tally = 0.0;
    if identity.personal_name {
        tally += 2.0;
    }
    if preaching_score >= PREACHING_SIGNAL_KEYWORDS {
        tally += 1.0;
    }
    if trust >= TrustLevel::Trusted {
        tally += 1.0;
    }
    if duration_score >= crate::duration::MIN_SERMON_SCORE {
        tally += 0.5;
    }

    // Clear music profile: several music keywords, zero preaching ones.
    if music_score >= 2 && preaching_score == 0 {
        let confidence = (0.6 + duration_score.abs() * 0.2).min(0.9);
        return (ContentType::Music, confidence);
    }

    // Strict mode: no identity and no trusted channel resolves to UNKNOWN.
    if strict_mode && !identity.personal_name && trust < TrustLevel::Trusted {
        return (ContentType::Unknown, STRICT_MODE_CONFIDENCE);
    }

    // Multi-signal requirement: at least two signals for any PREACHING call.
    if tally < MIN_SIGNAL_TALLY {
        let confidence = (0.25 + tally * 0.1).max(0.30);
        return (ContentType::Unknown, confidence);
    }

    // Ranked rules, most specific first.

    // Strong preaching profile with identity and zero music keywords.
    if preaching_score >= PREACHING_SIGNAL_KEYWORDS && music_score == 0 && identity.personal_name {
        let confidence = (0.75 + identity.boost + duration_score * 0.1).min(0.95);
        return (ContentType::Preaching, confidence);
    }

    // Identity plus keyword margin.
    if identity.personal_name && preaching_score > music_score {
        let margin = (preaching_score - music_score) as f64;
        let confidence = 0.60 + identity.boost + margin * 0.05 + duration_score * 0.1;
        return (ContentType::Preaching, confidence.clamp(0.55, 0.90));
    }

    // Trusted channel plus keyword margin (no identity needed).
    if trust >= TrustLevel::Trusted && preaching_score > music_score {
        let margin = (preaching_score - music_score) as f64;
        let confidence = 0.55 + margin * 0.08 + duration_score * 0.1;
        return (ContentType::Preaching, confidence.clamp(0.50, 0.85));
    }

    // Music wins by a clear margin.
    if music_score > preaching_score + 1 {
        let margin = (music_score - preaching_score) as f64;
        let confidence = (0.5 + margin * 0.1).clamp(0.4, 0.85);
        return (ContentType::Music, confidence);
    }

    // Preaching wins numerically but identity absence caps the category.
    if preaching_score > music_score + 1 {
        let margin = (preaching_score - music_score) as f64;
        let confidence = (0.40 + margin * 0.05).min(0.55);
        return (ContentType::Unknown, confidence);
    }

    // Very short with nothing else to go on reads as music.
    if duration_score <= -0.3 {
        return (ContentType::Music, 0.5 + duration_score.abs() * 0.15);
    }

    // Truly uncertain.
    if preaching_score > music_score {
        (ContentType::Unknown, 0.40)
    } else if music_score > preaching_score {
        (ContentType::Music, 0.45)
    } else {
        (ContentType::Unknown, 0.30)
    }
}

/// Summary statistics over a batch of verdicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassificationSummary {
    pub total: usize,
    pub preaching: usize,
    pub music: usize,
    pub unknown: usize,
    pub needs_review: usize,
    pub high_confidence: usize,
    pub low_confidence: usize,
}

/// Tally verdicts by category, review flag, and confidence band.
pub fn summarize(
    results: &[Classification],
    config: &ClassifierConfig,
) -> ClassificationSummary {
    let mut summary = ClassificationSummary {
        total: results.len(),
        ..Default::default()
    };

    for result in results {
        match result.content_type {
            ContentType::Preaching => summary.preaching += 1,
            ContentType::Music => summary.music += 1,
            ContentType::Unknown => summary.unknown += 1,
        }
        if result.needs_review {
            summary.needs_review += 1;
        }
        if result.confidence_score >= config.high_confidence {
            summary.high_confidence += 1;
        } else if result.confidence_score < config.low_confidence {
            summary.low_confidence += 1;
        }
    }

    summary
}
