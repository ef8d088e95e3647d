//! Typed classifier configuration.
//!
//! The original pipeline kept lexicons and thresholds in module-level
//! mutable tables; here everything is one immutable configuration value,
//! validated once at construction and passed explicitly into the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duration::DurationThresholds;
use crate::identity::IdentityMarkers;
use crate::language::LanguageLexicon;
use crate::lexicon::Lexicon;
use crate::trust::TrustTiers;

/// Configuration error raised by [`ClassifierConfig::validate`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be within [0,1], got {value}")]
    ConfidenceOutOfRange { field: &'static str, value: f64 },

    #[error("duration thresholds must be ordered short_clip <= max_music <= min_sermon <= likely_sermon")]
    DurationThresholdsUnordered,

    #[error("duration thresholds must be non-negative")]
    NegativeDurationThreshold,

    #[error("{0} must not be empty")]
    EmptyLexicon(&'static str),
}

/// Full configuration for one classification engine instance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Identity marker tables for the target speaker
    pub identity: IdentityMarkers,

    /// When true (default), a church-name match alone never counts as
    /// identity proof; the speaker's literal name is required
    pub require_personal_name: bool,

    /// When true (default), videos with no identity from channels below
    /// `Trusted` resolve to UNKNOWN in the scoring stage
    pub strict_mode: bool,

    /// Channel lists for the verified/trusted/known tiers
    pub trust_tiers: TrustTiers,

    /// Channels requiring face verification; without it their PREACHING
    /// verdicts are downgraded and flagged for review
    pub strict_channels: Vec<String>,

    /// Keyword tables for preaching/music scoring
    pub lexicon: Lexicon,

    /// Indicator word lists for language detection
    pub language: LanguageLexicon,

    /// Duration band boundaries
    pub duration: DurationThresholds,

    /// Minimum confidence for a face verification claim to be trusted
    pub min_face_confidence: f64,

    /// Verdicts below this confidence are flagged for review
    /// (unless face-verified)
    pub review_threshold: f64,

    /// Batch-summary boundary for counting high-confidence verdicts
    pub high_confidence: f64,

    /// Batch-summary boundary for counting low-confidence verdicts
    pub low_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            identity: IdentityMarkers::default(),
            require_personal_name: true,
            strict_mode: true,
            trust_tiers: TrustTiers {
                verified: Vec::new(),
                trusted: vec![
                    "ramah full gospel church pretoria".to_string(),
                    "@ramahfullgospelchurchpretoria".to_string(),
                    "ramahfullgospelchurchpretoria".to_string(),
                ],
                known: Vec::new(),
            },
            strict_channels: vec![
                "ramah full gospel church pretoria".to_string(),
                "ramahfullgospelchurchpretoria".to_string(),
                "@ramahfullgospelchurchpretoria".to_string(),
            ],
            lexicon: Lexicon::default(),
            language: LanguageLexicon::default(),
            duration: DurationThresholds::default(),
            min_face_confidence: 0.70,
            review_threshold: 0.70,
            high_confidence: 0.85,
            low_confidence: 0.45,
        }
    }
}

impl ClassifierConfig {
    /// Validate threshold ranges, duration ordering, and lexicon presence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_face_confidence", self.min_face_confidence),
            ("review_threshold", self.review_threshold),
            ("high_confidence", self.high_confidence),
            ("low_confidence", self.low_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::ConfidenceOutOfRange { field, value });
            }
        }

        let d = &self.duration;
        if d.short_clip < 0 || d.max_music < 0 || d.min_sermon < 0 || d.likely_sermon < 0 {
            return Err(ConfigError::NegativeDurationThreshold);
        }
        if !(d.short_clip <= d.max_music
            && d.max_music <= d.min_sermon
            && d.min_sermon <= d.likely_sermon)
        {
            return Err(ConfigError::DurationThresholdsUnordered);
        }

        if self.lexicon.preaching_keywords.is_empty() {
            return Err(ConfigError::EmptyLexicon("preaching_keywords"));
        }
        if self.lexicon.music_keywords.is_empty() {
            return Err(ConfigError::EmptyLexicon("music_keywords"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let config = ClassifierConfig {
            min_face_confidence: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConfidenceOutOfRange { field: "min_face_confidence", .. })
        ));
    }

    #[test]
    fn test_rejects_unordered_durations() {
        let config = ClassifierConfig {
            duration: DurationThresholds {
                short_clip: 1800,
                max_music: 600,
                min_sermon: 240,
                likely_sermon: 2700,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DurationThresholdsUnordered)
        ));
    }

    #[test]
    fn test_rejects_empty_lexicon() {
        let mut config = ClassifierConfig::default();
        config.lexicon.preaching_keywords.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyLexicon("preaching_keywords"))
        ));
    }

    #[test]
    fn test_config_serde_roundtrip_with_defaults() {
        let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert!(config.require_personal_name);
        assert!(config.strict_mode);
        assert_eq!(config.min_face_confidence, 0.70);

        let json = serde_json::to_string(&config).unwrap();
        let back: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.review_threshold, config.review_threshold);
        assert_eq!(back.lexicon.preaching_keywords, config.lexicon.preaching_keywords);
    }
}
