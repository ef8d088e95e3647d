//! Classification verdict models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category assigned to a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// A genuine sermon by the target speaker
    Preaching,
    /// Music / worship performance content
    Music,
    /// Could not be established as either
    #[default]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Preaching => "PREACHING",
            ContentType::Music => "MUSIC",
            ContentType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detected primary language of a video's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum Language {
    #[serde(rename = "FR")]
    French,
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "UNKNOWN")]
    #[default]
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::French => "FR",
            Language::English => "EN",
            Language::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trust level of an uploading channel, independent of any single video.
///
/// Ordering is meaningful: higher levels require less per-video validation.
/// `Verified` channels are known to exclusively publish the target speaker's
/// content and short-circuit classification entirely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
    Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// Never seen before, strictest validation
    #[default]
    Unknown,
    /// A channel the speaker has appeared on, alongside other speakers
    Known,
    /// A known church channel; identity or face still required
    Trusted,
    /// Publishes only the target speaker's content; auto-accept
    Verified,
}

impl TrustLevel {
    /// Numeric level for persistence (0..=3).
    pub fn as_u8(&self) -> u8 {
        match self {
            TrustLevel::Unknown => 0,
            TrustLevel::Known => 1,
            TrustLevel::Trusted => 2,
            TrustLevel::Verified => 3,
        }
    }

    /// Build from a persisted numeric level; values above 3 clamp to `Verified`.
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => TrustLevel::Unknown,
            1 => TrustLevel::Known,
            2 => TrustLevel::Trusted,
            _ => TrustLevel::Verified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Unknown => "unknown",
            TrustLevel::Known => "known",
            TrustLevel::Trusted => "trusted",
            TrustLevel::Verified => "verified",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrustLevel {
    type Err = TrustLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(TrustLevel::Unknown),
            "known" => Ok(TrustLevel::Known),
            "trusted" => Ok(TrustLevel::Trusted),
            "verified" => Ok(TrustLevel::Verified),
            _ => Err(TrustLevelParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown trust level: {0}")]
pub struct TrustLevelParseError(String);

/// The verdict produced by one classification pass.
///
/// Consumers persist these fields verbatim alongside the video row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    /// Assigned content category
    pub content_type: ContentType,

    /// Heuristic strength in [0,1]; ordinal, not a calibrated probability
    pub confidence_score: f64,

    /// True when the verdict needs human adjudication
    pub needs_review: bool,

    /// True only when the speaker's literal name was found in text,
    /// never for an organization-only match
    pub identity_matched: bool,

    /// Trust level of the uploading channel
    pub channel_trust_level: TrustLevel,

    /// True when face verification positively matched the speaker
    pub face_verified: bool,

    /// Detected language, computed independently of the verdict
    pub language_detected: Language,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            content_type: ContentType::Unknown,
            confidence_score: 0.0,
            needs_review: true,
            identity_matched: false,
            channel_trust_level: TrustLevel::Unknown,
            face_verified: false,
            language_detected: Language::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_serde_uses_screaming_case() {
        let json = serde_json::to_string(&ContentType::Preaching).unwrap();
        assert_eq!(json, "\"PREACHING\"");
        let parsed: ContentType = serde_json::from_str("\"MUSIC\"").unwrap();
        assert_eq!(parsed, ContentType::Music);
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::French).unwrap(), "\"FR\"");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"EN\"");
        let parsed: Language = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, Language::Unknown);
    }

    #[test]
    fn test_trust_level_ordering() {
        assert!(TrustLevel::Verified > TrustLevel::Trusted);
        assert!(TrustLevel::Trusted > TrustLevel::Known);
        assert!(TrustLevel::Known > TrustLevel::Unknown);
    }

    #[test]
    fn test_trust_level_roundtrip() {
        for level in [
            TrustLevel::Unknown,
            TrustLevel::Known,
            TrustLevel::Trusted,
            TrustLevel::Verified,
        ] {
            assert_eq!(TrustLevel::from_u8(level.as_u8()), level);
            assert_eq!(level.as_str().parse::<TrustLevel>().unwrap(), level);
        }
        assert_eq!(TrustLevel::from_u8(9), TrustLevel::Verified);
        assert!("primary".parse::<TrustLevel>().is_err());
    }

    #[test]
    fn test_default_classification_is_unreviewed_unknown() {
        let c = Classification::default();
        assert_eq!(c.content_type, ContentType::Unknown);
        assert!(c.needs_review);
        assert!(!c.identity_matched);
        assert_eq!(c.channel_trust_level, TrustLevel::Unknown);
    }
}
