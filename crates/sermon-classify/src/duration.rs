//! Duration heuristics.
//!
//! Duration is a corroborating signal only: its magnitude is capped well
//! below what could flip a decision by itself. Sermons run long; music
//! videos run short.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Score for durations at or above the likely-sermon threshold.
pub const LIKELY_SERMON_SCORE: f64 = 0.25;

/// Score for durations at or above the minimum sermon threshold.
pub const MIN_SERMON_SCORE: f64 = 0.15;

/// Penalty for durations at or below the short-clip threshold.
pub const SHORT_CLIP_PENALTY: f64 = -0.5;

/// Penalty for durations between the short-clip and max-music thresholds.
pub const SHORTISH_PENALTY: f64 = -0.3;

/// Duration band boundaries, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct DurationThresholds {
    /// Very short, likely a music clip (default 4 minutes)
    pub short_clip: i64,

    /// Below this with no preaching keywords, likely music (default 10 minutes)
    pub max_music: i64,

    /// Minimum plausible sermon length (default 30 minutes)
    pub min_sermon: i64,

    /// Very likely a sermon at this length (default 45 minutes)
    pub likely_sermon: i64,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            short_clip: 240,
            max_music: 600,
            min_sermon: 1800,
            likely_sermon: 2700,
        }
    }
}

impl DurationThresholds {
    /// Monotonic step score over the duration bands, in [-0.5, 0.25].
    ///
    /// Missing or negative durations are the least-informative case and
    /// score neutral 0.0.
    pub fn score(&self, duration: Option<i64>) -> f64 {
        let Some(duration) = duration.filter(|d| *d >= 0) else {
            return 0.0;
        };

        if duration >= self.likely_sermon {
            LIKELY_SERMON_SCORE
        } else if duration >= self.min_sermon {
            MIN_SERMON_SCORE
        } else if duration > self.max_music {
            0.0
        } else if duration <= self.short_clip {
            SHORT_CLIP_PENALTY
        } else {
            SHORTISH_PENALTY
        }
    }
}
