//! Channel trust resolution.
//!
//! A channel's trust tier is a coarse reliability classification of the
//! uploader, independent of any single video's content. Matching tolerates
//! decorated handles ("@ChannelHandle", suffixes) by testing substring
//! containment in either direction, case-insensitively.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sermon_models::TrustLevel;

/// Case-insensitive bidirectional substring match between a channel name
/// and a configured entry.
pub(crate) fn channel_matches(channel_lower: &str, entry: &str) -> bool {
    let entry = entry.to_lowercase();
    entry.contains(channel_lower) || channel_lower.contains(entry.as_str())
}

/// True when the channel appears in `entries` (bidirectional match).
pub(crate) fn channel_in_list(channel_name: Option<&str>, entries: &[String]) -> bool {
    let Some(channel) = channel_name.filter(|c| !c.is_empty()) else {
        return false;
    };
    let channel_lower = channel.to_lowercase();
    entries.iter().any(|e| channel_matches(&channel_lower, e))
}

/// Channel lists for the three non-default trust tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TrustTiers {
    /// Level 3: publish ONLY the target speaker's content; auto-accept
    pub verified: Vec<String>,

    /// Level 2: known church channels; identity or face still required
    pub trusted: Vec<String>,

    /// Level 1: channels the speaker has appeared on among other speakers
    pub known: Vec<String>,
}

impl TrustTiers {
    /// Resolve a channel name to its trust level.
    ///
    /// Tiers are checked in descending priority; a missing or empty channel
    /// name resolves to [`TrustLevel::Unknown`].
    pub fn resolve(&self, channel_name: Option<&str>) -> TrustLevel {
        let Some(channel) = channel_name.filter(|c| !c.is_empty()) else {
            return TrustLevel::Unknown;
        };
        let channel_lower = channel.to_lowercase();

        if self.verified.iter().any(|e| channel_matches(&channel_lower, e)) {
            TrustLevel::Verified
        } else if self.trusted.iter().any(|e| channel_matches(&channel_lower, e)) {
            TrustLevel::Trusted
        } else if self.known.iter().any(|e| channel_matches(&channel_lower, e)) {
            TrustLevel::Known
        } else {
            TrustLevel::Unknown
        }
    }
}
