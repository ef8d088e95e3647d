//! Video record models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a discovered video.
///
/// For platform videos this is the platform's own id (e.g. the YouTube
/// video id); synthetic records get a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    /// Generate a new random video ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Metadata for a single discovered video, as supplied by the fetch layer.
///
/// Immutable for the duration of one classification call. Everything beyond
/// id and title is optional; missing fields degrade to the least-informative
/// signal during classification rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoRecord {
    /// Unique video ID
    pub video_id: VideoId,

    /// Video title
    pub title: String,

    /// Video description (fetchers truncate to ~500 chars)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Upload date in YYYYMMDD format as reported by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,

    /// View count at fetch time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,

    /// URL to the video thumbnail (used only by face verification)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Name of the uploading channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    /// Platform channel ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Full watch URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Timestamp when this record was fetched
    pub fetched_at: DateTime<Utc>,

    /// Which search query discovered this video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query_used: Option<String>,
}

impl VideoRecord {
    /// Create a new record with the required fields; everything else unset.
    pub fn new(video_id: impl Into<VideoId>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            description: None,
            duration: None,
            upload_date: None,
            view_count: None,
            thumbnail_url: None,
            channel_name: None,
            channel_id: None,
            video_url: None,
            fetched_at: Utc::now(),
            search_query_used: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the duration in seconds.
    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the channel name.
    pub fn with_channel(mut self, channel_name: impl Into<String>) -> Self {
        self.channel_name = Some(channel_name.into());
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Title and description joined, lower-cased, for keyword matching.
    pub fn searchable_text(&self) -> String {
        match &self.description {
            Some(desc) if !desc.is_empty() => {
                format!("{} {}", self.title, desc).to_lowercase()
            }
            _ => self.title.to_lowercase(),
        }
    }

    /// Duration rendered as `H:MM:SS` (or `M:SS` under an hour).
    pub fn duration_formatted(&self) -> String {
        let Some(duration) = self.duration.filter(|d| *d >= 0) else {
            return "Unknown".to_string();
        };
        let hours = duration / 3600;
        let minutes = (duration % 3600) / 60;
        let seconds = duration % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }

    /// Upload date reformatted as `YYYY-MM-DD` when well-formed.
    pub fn upload_date_formatted(&self) -> Option<String> {
        let date = self.upload_date.as_deref()?;
        if date.len() == 8 && date.chars().all(|c| c.is_ascii_digit()) {
            Some(format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..]))
        } else {
            Some(date.to_string())
        }
    }
}
