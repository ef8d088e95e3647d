//! Shared data models for the sermon classification pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Video records as discovered by search/crawl
//! - Classification verdicts (content type, confidence, review flag)
//! - Channel trust levels and detected languages

pub mod classification;
pub mod video;

// Re-export common types
pub use classification::{Classification, ContentType, Language, TrustLevel, TrustLevelParseError};
pub use video::{VideoId, VideoRecord};
