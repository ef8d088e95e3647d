//! Curated keyword tables and keyword scoring.
//!
//! All matching is case-insensitive substring containment against the
//! video's combined title + description. The default tables target bilingual
//! (English/French) ministry content and are fully overridable through
//! [`Lexicon`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keywords indicating preaching content (English).
pub const PREACHING_KEYWORDS_EN: &[&str] = &[
    "preaching", "sermon", "message", "teaching", "word", "prophecy",
    "prayer", "deliverance", "faith", "healing", "anointing",
    "sunday service", "conference", "crusade", "revival", "camp meeting",
    "bible study", "word of god", "holy spirit", "salvation", "grace",
    "testimony", "miracles", "breakthrough", "prophetic", "apostolic",
    "part 1", "part 2", "part 3", "pt 1", "pt 2", "pt 3",
    "session 1", "session 2", "day 1", "day 2", "night 1", "night 2",
    "morning service", "evening service", "night vigil",
];

/// Keywords indicating preaching content (French).
pub const PREACHING_KEYWORDS_FR: &[&str] = &[
    "predication", "message", "enseignement", "parole", "prophetie",
    "priere", "delivrance", "foi", "guerison", "onction",
    "culte", "conference", "croisade", "reveil", "camp",
    "etude biblique", "parole de dieu", "saint esprit", "salut", "grace",
    "temoignage", "miracles", "percee", "prophetique", "apostolique",
    "partie 1", "partie 2", "partie 3",
    "session 1", "session 2", "jour 1", "jour 2", "nuit 1", "nuit 2",
    "culte du matin", "culte du soir", "veillee",
];

/// Preaching terms that count double when matched.
pub const STRONG_PREACHING_TERMS: &[&str] =
    &["sermon", "preaching", "predication", "enseignement"];

/// Keywords indicating music content.
pub const MUSIC_KEYWORDS: &[&str] = &[
    // English
    "music", "song", "singing", "worship song", "album", "lyrics",
    "official video", "music video", "live performance", "concert",
    "praise and worship", "worship medley", "gospel song",
    "audio", "mp3", "single", "track",
    // French
    "musique", "chanson", "chant", "louange", "paroles",
    "clip officiel", "clip video", "spectacle",
    "louange et adoration", "medley", "cantique",
    // Common music indicators
    "feat.", "ft.", "featuring", "prod.", "remix",
];

/// Near-certain music phrases; their presence, absent a verified face,
/// immediately classifies a video as MUSIC.
pub const STRONG_MUSIC_INDICATORS: &[&str] = &[
    "official video", "clip officiel", "music video", "clip video",
    "album", "single", "track", "audio only", "lyrics video",
    "feat.", "ft.", "remix", "prod by", "produced by",
];

/// Keyword tables used by the classification engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Lexicon {
    /// Keywords counting toward the preaching score (all languages merged)
    pub preaching_keywords: Vec<String>,

    /// Subset of preaching terms that count double
    pub strong_preaching_terms: Vec<String>,

    /// Keywords counting toward the music score
    pub music_keywords: Vec<String>,

    /// Near-certain music phrases (short-circuit to MUSIC)
    pub strong_music_indicators: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from raw word lists, lower-casing every entry.
    pub fn new(
        preaching_keywords: Vec<String>,
        strong_preaching_terms: Vec<String>,
        music_keywords: Vec<String>,
        strong_music_indicators: Vec<String>,
    ) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };
        Self {
            preaching_keywords: lower(preaching_keywords),
            strong_preaching_terms: lower(strong_preaching_terms),
            music_keywords: lower(music_keywords),
            strong_music_indicators: lower(strong_music_indicators),
        }
    }

    /// Count preaching keyword hits in `text` (lower-cased).
    ///
    /// Strong preaching terms count double; duplicates between the two
    /// tables are not double-counted beyond that. Table entries are
    /// lower-cased at match time, so tables supplied through deserialized
    /// configuration match regardless of their casing.
    pub fn preaching_score(&self, text: &str) -> u32 {
        let mut count = 0;
        for keyword in &self.preaching_keywords {
            let keyword = keyword.to_lowercase();
            if text.contains(keyword.as_str()) {
                count += 1;
                if self
                    .strong_preaching_terms
                    .iter()
                    .any(|s| s.to_lowercase() == keyword)
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count music keyword hits in `text` (lower-cased).
    pub fn music_score(&self, text: &str) -> u32 {
        self.music_keywords
            .iter()
            .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
            .count() as u32
    }

    /// True when `text` contains any strong music indicator.
    pub fn has_strong_music_indicator(&self, text: &str) -> bool {
        self.strong_music_indicators
            .iter()
            .any(|indicator| text.contains(indicator.to_lowercase().as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        let mut preaching = owned(PREACHING_KEYWORDS_EN);
        for word in PREACHING_KEYWORDS_FR {
            if !preaching.iter().any(|w| w == word) {
                preaching.push(word.to_string());
            }
        }
        Self {
            preaching_keywords: preaching,
            strong_preaching_terms: owned(STRONG_PREACHING_TERMS),
            music_keywords: owned(MUSIC_KEYWORDS),
            strong_music_indicators: owned(STRONG_MUSIC_INDICATORS),
        }
    }
}
