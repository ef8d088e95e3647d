//! Bag-of-words language detection.
//!
//! Secondary output, fully independent of the classification verdict: it is
//! computed for every video, including rejected ones, for audit purposes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use sermon_models::Language;

/// Majority margin required to declare a language from word counts.
const CLEAR_MAJORITY_MARGIN: usize = 2;

/// French indicator words.
pub const FRENCH_INDICATORS: &[&str] = &[
    "predication", "message", "enseignement", "culte", "priere",
    "delivrance", "guerison", "parole", "dieu", "eglise",
    "partie", "jour", "nuit", "dimanche", "vendredi",
    "apotre", "pasteur", "frere", "soeur",
    "le", "la", "les", "du", "de", "des", "et", "ou", "avec",
];

/// English indicator words.
pub const ENGLISH_INDICATORS: &[&str] = &[
    "preaching", "sermon", "teaching", "service", "prayer",
    "deliverance", "healing", "word", "god", "church",
    "part", "day", "night", "sunday", "friday",
    "apostle", "pastor", "brother", "sister",
    "the", "and", "of", "in", "for", "with", "by",
];

/// Strong single-word French cues used when word counts are inconclusive.
pub const FRENCH_STRONG_CUES: &[&str] = &["predication", "culte", "enseignement", "priere"];

/// Strong single-word English cues used when word counts are inconclusive.
pub const ENGLISH_STRONG_CUES: &[&str] = &["preaching", "sermon", "service", "teaching"];

/// Indicator word lists for language detection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageLexicon {
    pub french_words: Vec<String>,
    pub english_words: Vec<String>,

    /// Fallback cues checked by substring when counts are inconclusive
    pub french_cues: Vec<String>,
    pub english_cues: Vec<String>,
}

impl Default for LanguageLexicon {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        Self {
            french_words: owned(FRENCH_INDICATORS),
            english_words: owned(ENGLISH_INDICATORS),
            french_cues: owned(FRENCH_STRONG_CUES),
            english_cues: owned(ENGLISH_STRONG_CUES),
        }
    }
}

/// Detect whether `text` is primarily French or English.
///
/// Pure function: set-intersects the text's words against each indicator
/// list and requires a clear majority (margin > 2); otherwise checks the
/// strong single-word cues; otherwise `Unknown`.
pub fn detect_language(text: &str, lexicon: &LanguageLexicon) -> Language {
    let text = text.to_lowercase();
    let words: HashSet<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    // Entries are lower-cased at match time so deserialized word lists
    // match regardless of their casing.
    let french_count = lexicon
        .french_words
        .iter()
        .filter(|w| words.contains(w.to_lowercase().as_str()))
        .count();
    let english_count = lexicon
        .english_words
        .iter()
        .filter(|w| words.contains(w.to_lowercase().as_str()))
        .count();

    if french_count > english_count + CLEAR_MAJORITY_MARGIN {
        return Language::French;
    }
    if english_count > french_count + CLEAR_MAJORITY_MARGIN {
        return Language::English;
    }

    if lexicon
        .french_cues
        .iter()
        .any(|cue| text.contains(cue.to_lowercase().as_str()))
    {
        return Language::French;
    }
    if lexicon
        .english_cues
        .iter()
        .any(|cue| text.contains(cue.to_lowercase().as_str()))
    {
        return Language::English;
    }

    Language::Unknown
}
