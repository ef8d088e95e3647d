//! Textual identity markers for the target speaker.
//!
//! Church-affiliated channels post videos of many different speakers, so an
//! organization name alone must never authorize acceptance. Markers are
//! checked in three disjoint tiers; the first hit wins, and only the two
//! name tiers establish personal identity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Boost for a required-name match (full name or known misspelling).
pub const REQUIRED_NAME_BOOST: f64 = 0.30;

/// Boost for an acceptable-name match (title + name combination).
pub const ACCEPTABLE_NAME_BOOST: f64 = 0.25;

/// Contextual boost for a church-only match when a personal name is required.
pub const CHURCH_CONTEXT_BOOST: f64 = 0.10;

/// Identity boost for a church-only match under legacy (non-strict) matching.
pub const CHURCH_LEGACY_BOOST: f64 = 0.15;

/// Result of scanning text for identity markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityMatch {
    /// True when the match counts as identity proof
    pub has_identity: bool,

    /// Confidence boost contributed by the match strength
    pub boost: f64,

    /// True ONLY when the speaker's literal name was found,
    /// never for an organization-only match
    pub personal_name: bool,
}

impl IdentityMatch {
    /// No marker found at all.
    pub fn none() -> Self {
        Self {
            has_identity: false,
            boost: 0.0,
            personal_name: false,
        }
    }
}

/// Identity marker tables for one target speaker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IdentityMarkers {
    /// Full name and known misspellings (strongest match)
    pub required_names: Vec<String>,

    /// Title + name combinations, e.g. "pastor <name>" (good match)
    pub acceptable_names: Vec<String>,

    /// Organization/church names (context only, not identity proof)
    pub church_names: Vec<String>,
}

impl IdentityMarkers {
    /// Build marker tables from raw lists, lower-casing every entry.
    pub fn new(
        required_names: Vec<String>,
        acceptable_names: Vec<String>,
        church_names: Vec<String>,
    ) -> Self {
        let lower = |names: Vec<String>| -> Vec<String> {
            names.into_iter().map(|n| n.to_lowercase()).collect()
        };
        Self {
            required_names: lower(required_names),
            acceptable_names: lower(acceptable_names),
            church_names: lower(church_names),
        }
    }

    /// Derive a marker set from a speaker's name, optional title/church,
    /// and known aliases.
    ///
    /// Produces: full name + surname + aliases as required names; every
    /// common title (bilingual) combined with the full name, surname and
    /// first name as acceptable names; the church name plus its acronym as
    /// church names.
    pub fn for_speaker(
        name: &str,
        aliases: &[&str],
        primary_church: Option<&str>,
    ) -> Self {
        let name = name.to_lowercase();
        let parts: Vec<&str> = name.split_whitespace().collect();
        let (first_name, last_name) = match parts.as_slice() {
            [] => (name.as_str(), name.as_str()),
            [only] => (*only, *only),
            [first, .., last] => (*first, *last),
        };

        let mut required_names = vec![name.clone()];
        if last_name != name {
            required_names.push(last_name.to_string());
        }
        for alias in aliases {
            let alias = alias.to_lowercase();
            if !required_names.contains(&alias) {
                required_names.push(alias);
            }
        }

        const TITLES: &[&str] = &[
            "apostle", "apotre", "apôtre", "pastor", "pasteur",
            "bishop", "prophet", "evangelist", "reverend", "dr.",
        ];
        const DESCRIPTORS: &[&str] = &[
            "man of god", "servant of god", "serviteur de dieu", "homme de dieu",
        ];

        let mut acceptable_names = Vec::new();
        for title in TITLES {
            acceptable_names.push(format!("{title} {name}"));
            if last_name != name.as_str() {
                acceptable_names.push(format!("{title} {last_name}"));
                acceptable_names.push(format!("{title} {first_name}"));
            }
        }
        for descriptor in DESCRIPTORS {
            acceptable_names.push(format!("{descriptor} {name}"));
            if last_name != name.as_str() {
                acceptable_names.push(format!("{descriptor} {last_name}"));
            }
        }

        let mut church_names = Vec::new();
        if let Some(church) = primary_church {
            let church = church.to_lowercase();
            let words: Vec<&str> = church.split_whitespace().collect();
            if words.len() > 2 {
                let acronym: String = words
                    .iter()
                    .filter(|w| !matches!(**w, "of" | "the" | "and"))
                    .filter_map(|w| w.chars().next())
                    .collect();
                church_names.push(church.clone());
                church_names.push(acronym);
            } else {
                church_names.push(church);
            }
        }

        Self {
            required_names,
            acceptable_names,
            church_names,
        }
    }

    /// Scan `text` (lower-cased) for identity markers.
    ///
    /// Tiers are checked in fixed priority order, first hit wins:
    /// required names, then acceptable names, then church names. When
    /// `require_personal_name` is set (the default), a church-only match
    /// contributes a small contextual boost but is NOT identity proof.
    ///
    /// Entries are lower-cased at match time, so tables supplied through
    /// deserialized configuration match regardless of their casing.
    pub fn scan(&self, text: &str, require_personal_name: bool) -> IdentityMatch {
        for name in &self.required_names {
            if text.contains(name.to_lowercase().as_str()) {
                return IdentityMatch {
                    has_identity: true,
                    boost: REQUIRED_NAME_BOOST,
                    personal_name: true,
                };
            }
        }

        for name in &self.acceptable_names {
            if text.contains(name.to_lowercase().as_str()) {
                return IdentityMatch {
                    has_identity: true,
                    boost: ACCEPTABLE_NAME_BOOST,
                    personal_name: true,
                };
            }
        }

        for church in &self.church_names {
            if text.contains(church.to_lowercase().as_str()) {
                return if require_personal_name {
                    IdentityMatch {
                        has_identity: false,
                        boost: CHURCH_CONTEXT_BOOST,
                        personal_name: false,
                    }
                } else {
                    // Legacy behavior: church name counts as identity
                    IdentityMatch {
                        has_identity: true,
                        boost: CHURCH_LEGACY_BOOST,
                        personal_name: false,
                    }
                };
            }
        }

        IdentityMatch::none()
    }
}

impl Default for IdentityMarkers {
    /// Markers for the default target speaker of the original pipeline.
    fn default() -> Self {
        let owned = |names: &[&str]| -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        };
        Self {
            required_names: owned(&[
                "narcisse majila",
                "naricisse majila", // common misspelling
            ]),
            acceptable_names: owned(&[
                "apostle narcisse",
                "apotre narcisse",
                "apôtre narcisse",
                "pastor narcisse",
                "pasteur narcisse",
                "apostle majila",
                "apotre majila",
                "pastor majila",
                "pasteur majila",
                "man of god narcisse",
                "servant of god narcisse",
                "serviteur de dieu narcisse",
            ]),
            church_names: owned(&[
                "ramah full gospel",
                "ramah pretoria",
                "rfgc pretoria",
                "ramah church",
            ]),
        }
    }
}
