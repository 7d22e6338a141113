//! Dictionary/phonetic name recognizer.
//!
//! Two independent sub-scans over the same text, results concatenated:
//!
//! 1. **Dictionary lookup**: whitespace tokens, stripped of surrounding
//!    punctuation, are tested against curated te reo Māori first-name and
//!    surname sets. Hits are located with a monotonic forward scan so a
//!    repeated token maps to its successive occurrences, and emitted at
//!    high confidence.
//! 2. **Phonetic scan**: a single pattern for capitalized tokens with
//!    `wh`/`ng` consonant clusters or unusually high vowel density. Tokens
//!    the dictionary owns are dropped here, as are entries of a curated
//!    false-positive list. Survivors are emitted at a markedly lower
//!    confidence.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{wordlists, Entity, EntityType, Recognizer, Result};

const DICTIONARY_CONFIDENCE: f64 = 0.95;
const PHONETIC_CONFIDENCE: f64 = 0.6;

static PHONETIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Wh|Ng)[a-z]+\b|\b[A-Z][a-z]*(?:wh|ng)[a-z]+\b|\b[A-Z][aeiouAEIOU]{2,}[a-z]*\b",
    )
    .expect("phonetic pattern is invalid")
});

/// Punctuation stripped from token edges before dictionary lookup.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']',
];

/// Dictionary + phonetic name recognizer.
pub struct DictionaryNameRecognizer {
    names: HashSet<&'static str>,
    false_positives: HashSet<&'static str>,
}

impl DictionaryNameRecognizer {
    /// Build from the built-in name sets.
    #[must_use]
    pub fn new() -> Self {
        let names = wordlists::MAORI_FIRST_NAMES
            .iter()
            .chain(wordlists::MAORI_SURNAMES)
            .copied()
            .collect();
        let false_positives = wordlists::PHONETIC_FALSE_POSITIVES.iter().copied().collect();
        Self {
            names,
            false_positives,
        }
    }

    fn dictionary_scan(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut cursor = 0;

        for word in text.split_whitespace() {
            // Monotonic scan position: never rematch an earlier duplicate.
            let Some(rel) = text[cursor..].find(word) else {
                continue;
            };
            let word_start = cursor + rel;
            cursor = word_start + word.len();

            let clean = word.trim_matches(|c| EDGE_PUNCTUATION.contains(&c));
            if clean.is_empty() || !self.names.contains(clean) {
                continue;
            }
            // Exact span of the cleaned token within the raw one.
            let offset = word.find(clean).unwrap_or(0);
            let start = word_start + offset;
            entities.push(Entity::new(
                clean,
                EntityType::Person,
                start,
                start + clean.len(),
                DICTIONARY_CONFIDENCE,
            ));
        }

        entities
    }

    fn phonetic_scan(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        for m in PHONETIC.find_iter(text) {
            let word = m.as_str();
            // Dictionary lookup owns its names; this pass only adds shapes.
            if self.names.contains(word) || self.false_positives.contains(word) {
                continue;
            }
            entities.push(Entity::new(
                word,
                EntityType::Person,
                m.start(),
                m.end(),
                PHONETIC_CONFIDENCE,
            ));
        }
        entities
    }
}

impl Default for DictionaryNameRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for DictionaryNameRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = self.dictionary_scan(text);
        entities.extend(self.phonetic_scan(text));
        Ok(entities)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        vec![EntityType::Person]
    }

    fn name(&self) -> &'static str {
        "dictionary-phonetic"
    }
}
