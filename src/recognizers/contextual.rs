//! Contextual extractors - names anchored by surrounding lexical context.
//!
//! Two recognizers live here:
//!
//! - [`TitleNameRecognizer`]: an honorific ("Dr", "Mrs") immediately
//!   followed by 1-3 capitalized words. The captured name, not the title,
//!   becomes the entity.
//! - [`RelationshipNameRecognizer`]: a relationship word ("sister",
//!   "flatmate") followed by a capitalized name, with a second list-pass
//!   that catches comma/"and"-joined constructions like
//!   "mother Sofia, sister Rachel, and friend David".
//!
//! Gatekeeper filters apply to the captured name only, never the anchor.

use std::sync::Arc;

use regex::Regex;

use crate::{wordlists, Entity, EntityType, Lexicon, Recognizer, Result, Span};

const TITLE_CONFIDENCE: f64 = 0.9;
const RELATIONSHIP_CONFIDENCE: f64 = 0.9;
// The list pass admits shorter, less certain captures.
const RELATIONSHIP_LIST_CONFIDENCE: f64 = 0.85;

/// Title-anchored name extractor.
pub struct TitleNameRecognizer {
    pattern: Regex,
    lexicon: Arc<dyn Lexicon>,
}

impl TitleNameRecognizer {
    /// Build the extractor from the built-in title list.
    #[must_use]
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        let titles = wordlists::TITLES.join("|");
        let pattern = Regex::new(&format!(
            r"\b(?:{titles})\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){{0,2}})\b"
        ))
        .expect("title pattern is invalid");
        Self { pattern, lexicon }
    }
}

impl Recognizer for TitleNameRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            let name = match caps.get(1) {
                Some(m) => m,
                None => continue,
            };
            if self.lexicon.suppresses(name.as_str()) {
                continue;
            }
            entities.push(Entity::new(
                name.as_str(),
                EntityType::Person,
                name.start(),
                name.end(),
                TITLE_CONFIDENCE,
            ));
        }
        Ok(entities)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        vec![EntityType::Person]
    }

    fn name(&self) -> &'static str {
        "title-context"
    }
}

/// Relationship-anchored name extractor.
pub struct RelationshipNameRecognizer {
    // One pattern per relationship word: anchor (case-insensitive) then
    // 1-2 capitalized words (case-sensitive).
    single_patterns: Vec<Regex>,
    // Combined alternation capturing exactly one capitalized word, to pick
    // up list constructions the per-word pass leaves behind.
    list_pattern: Regex,
    lexicon: Arc<dyn Lexicon>,
}

impl RelationshipNameRecognizer {
    /// Build the extractor from the built-in relationship-word list.
    #[must_use]
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        let single_patterns = wordlists::RELATIONSHIP_WORDS
            .iter()
            .map(|word| {
                Regex::new(&format!(
                    r"\b(?i:{})\b\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
                    regex::escape(word)
                ))
                .expect("relationship pattern is invalid")
            })
            .collect();

        let all = wordlists::RELATIONSHIP_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let list_pattern = Regex::new(&format!(r"\b(?i:{all})\b\s+([A-Z][a-z]+)\b"))
            .expect("relationship list pattern is invalid");

        Self {
            single_patterns,
            list_pattern,
            lexicon,
        }
    }

    fn push_capture(
        &self,
        entities: &mut Vec<Entity>,
        name: regex::Match<'_>,
        confidence: f64,
    ) {
        if self.lexicon.suppresses(name.as_str()) {
            return;
        }
        entities.push(Entity::new(
            name.as_str(),
            EntityType::Person,
            name.start(),
            name.end(),
            confidence,
        ));
    }
}

impl Recognizer for RelationshipNameRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();

        for pattern in &self.single_patterns {
            for caps in pattern.captures_iter(text) {
                if let Some(name) = caps.get(1) {
                    self.push_capture(&mut entities, name, RELATIONSHIP_CONFIDENCE);
                }
            }
        }

        // List pass only contributes captures the single pass missed.
        for caps in self.list_pattern.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                let span = Span::new(name.start(), name.end());
                if entities
                    .iter()
                    .any(|e| e.positions.iter().any(|p| p.overlaps(&span)))
                {
                    continue;
                }
                self.push_capture(&mut entities, name, RELATIONSHIP_LIST_CONFIDENCE);
            }
        }

        Ok(entities)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        vec![EntityType::Person]
    }

    fn name(&self) -> &'static str {
        "relationship-context"
    }
}
