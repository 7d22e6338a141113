//! User-inclusion recognizer - explicit user-supplied PII terms.
//!
//! Every case-insensitive whole-word occurrence of a user-supplied literal
//! is emitted at confidence 1.0. Inclusion is an explicit override: the
//! common-word gatekeeper never applies; only a user exclusion can
//! suppress a match.

use std::sync::Arc;

use regex::Regex;

use crate::{Entity, EntityType, Lexicon, Recognizer, Result};

/// One user-supplied literal and the type it should be flagged as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionTerm {
    /// The literal word to find.
    pub literal: String,
    /// The entity type attached to every occurrence.
    pub entity_type: EntityType,
}

impl InclusionTerm {
    /// Create an inclusion term.
    #[must_use]
    pub fn new(literal: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            literal: literal.into(),
            entity_type,
        }
    }
}

/// Recognizer over an ordered collection of user-inclusion terms.
pub struct UserInclusionRecognizer {
    terms: Vec<(Regex, EntityType)>,
    lexicon: Arc<dyn Lexicon>,
}

impl UserInclusionRecognizer {
    /// Build from the externally supplied, ordered inclusion list.
    ///
    /// Empty literals are skipped with a warning.
    #[must_use]
    pub fn new(terms: Vec<InclusionTerm>, lexicon: Arc<dyn Lexicon>) -> Self {
        let mut compiled = Vec::with_capacity(terms.len());
        for term in terms {
            if term.literal.trim().is_empty() {
                log::warn!("inclusion: skipping empty literal");
                continue;
            }
            let pattern = format!(r"(?i)\b{}\b", regex::escape(&term.literal));
            match Regex::new(&pattern) {
                Ok(regex) => compiled.push((regex, term.entity_type)),
                Err(err) => {
                    log::warn!("inclusion: skipping literal {:?}: {err}", term.literal);
                }
            }
        }
        Self {
            terms: compiled,
            lexicon,
        }
    }
}

impl Recognizer for UserInclusionRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        for (regex, entity_type) in &self.terms {
            for m in regex.find_iter(text) {
                // Inclusion beats the common-word gatekeeper by design;
                // only an explicit user exclusion wins over it.
                if self.lexicon.is_user_excluded(m.as_str()) {
                    continue;
                }
                entities.push(Entity::new(
                    m.as_str(),
                    *entity_type,
                    m.start(),
                    m.end(),
                    1.0,
                ));
            }
        }
        Ok(entities)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        let mut types = Vec::new();
        for (_, t) in &self.terms {
            if !types.contains(t) {
                types.push(*t);
            }
        }
        types
    }

    fn name(&self) -> &'static str {
        "user-inclusion"
    }
}
