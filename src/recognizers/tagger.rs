//! Statistical tagger wrapper - baseline person/place/org extraction.
//!
//! The tagger itself is external (an ML token tagger reached through the
//! [`Tagger`] trait). This wrapper owns everything around it:
//!
//! 1. tab-to-newline substitution before tagging, 1-for-1, so offsets on
//!    the substituted text remain valid for the original (and the tagger
//!    stops joining names across spreadsheet-pasted columns);
//! 2. the caller-supplied confidence threshold (callers typically run an
//!    initial high-precision pass and an optional lower-threshold deep
//!    pass over the same text);
//! 3. an ordered validation pipeline of named predicates - particle-aware
//!    middle-token check, then the three gatekeepers - where any failure
//!    drops the candidate;
//! 4. category mapping (personal-name -> Person, place-name -> Location,
//!    organization-name -> Organization; everything else dropped);
//! 5. graceful degradation: a tagger failure yields an empty result, never
//!    an error to the caller.

use std::sync::Arc;

use crate::{wordlists, Entity, EntityType, Lexicon, Recognizer, Result, Span};

/// Default threshold for the high-precision pass.
pub const DEFAULT_TAGGER_THRESHOLD: f64 = 0.7;

/// Tag categories of interest from the external tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// Personal name.
    PersonalName,
    /// Place name.
    PlaceName,
    /// Organization name.
    OrganizationName,
    /// Any other tagger category; always dropped by the wrapper.
    Other,
}

/// One tagged span as reported by the external tagger.
///
/// `confidence` is the tagger's hypothesis weight for `category` at this
/// position, drawn from its per-token confidence distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedSpan {
    /// Start byte offset in the tagged text.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Tag category.
    pub category: TagCategory,
    /// Hypothesis confidence for the category, in `[0, 1]`.
    pub confidence: f64,
}

impl TaggedSpan {
    /// Create a tagged span.
    #[must_use]
    pub fn new(start: usize, end: usize, category: TagCategory, confidence: f64) -> Self {
        Self {
            start,
            end,
            category,
            confidence,
        }
    }
}

/// The external statistical tagger interface.
///
/// Implementations run word-granularity tagging over the given text and
/// report spans with categories and confidences. Offsets must be byte
/// offsets into exactly the text passed in.
pub trait Tagger: Send + Sync {
    /// Tag the text.
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>>;

    /// Tagger identifier, for diagnostics.
    fn name(&self) -> &'static str {
        "tagger"
    }
}

/// A scripted tagger for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    spans: Vec<TaggedSpan>,
    fail: bool,
}

impl MockTagger {
    /// A mock returning no spans.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spans to return.
    #[must_use]
    pub fn with_spans(mut self, spans: Vec<TaggedSpan>) -> Self {
        self.spans = spans;
        self
    }

    /// Make `tag` return an error, to exercise degradation paths.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Tagger for MockTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedSpan>> {
        if self.fail {
            return Err(crate::Error::tagger("mock tagger failure"));
        }
        Ok(self.spans.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Wrapper that turns raw tagger output into validated baseline entities.
pub struct TaggerRecognizer {
    tagger: Box<dyn Tagger>,
    lexicon: Arc<dyn Lexicon>,
}

impl TaggerRecognizer {
    /// Wrap an external tagger with the shared gatekeeper lexicon.
    #[must_use]
    pub fn new(tagger: Box<dyn Tagger>, lexicon: Arc<dyn Lexicon>) -> Self {
        Self { tagger, lexicon }
    }

    /// Run the tagger and keep spans at or above `min_confidence`.
    ///
    /// A tagger failure degrades to an empty result.
    pub fn recognize_with_threshold(
        &self,
        text: &str,
        min_confidence: f64,
    ) -> Result<Vec<Entity>> {
        // '\t' and '\n' are both one byte, so every offset computed on the
        // substituted text is valid for the original.
        let substituted = text.replace('\t', "\n");

        let spans = match self.tagger.tag(&substituted) {
            Ok(spans) => spans,
            Err(err) => {
                log::warn!(
                    "tagger {} failed, returning no entities: {err}",
                    self.tagger.name()
                );
                return Ok(Vec::new());
            }
        };

        let mut entities = Vec::new();
        for tagged in spans {
            if tagged.confidence < min_confidence {
                continue;
            }
            let span = Span::new(tagged.start, tagged.end);
            // A single corrupt span must not invalidate the whole list.
            if !span.is_valid_for(text.len())
                || !text.is_char_boundary(span.start)
                || !text.is_char_boundary(span.end)
            {
                log::warn!(
                    "tagger {} reported invalid span {}..{}, dropping",
                    self.tagger.name(),
                    tagged.start,
                    tagged.end
                );
                continue;
            }

            let entity_type = match tagged.category {
                TagCategory::PersonalName => EntityType::Person,
                TagCategory::PlaceName => EntityType::Location,
                TagCategory::OrganizationName => EntityType::Organization,
                TagCategory::Other => continue,
            };

            let surface = &text[span.start..span.end];
            if !self.validates(surface) {
                continue;
            }

            entities.push(Entity::new(
                surface,
                entity_type,
                span.start,
                span.end,
                tagged.confidence,
            ));
        }

        Ok(entities)
    }

    /// The ordered validation pipeline; any failing predicate drops the
    /// candidate.
    fn validates(&self, surface: &str) -> bool {
        has_valid_middle_tokens(surface)
            && !self.lexicon.is_common_word(surface)
            && !self.lexicon.is_clinical_term(surface)
            && !self.lexicon.is_user_excluded(surface)
    }
}

/// Middle tokens of a 3+ token candidate must be capitalized or a known
/// lowercase name particle; anything else means the tagger glued separate
/// phrases together ("Person asked Other").
fn has_valid_middle_tokens(surface: &str) -> bool {
    let tokens: Vec<&str> = surface.split_whitespace().collect();
    if tokens.len() < 3 {
        return true;
    }
    tokens[1..tokens.len() - 1].iter().all(|token| {
        token.chars().next().is_some_and(char::is_uppercase)
            || wordlists::NAME_PARTICLES.contains(&token.to_lowercase().as_str())
    })
}

impl Recognizer for TaggerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        self.recognize_with_threshold(text, DEFAULT_TAGGER_THRESHOLD)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        vec![
            EntityType::Person,
            EntityType::Location,
            EntityType::Organization,
        ]
    }

    fn name(&self) -> &'static str {
        "tagger"
    }
}
