//! # clinscan
//!
//! PII detection for clinical free text.
//!
//! Finds personally identifying information - names, addresses, phone
//! numbers, clinical identifiers, dates - in unstructured clinical notes
//! and reports it as typed, positioned entities. Detection only: this
//! crate never rewrites the text, it tells you exactly where the PII is.
//!
//! ## Pipeline shape
//!
//! Detection is a stack of independent [`Recognizer`]s over the same
//! text, each contributing candidate entities with byte-offset spans and
//! a confidence score:
//!
//! - [`RuleBasedRecognizer`] - regex rule tables for identifiers
//!   (NHI numbers, ACC claims), dates, phone numbers, emails, street
//!   addresses, and standalone number runs
//! - [`DictionaryNameRecognizer`] - curated te reo Māori name sets plus
//!   a phonetic scan for name-shaped words
//! - [`TitleNameRecognizer`] / [`RelationshipNameRecognizer`] - names
//!   anchored by honorifics ("Dr Smith") or relationship words
//!   ("his sister Margaret")
//! - [`UserInclusionRecognizer`] - user-supplied terms, always flagged
//! - [`TaggerRecognizer`] - wraps an injected statistical [`Tagger`] and
//!   validates its output against the word-knowledge gatekeepers
//!
//! After baseline detection, [`extend_person_names`] recovers full names
//! the tagger under-segmented ("Hayden" -> "Hayden Hooper") using lexical
//! evidence from the same document.
//!
//! ## Quick start
//!
//! ```rust
//! use clinscan::{Recognizer, RuleBasedRecognizer};
//!
//! let ner = RuleBasedRecognizer::identifiers();
//! let entities = ner.recognize("NHI ABC1234, seen 12/03/2024.").unwrap();
//! assert!(entities.iter().any(|e| e.text == "ABC1234"));
//! ```
//!
//! ## Name extension
//!
//! ```rust
//! use clinscan::{extend_person_names, Entity, EntityType, SetLexicon};
//!
//! let text = "Hayden seen today. Contact Hayden Hooper for details.";
//! let baseline = vec![Entity::new("Hayden", EntityType::Person, 0, 6, 0.8)];
//! let lexicon = SetLexicon::standard();
//! let extended = extend_person_names(text, baseline, &lexicon);
//! assert_eq!(extended[0].text, "Hayden Hooper");
//! ```
//!
//! ## Design notes
//!
//! - **Byte offsets**: spans index the original `&str` directly;
//!   `&text[e.positions[0].start..e.positions[0].end] == e.text` holds for
//!   every emitted entity.
//! - **Injected word knowledge**: the common-word, clinical-term, and
//!   user-exclusion gatekeepers live behind the [`Lexicon`] trait, so the
//!   recognizers stay pure and testable.
//! - **Graceful degradation**: a failing statistical tagger logs a
//!   warning and contributes nothing; the rule-based recognizers still
//!   run. A malformed rule pattern is dropped at construction, never
//!   panicked on.

#![warn(missing_docs)]

mod entity;
mod error;
pub mod extension;
mod lexicon;
pub mod recognizers;
pub mod wordlists;

pub use entity::{Entity, EntityType, Span};
pub use error::{Error, Result};
pub use extension::extend_person_names;
pub use lexicon::{Lexicon, SetLexicon};
pub use recognizers::{
    DictionaryNameRecognizer, InclusionTerm, MockTagger, RelationshipNameRecognizer, Rule,
    RuleBasedRecognizer, TagCategory, TaggedSpan, Tagger, TaggerRecognizer, TitleNameRecognizer,
    UserInclusionRecognizer, DEFAULT_TAGGER_THRESHOLD,
};

/// Trait for entity detectors.
///
/// Every detector in the pipeline implements this; callers run any subset
/// and concatenate the results. Implementations must be `Send + Sync` so
/// a single instance can serve concurrent scans - `recognize` takes
/// `&self` and all per-call state lives on the stack.
pub trait Recognizer: Send + Sync {
    /// Detect entities in `text`.
    ///
    /// Returned spans are byte offsets into `text`, and every entity's
    /// `text` equals the slice its primary span denotes.
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;

    /// Entity types this recognizer can emit.
    fn supported_types(&self) -> Vec<EntityType>;

    /// Short identifier for logs and diagnostics.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use clinscan::prelude::*;
    //!
    //! let ner = RuleBasedRecognizer::contact();
    //! let entities = ner.recognize("Call 021 555 1234").unwrap();
    //! assert!(!entities.is_empty());
    //! ```
    pub use crate::entity::{Entity, EntityType, Span};
    pub use crate::error::{Error, Result};
    pub use crate::extension::extend_person_names;
    pub use crate::lexicon::{Lexicon, SetLexicon};
    pub use crate::recognizers::{
        DictionaryNameRecognizer, InclusionTerm, MockTagger, RelationshipNameRecognizer,
        RuleBasedRecognizer, TaggerRecognizer, TitleNameRecognizer, UserInclusionRecognizer,
    };
    pub use crate::Recognizer;
}
