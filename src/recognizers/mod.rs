//! Recognizer implementations.
//!
//! Each recognizer is an independent detector over the raw text; the
//! pipeline runs several of them and concatenates their output. None of
//! them deduplicate against each other - overlap resolution belongs to
//! the caller.
//!
//! | Recognizer | Finds | Confidence |
//! |------------|-------|------------|
//! | [`RuleBasedRecognizer`] | identifiers, dates, contact details, addresses, numbers | per rule |
//! | [`DictionaryNameRecognizer`] | te reo Māori names, phonetic name shapes | 0.95 / 0.6 |
//! | [`TitleNameRecognizer`] | names after honorifics | 0.9 |
//! | [`RelationshipNameRecognizer`] | names after relationship words | 0.9 / 0.85 |
//! | [`UserInclusionRecognizer`] | user-supplied literals | 1.0 |
//! | [`TaggerRecognizer`] | statistical tagger output, validated | tagger's own |

pub mod contextual;
pub mod dictionary;
pub mod inclusion;
pub mod rules;
pub mod tagger;

pub use contextual::{RelationshipNameRecognizer, TitleNameRecognizer};
pub use dictionary::DictionaryNameRecognizer;
pub use inclusion::{InclusionTerm, UserInclusionRecognizer};
pub use rules::{Rule, RuleBasedRecognizer};
pub use tagger::{
    MockTagger, TagCategory, TaggedSpan, Tagger, TaggerRecognizer, DEFAULT_TAGGER_THRESHOLD,
};
