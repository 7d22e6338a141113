//! Gatekeeper capability interface.
//!
//! The dynamic suppression lists (common words, clinical terms, user
//! exclusions) are injected as a read-only trait rather than reached
//! through global state, so every recognizer stays a pure function of
//! `(text, static configuration)` and can be tested with fakes.

use std::collections::HashSet;

use crate::wordlists;

/// Read-only membership queries consulted by recognizers to suppress
/// false positives.
///
/// All three predicates are expected to be case-insensitive; callers pass
/// the word exactly as it appears in the text.
pub trait Lexicon: Send + Sync {
    /// True for ordinary English words that happen to capitalize at
    /// sentence boundaries.
    fn is_common_word(&self, word: &str) -> bool;

    /// True for clinical abbreviations/jargon resembling names.
    fn is_clinical_term(&self, word: &str) -> bool;

    /// True for words a user has explicitly marked as never-PII.
    fn is_user_excluded(&self, word: &str) -> bool;

    /// True if any gatekeeper suppresses this word.
    fn suppresses(&self, word: &str) -> bool {
        self.is_common_word(word) || self.is_clinical_term(word) || self.is_user_excluded(word)
    }
}

/// `HashSet`-backed [`Lexicon`] for configuration and tests.
///
/// Words are stored and queried lowercased.
#[derive(Debug, Clone, Default)]
pub struct SetLexicon {
    common: HashSet<String>,
    clinical: HashSet<String>,
    excluded: HashSet<String>,
}

impl SetLexicon {
    /// An empty lexicon: nothing is suppressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon seeded with the built-in common-word and clinical-term lists.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_common_words(wordlists::COMMON_WORDS.iter().copied())
            .with_clinical_terms(wordlists::CLINICAL_TERMS.iter().copied())
    }

    /// Add common words.
    #[must_use]
    pub fn with_common_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    /// Add clinical terms.
    #[must_use]
    pub fn with_clinical_terms<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clinical
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    /// Add user-excluded words.
    #[must_use]
    pub fn with_user_exclusions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }
}

impl Lexicon for SetLexicon {
    fn is_common_word(&self, word: &str) -> bool {
        self.common.contains(&word.to_lowercase())
    }

    fn is_clinical_term(&self, word: &str) -> bool {
        self.clinical.contains(&word.to_lowercase())
    }

    fn is_user_excluded(&self, word: &str) -> bool {
        self.excluded.contains(&word.to_lowercase())
    }
}
