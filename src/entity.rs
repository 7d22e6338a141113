//! Entity types and structures for PII detection.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte-offset range over the source text.
///
/// Offsets are byte positions (not grapheme or word indices) so that
/// downstream slicing of the original text is exact and consistent
/// across all recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check that this span is well-formed within a text of the given length.
    #[must_use]
    pub fn is_valid_for(&self, text_len: usize) -> bool {
        self.start < self.end && self.end <= text_len
    }

    /// Check if this span overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// Entity type classification.
///
/// The closed set of PII categories this pipeline emits. Person variants
/// (client/provider/other) exist for downstream refinement; the core
/// recognizers emit the generic `Person` and leave role assignment to the
/// external aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Person name, role not yet determined
    Person,
    /// The client/patient the document is about
    PersonClient,
    /// A clinician or other care provider
    PersonProvider,
    /// Any other person (family, friends)
    PersonOther,
    /// Place name, address, suburb, city
    Location,
    /// Organization (health board, clinic, employer)
    Organization,
    /// Date expression
    Date,
    /// Phone number or email address
    Contact,
    /// Medical or administrative identifier (NHI, ACC, MRN)
    Identifier,
    /// Generic numeric run, lowest-priority catch-all
    Number,
}

impl EntityType {
    /// Capability flag consulted by the name-extension engine: true for
    /// every person variant.
    #[must_use]
    pub fn is_person(&self) -> bool {
        matches!(
            self,
            EntityType::Person
                | EntityType::PersonClient
                | EntityType::PersonProvider
                | EntityType::PersonOther
        )
    }

    /// Convert to a stable label string.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::PersonClient => "PERSON_CLIENT",
            EntityType::PersonProvider => "PERSON_PROVIDER",
            EntityType::PersonOther => "PERSON_OTHER",
            EntityType::Location => "LOCATION",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Date => "DATE",
            EntityType::Contact => "CONTACT",
            EntityType::Identifier => "IDENTIFIER",
            EntityType::Number => "NUMBER",
        }
    }

    /// Parse from a label string. Anything unrecognized returns `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "PERSON" | "PER" => Some(EntityType::Person),
            "PERSON_CLIENT" => Some(EntityType::PersonClient),
            "PERSON_PROVIDER" => Some(EntityType::PersonProvider),
            "PERSON_OTHER" => Some(EntityType::PersonOther),
            "LOCATION" | "LOC" | "GPE" => Some(EntityType::Location),
            "ORGANIZATION" | "ORG" => Some(EntityType::Organization),
            "DATE" => Some(EntityType::Date),
            "CONTACT" | "PHONE" | "EMAIL" => Some(EntityType::Contact),
            "IDENTIFIER" | "ID" => Some(EntityType::Identifier),
            "NUMBER" | "NUM" => Some(EntityType::Number),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A detected PII candidate.
///
/// Entities are immutable value objects: the extension engine never mutates
/// an entity in place, it produces a new one with recomputed text/positions.
/// `replacement_code` is populated later by the external redaction layer and
/// is always empty when emitted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The exact substring matched (byte-for-byte, case included).
    pub text: String,
    /// Entity type classification.
    pub entity_type: EntityType,
    /// One or more spans locating `text` in the source.
    pub positions: Vec<Span>,
    /// Placeholder for the redaction code; empty as emitted here.
    pub replacement_code: String,
    /// Confidence score, clamped to `[0.0, 1.0]`.
    pub confidence: f64,
}

impl Entity {
    /// Create a new single-span entity.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        entity_type: EntityType,
        start: usize,
        end: usize,
        confidence: f64,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type,
            positions: vec![Span::new(start, end)],
            replacement_code: String::new(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// The first (primary) span, if any.
    #[must_use]
    pub fn primary_span(&self) -> Option<Span> {
        self.positions.first().copied()
    }

    /// Check if any span of this entity overlaps any span of another.
    #[must_use]
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.positions
            .iter()
            .any(|a| other.positions.iter().any(|b| a.overlaps(b)))
    }

    /// Verify the span-validity invariant against a specific text instance:
    /// at least one position slices `text` to exactly `self.text`.
    #[must_use]
    pub fn is_anchored_in(&self, text: &str) -> bool {
        self.positions.iter().any(|s| {
            s.is_valid_for(text.len())
                && text.is_char_boundary(s.start)
                && text.is_char_boundary(s.end)
                && text[s.start..s.end] == self.text
        })
    }
}
