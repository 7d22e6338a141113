//! Rule-based recognizer - ordered `(pattern, type, confidence)` tables.
//!
//! One engine, parameterized by a rule table. Each rule scans the full text
//! independently (leftmost, non-overlapping matches within a rule; no
//! suppression between rules) and emits entities with the rule's fixed type
//! and confidence. Matching is case-sensitive exactly as the pattern is
//! written, which is what distinguishes uppercase ID codes from prose.
//!
//! A malformed pattern is dropped at construction with a warning; one bad
//! rule never disables the others.

use regex::Regex;

use crate::{Entity, EntityType, Recognizer, Result};

/// A rule definition: pattern + entity type + confidence + name.
///
/// `filter` is an optional post-match predicate for constraints the `regex`
/// crate cannot express without lookaround (e.g. "at least one letter AND
/// one digit"). A match failing the filter is simply not emitted.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Rule name, used in drop warnings.
    pub name: &'static str,
    /// The regex source.
    pub pattern: &'static str,
    /// The entity type to assign to matches.
    pub entity_type: EntityType,
    /// Fixed confidence for every match of this rule.
    pub confidence: f64,
    /// Optional post-match validation predicate.
    pub filter: Option<fn(&str) -> bool>,
}

impl Rule {
    /// Define a rule with no post-match filter.
    #[must_use]
    pub const fn new(
        name: &'static str,
        pattern: &'static str,
        entity_type: EntityType,
        confidence: f64,
    ) -> Self {
        Self {
            name,
            pattern,
            entity_type,
            confidence,
            filter: None,
        }
    }

    /// Define a rule with a post-match filter.
    #[must_use]
    pub const fn with_filter(
        name: &'static str,
        pattern: &'static str,
        entity_type: EntityType,
        confidence: f64,
        filter: fn(&str) -> bool,
    ) -> Self {
        Self {
            name,
            pattern,
            entity_type,
            confidence,
            filter: Some(filter),
        }
    }
}

struct CompiledRule {
    name: &'static str,
    regex: Regex,
    entity_type: EntityType,
    confidence: f64,
    filter: Option<fn(&str) -> bool>,
}

/// Rule-based recognizer over an ordered rule table.
pub struct RuleBasedRecognizer {
    label: &'static str,
    rules: Vec<CompiledRule>,
}

impl RuleBasedRecognizer {
    /// Build a recognizer from an ordered rule table.
    ///
    /// Rules whose pattern fails to compile are skipped with a warning.
    #[must_use]
    pub fn new(label: &'static str, rules: &[Rule]) -> Self {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            match Regex::new(rule.pattern) {
                Ok(regex) => compiled.push(CompiledRule {
                    name: rule.name,
                    regex,
                    entity_type: rule.entity_type,
                    confidence: rule.confidence,
                    filter: rule.filter,
                }),
                Err(err) => {
                    log::warn!("{label}: dropping malformed rule {}: {err}", rule.name);
                }
            }
        }
        Self { label, rules: compiled }
    }

    /// Number of rules that survived compilation.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Numeric catch-all: digit runs likely to be redactable numbers.
    ///
    /// Lowest confidence tier, intended to be shadowed by the more specific
    /// date/contact/identifier recognizers downstream.
    #[must_use]
    pub fn numbers() -> Self {
        Self::new("numbers", NUMBER_RULES)
    }

    /// Date forms. `detect_bare_years` additionally enables the bare
    /// 4-digit year rule, which is off by default because it false-positives
    /// on ordinary counts and codes.
    #[must_use]
    pub fn dates(detect_bare_years: bool) -> Self {
        if detect_bare_years {
            Self::new("dates", DATE_RULES_WITH_YEARS)
        } else {
            Self::new("dates", DATE_RULES)
        }
    }

    /// Email addresses and New Zealand phone numbers.
    #[must_use]
    pub fn contact() -> Self {
        Self::new("contact", CONTACT_RULES)
    }

    /// Street addresses plus curated suburb/city/hospital/health-board names.
    #[must_use]
    pub fn addresses() -> Self {
        Self::new("addresses", ADDRESS_RULES)
    }

    /// Fixed-shape medical and administrative identifiers (NHI, ACC, MRN)
    /// plus a low-confidence alphanumeric-code fallback.
    #[must_use]
    pub fn identifiers() -> Self {
        Self::new("identifiers", IDENTIFIER_RULES)
    }
}

impl Recognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                if let Some(filter) = rule.filter {
                    if !filter(m.as_str()) {
                        continue;
                    }
                }
                entities.push(Entity::new(
                    m.as_str(),
                    rule.entity_type,
                    m.start(),
                    m.end(),
                    rule.confidence,
                ));
            }
        }
        Ok(entities)
    }

    fn supported_types(&self) -> Vec<EntityType> {
        let mut types = Vec::new();
        for rule in &self.rules {
            if !types.contains(&rule.entity_type) {
                types.push(rule.entity_type);
            }
        }
        types
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// At least one ASCII letter and one ASCII digit.
fn has_letter_and_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic()) && s.chars().any(|c| c.is_ascii_digit())
}

// =============================================================================
// Rule tables
// =============================================================================

const NUMBER_RULES: &[Rule] = &[
    // 123-456, 12/34/5678, 12.345
    Rule::new(
        "NUM_SEPARATED",
        r"\b\d{2,}(?:[-/.]\d+)+\b",
        EntityType::Number,
        0.5,
    ),
    // 123 456 789 (space-grouped)
    Rule::new(
        "NUM_GROUPED",
        r"\b\d{1,3}(?: \d{3})+\b",
        EntityType::Number,
        0.5,
    ),
    // 1-234, 1/23 (single leading digit + separator run)
    Rule::new(
        "NUM_SHORT_SEPARATED",
        r"\b\d(?:[-/.]\d+)+\b",
        EntityType::Number,
        0.45,
    ),
    // bare long digit run
    Rule::new("NUM_BARE", r"\b\d{4,}\b", EntityType::Number, 0.4),
];

const DATE_RULES: &[Rule] = &[
    Rule::new(
        "DATE_NUMERIC",
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
        EntityType::Date,
        0.95,
    ),
    Rule::new(
        "DATE_ISO",
        r"\b\d{4}-\d{2}-\d{2}\b",
        EntityType::Date,
        0.95,
    ),
    Rule::new(
        "DATE_DAY_MONTH",
        r"\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\.?(?:\s+\d{4})?\b",
        EntityType::Date,
        0.9,
    ),
    Rule::new(
        "DATE_MONTH_DAY",
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s*\d{4})?\b",
        EntityType::Date,
        0.9,
    ),
];

const DATE_RULES_WITH_YEARS: &[Rule] = &[
    DATE_RULES[0],
    DATE_RULES[1],
    DATE_RULES[2],
    DATE_RULES[3],
    // False-positive prone; only enabled on request.
    Rule::new(
        "DATE_BARE_YEAR",
        r"\b(?:19|20)\d{2}\b",
        EntityType::Date,
        0.6,
    ),
];

const CONTACT_RULES: &[Rule] = &[
    Rule::new(
        "EMAIL",
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        EntityType::Contact,
        0.95,
    ),
    // NZ mobile: 021/022/027/029
    Rule::new(
        "PHONE_NZ_MOBILE",
        r"\b0(?:21|22|27|29)[\s-]?\d{3}[\s-]?\d{3,4}\b",
        EntityType::Contact,
        0.95,
    ),
    // NZ landline: area codes 03-09
    Rule::new(
        "PHONE_NZ_LANDLINE",
        r"\b0[3-9][\s-]?\d{3}[\s-]?\d{4}\b",
        EntityType::Contact,
        0.9,
    ),
    Rule::new(
        "PHONE_NZ_INTL",
        r"\+64[\s-]?\d{1,2}[\s-]?\d{3}[\s-]?\d{3,4}\b",
        EntityType::Contact,
        0.95,
    ),
    Rule::new(
        "PHONE_NZ_FREEPHONE",
        r"\b0800[\s-]?\d{3}[\s-]?\d{3,4}\b",
        EntityType::Contact,
        0.9,
    ),
];

const ADDRESS_RULES: &[Rule] = &[
    Rule::new(
        "STREET_ADDRESS",
        r"\b\d+[A-Za-z]?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Road|Street|Terrace|Avenue|Drive|Lane|Place|Crescent|Way|Grove|Close|Court|Parade|Esplanade|Highway)\b",
        EntityType::Location,
        0.9,
    ),
    Rule::new(
        "AUCKLAND_SUBURB",
        r"\b(?:Otahuhu|Manukau|Papatoetoe|Mangere|Mt Eden|Mt Roskill|Ponsonby|Parnell|Remuera|Epsom|Newmarket|Grey Lynn|Avondale|New Lynn|Henderson|Albany|Takapuna|Devonport|Ellerslie|Panmure|Howick|Pakuranga|Botany|Flat Bush|Otara|Glen Innes|Onehunga)\b",
        EntityType::Location,
        0.95,
    ),
    Rule::new(
        "NZ_CITY",
        r"\b(?:Auckland|Wellington|Christchurch|Dunedin|Hamilton|Tauranga|Napier|Hastings|Palmerston North|Rotorua|Nelson|Queenstown|Invercargill|Whangarei|New Plymouth|Gisborne|Timaru)\b",
        EntityType::Location,
        0.95,
    ),
    Rule::new(
        "NZ_HOSPITAL",
        r"\b(?:Auckland|Middlemore|North Shore|Waitakere|Starship|Greenlane|Wellington|Hutt|Christchurch|Dunedin|Waikato|Tauranga)\s+Hospital\b",
        EntityType::Location,
        0.95,
    ),
    Rule::new(
        "HEALTH_BOARD",
        r"\b(?:Auckland|Waitemata|Counties Manukau|Canterbury|Southern|Capital & Coast|Hutt Valley|Waikato|Bay of Plenty)\s+(?:DHB|District Health Board)\b",
        EntityType::Organization,
        0.9,
    ),
];

const IDENTIFIER_RULES: &[Rule] = &[
    // NHI: 3 letters + 4 digits
    Rule::new("NHI", r"\b[A-Z]{3}\d{4}\b", EntityType::Identifier, 0.85),
    Rule::new(
        "ACC_CLAIM",
        r"\bACC\s?\d{5,}\b",
        EntityType::Identifier,
        0.9,
    ),
    Rule::new(
        "RECORD_PREFIXED",
        r"\b(?:MR|CR|UR)-\d{5,}\b",
        EntityType::Identifier,
        0.85,
    ),
    Rule::new(
        "RECORD_LABELLED",
        r"\b(?:MRN|Case|ID)\s*[:#]?\s*[A-Z0-9][A-Z0-9-]{3,}\b",
        EntityType::Identifier,
        0.8,
    ),
    // Catch-all: mixed alphanumeric code, needs a letter AND a digit.
    Rule::with_filter(
        "CODE_FALLBACK",
        r"\b[A-Za-z0-9][A-Za-z0-9-]{5,}\b",
        EntityType::Identifier,
        0.5,
        has_letter_and_digit,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_nhi_identifier() {
        let ner = RuleBasedRecognizer::identifiers();
        let entities = ner.recognize("Patient ABC1234 was discharged.").unwrap();
        let nhi: Vec<_> = entities
            .iter()
            .filter(|e| (e.confidence - 0.85).abs() < f64::EPSILON)
            .collect();
        assert_eq!(nhi.len(), 1);
        assert_eq!(nhi[0].text, "ABC1234");
        assert_eq!(nhi[0].entity_type, EntityType::Identifier);
        assert!(nhi[0].is_anchored_in("Patient ABC1234 was discharged."));
    }

    #[test]
    fn test_code_fallback_requires_letter_and_digit() {
        let ner = RuleBasedRecognizer::identifiers();
        let entities = ner.recognize("codes X9-44-AB7 but not ABCDEFGH or 12345678").unwrap();
        let fallback: Vec<_> = entities
            .iter()
            .filter(|e| (e.confidence - 0.5).abs() < f64::EPSILON)
            .collect();
        assert_eq!(texts(&entities).contains(&"X9-44-AB7"), true);
        assert!(fallback.iter().all(|e| e.text != "ABCDEFGH"));
        assert!(fallback.iter().all(|e| e.text != "12345678"));
    }

    #[test]
    fn test_date_forms() {
        let ner = RuleBasedRecognizer::dates(false);
        let entities = ner
            .recognize("Seen 12/03/2024, again on 14 March 2024 and March 15, 2024.")
            .unwrap();
        let found = texts(&entities);
        assert!(found.contains(&"12/03/2024"));
        assert!(found.contains(&"14 March 2024"));
        assert!(found.contains(&"March 15, 2024"));
    }

    #[test]
    fn test_bare_year_toggle() {
        let text = "Admitted in 1998.";
        let off = RuleBasedRecognizer::dates(false).recognize(text).unwrap();
        assert!(off.is_empty());
        let on = RuleBasedRecognizer::dates(true).recognize(text).unwrap();
        assert_eq!(texts(&on), vec!["1998"]);
        assert!((on[0].confidence - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contact_rules() {
        let ner = RuleBasedRecognizer::contact();
        let entities = ner
            .recognize("Call 021 555 1234 or 0800 123 456, or email jo.smith@clinic.org.nz")
            .unwrap();
        let found = texts(&entities);
        assert!(found.contains(&"021 555 1234"));
        assert!(found.contains(&"0800 123 456"));
        assert!(found.contains(&"jo.smith@clinic.org.nz"));
        assert!(entities
            .iter()
            .all(|e| e.entity_type == EntityType::Contact));
    }

    #[test]
    fn test_street_address() {
        let ner = RuleBasedRecognizer::addresses();
        let entities = ner
            .recognize("Lives at 42 Great South Road, Otahuhu.")
            .unwrap();
        let found = texts(&entities);
        assert!(found.contains(&"42 Great South Road"));
        assert!(found.contains(&"Otahuhu"));
    }

    #[test]
    fn test_health_board_is_organization() {
        let ner = RuleBasedRecognizer::addresses();
        let entities = ner.recognize("Referred by Counties Manukau DHB.").unwrap();
        assert!(entities
            .iter()
            .any(|e| e.text == "Counties Manukau DHB"
                && e.entity_type == EntityType::Organization));
    }

    #[test]
    fn test_numbers_low_confidence() {
        let ner = RuleBasedRecognizer::numbers();
        let entities = ner.recognize("ref 123456 and 04 234 5678").unwrap();
        assert!(!entities.is_empty());
        assert!(entities.iter().all(|e| e.confidence <= 0.5));
        assert!(entities.iter().all(|e| e.entity_type == EntityType::Number));
    }

    #[test]
    fn test_malformed_rule_is_dropped_not_fatal() {
        let rules = [
            Rule::new("BAD", r"([unclosed", EntityType::Number, 0.5),
            Rule::new("GOOD", r"\b\d{4,}\b", EntityType::Number, 0.4),
        ];
        let ner = RuleBasedRecognizer::new("test", &rules);
        assert_eq!(ner.rule_count(), 1);
        let entities = ner.recognize("code 123456").unwrap();
        assert_eq!(texts(&entities), vec!["123456"]);
    }

    #[test]
    fn test_rule_independence() {
        // Removing one rule must not change what the remaining rules match.
        let full = RuleBasedRecognizer::identifiers();
        let without_nhi = RuleBasedRecognizer::new("identifiers", &IDENTIFIER_RULES[1..]);

        let text = "NHI ABC1234, claim ACC 123456, record MR-55555.";
        let all = full.recognize(text).unwrap();
        let rest = without_nhi.recognize(text).unwrap();

        let all_minus_nhi: Vec<_> = all
            .into_iter()
            .filter(|e| (e.confidence - 0.85).abs() > f64::EPSILON || e.text.contains('-'))
            .collect();
        assert_eq!(all_minus_nhi, rest);
    }

    #[test]
    fn test_matches_within_rule_non_overlapping() {
        let ner = RuleBasedRecognizer::numbers();
        let entities = ner.recognize("1234567890").unwrap();
        let bare: Vec<_> = entities
            .iter()
            .filter(|e| (e.confidence - 0.4).abs() < f64::EPSILON)
            .collect();
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[0].text, "1234567890");
    }
}
