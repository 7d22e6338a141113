//! Name-extension engine - recovering full names from fragmentary tags.
//!
//! Statistical taggers under-segment names (they find "Hayden" and miss
//! "Hooper") far more often than they over-segment. This engine recovers
//! full names without a second statistical pass, using only lexical
//! evidence already present in the same document, in three ordered passes:
//!
//! 1. **Surname extension** - a single-token person entity is extended by
//!    scanning the whole document for `<first> <Capitalized>` where the
//!    captured word survives the gatekeepers.
//! 2. **Known-surname propagation** - surnames confirmed by any multi-word
//!    person entity extend remaining single-token mentions of the same
//!    first name elsewhere in the document, with no gatekeeper
//!    re-validation (membership in the known set is the evidence).
//! 3. **Preceding name-word extension** - an ambiguous word that doubles
//!    as a given name ("Grace", "April") directly before a person entity
//!    is prepended when it is capitalized mid-sentence.
//!
//! Passes run once, in this order, and never iterate to a fixed point;
//! cost is bounded by document length x entity count. Each pass is a pure
//! transformation: it consumes a list and produces a new one, inheriting
//! confidence unchanged.
//!
//! When Pass 1 or Pass 2 finds its surname evidence at an occurrence other
//! than the entity's originally tagged position, the extended entity's
//! span is recomputed to that matched occurrence. This keeps the
//! span-validity invariant (the span always slices the source to the
//! entity text); text and span never diverge.

use regex::Regex;

use crate::{wordlists, Entity, Lexicon, Span};

/// Run the three extension passes over a baseline entity list.
///
/// Non-person entities pass through untouched. The engine is idempotent:
/// feeding its output back in produces the same list.
#[must_use]
pub fn extend_person_names(
    text: &str,
    entities: Vec<Entity>,
    lexicon: &dyn Lexicon,
) -> Vec<Entity> {
    let extended = extend_by_surname_scan(text, entities, lexicon);
    let propagated = propagate_known_surnames(text, extended);
    prepend_name_words(text, propagated)
}

// =============================================================================
// Pass 1: surname extension
// =============================================================================

fn extend_by_surname_scan(
    text: &str,
    entities: Vec<Entity>,
    lexicon: &dyn Lexicon,
) -> Vec<Entity> {
    entities
        .into_iter()
        .map(|entity| {
            if !eligible_for_surname_scan(&entity) {
                return entity;
            }
            match scan_for_following_word(text, &entity.text, |surname| {
                is_plausible_surname(surname, lexicon)
            }) {
                Some(span) => rebuild_extended(text, &entity, span),
                None => entity,
            }
        })
        .collect()
}

// =============================================================================
// Pass 2: known-surname propagation
// =============================================================================

fn propagate_known_surnames(text: &str, entities: Vec<Entity>) -> Vec<Entity> {
    let known: Vec<String> = entities
        .iter()
        .filter(|e| e.entity_type.is_person() && e.text.contains(' '))
        .filter_map(|e| e.text.split_whitespace().last().map(String::from))
        .collect();
    if known.is_empty() {
        return entities;
    }

    entities
        .into_iter()
        .map(|entity| {
            if !eligible_for_surname_scan(&entity) {
                return entity;
            }
            // Known-set membership is sufficient evidence; the gatekeepers
            // are not consulted again here.
            match scan_for_following_word(text, &entity.text, |surname| {
                known.iter().any(|k| k == surname)
            }) {
                Some(span) => rebuild_extended(text, &entity, span),
                None => entity,
            }
        })
        .collect()
}

/// Passes 1 and 2 only touch single-token person entities; anything
/// already multi-word is never re-extended.
fn eligible_for_surname_scan(entity: &Entity) -> bool {
    entity.entity_type.is_person() && !entity.text.is_empty() && !entity.text.contains(' ')
}

/// Document-order scan for `<first> <Capitalized word>`; returns the span
/// of the first occurrence whose captured word `accept`s.
fn scan_for_following_word(
    text: &str,
    first: &str,
    accept: impl Fn(&str) -> bool,
) -> Option<Span> {
    let pattern = format!(
        r"\b{} +([A-Z][A-Za-z'’-]*[A-Za-z])",
        regex::escape(first)
    );
    let regex = Regex::new(&pattern).ok()?;
    for caps in regex.captures_iter(text) {
        let surname = caps.get(1)?;
        if accept(surname.as_str()) {
            let whole = caps.get(0)?;
            return Some(Span::new(whole.start(), whole.end()));
        }
    }
    None
}

/// Minimum length 2, capitalized, and rejected by no gatekeeper.
fn is_plausible_surname(word: &str, lexicon: &dyn Lexicon) -> bool {
    word.chars().count() >= 2
        && word.chars().next().is_some_and(char::is_uppercase)
        && !lexicon.is_common_word(word)
        && !lexicon.is_clinical_term(word)
        && !lexicon.is_user_excluded(word)
}

/// New entity over the matched occurrence; confidence inherited unchanged.
fn rebuild_extended(text: &str, entity: &Entity, span: Span) -> Entity {
    Entity::new(
        &text[span.start..span.end],
        entity.entity_type,
        span.start,
        span.end,
        entity.confidence,
    )
}

// =============================================================================
// Pass 3: preceding name-word extension
// =============================================================================

fn prepend_name_words(text: &str, entities: Vec<Entity>) -> Vec<Entity> {
    entities
        .into_iter()
        .map(|entity| try_prepend_name_word(text, entity))
        .collect()
}

fn try_prepend_name_word(text: &str, entity: Entity) -> Entity {
    if !entity.entity_type.is_person() {
        return entity;
    }
    // Idempotence guard: once a name-word leads the entity, there is
    // nothing further for this pass to do on a rerun.
    let leading = entity.text.split_whitespace().next().unwrap_or("");
    if is_name_word(leading) {
        return entity;
    }
    let Some(span) = entity.primary_span() else {
        return entity;
    };
    // The candidate word must be separated from the entity by exactly one
    // space; the span extends backward by len(word) + 1.
    if span.start < 2 || text.as_bytes()[span.start - 1] != b' ' {
        return entity;
    }
    let before = &text[..span.start - 1];
    let token_start = preceding_token_start(before);
    let word = &before[token_start..];

    if word.is_empty()
        || !is_name_word(word)
        || !word.chars().next().is_some_and(char::is_uppercase)
        || at_sentence_start(text, token_start)
    {
        return entity;
    }

    Entity::new(
        &text[token_start..span.end],
        entity.entity_type,
        token_start,
        span.end,
        entity.confidence,
    )
}

fn is_name_word(word: &str) -> bool {
    wordlists::NAME_WORDS
        .iter()
        .any(|w| w.eq_ignore_ascii_case(word))
}

/// Byte offset where the last token of `before` starts.
fn preceding_token_start(before: &str) -> usize {
    for (i, c) in before.char_indices().rev() {
        if !(c.is_alphanumeric() || c == '\'' || c == '-') {
            return i + c.len_utf8();
        }
    }
    0
}

/// A token is at sentence/list-item start when the nearest non-space
/// character before it is a period, newline, bullet, hyphen, colon, or
/// semicolon - or when nothing precedes it at all.
fn at_sentence_start(text: &str, token_start: usize) -> bool {
    if token_start == 0 {
        return true;
    }
    let prefix = text[..token_start].trim_end_matches(' ');
    match prefix.chars().last() {
        None => true,
        Some(c) => matches!(c, '.' | '\n' | '\r' | '•' | '-' | ':' | ';'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityType, SetLexicon};

    fn lexicon() -> SetLexicon {
        SetLexicon::standard()
    }

    fn person_at(text: &str, needle: &str, confidence: f64) -> Entity {
        let start = text.find(needle).unwrap();
        Entity::new(needle, EntityType::Person, start, start + needle.len(), confidence)
    }

    #[test]
    fn test_pass1_extends_from_later_occurrence() {
        let text = "Hayden was seen today. Please contact Hayden Hooper for details.";
        let baseline = vec![person_at(text, "Hayden", 0.82)];
        let out = extend_person_names(text, baseline, &lexicon());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Hayden Hooper");
        assert!((out[0].confidence - 0.82).abs() < f64::EPSILON);
        // Span is recomputed to the matched occurrence, keeping text and
        // span in agreement.
        let expected = text.find("Hayden Hooper").unwrap();
        assert_eq!(out[0].positions, vec![Span::new(expected, expected + 13)]);
        assert!(out[0].is_anchored_in(text));
    }

    #[test]
    fn test_pass1_rejects_common_word_surname() {
        // "Said" is a common word; "Hayden" stays single.
        let text = "Hayden Said he would attend.";
        let lex = SetLexicon::new().with_common_words(["said"]);
        let out = extend_person_names(text, vec![person_at(text, "Hayden", 0.8)], &lex);
        assert_eq!(out[0].text, "Hayden");
    }

    #[test]
    fn test_pass1_requires_two_char_surname() {
        let text = "Hayden J called in.";
        let out = extend_person_names(text, vec![person_at(text, "Hayden", 0.8)], &lexicon());
        assert_eq!(out[0].text, "Hayden");
    }

    #[test]
    fn test_pass1_skips_multiword_entities() {
        let text = "Hayden Hooper and Hayden Hooper again.";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.9)];
        let out = extend_person_names(text, baseline.clone(), &lexicon());
        assert_eq!(out, baseline);
    }

    #[test]
    fn test_pass2_propagates_known_surname() {
        // "Winter" fails the common-word gatekeeper, so Pass 1 cannot use
        // it; Pass 2 can, because "Anna Winter" already confirmed it.
        let text = "Anna Winter and her brother were seen. Mere Winter arrived late.";
        let lex = SetLexicon::new().with_common_words(["winter"]);
        let baseline = vec![
            person_at(text, "Anna Winter", 0.9),
            person_at(text, "Mere", 0.8),
        ];
        let out = extend_person_names(text, baseline, &lex);
        assert_eq!(out[1].text, "Mere Winter");
        assert!((out[1].confidence - 0.8).abs() < f64::EPSILON);
        assert!(out[1].is_anchored_in(text));
    }

    #[test]
    fn test_pass2_skipped_when_no_known_surnames() {
        let text = "Mere and Hana spoke quietly.";
        let lex = SetLexicon::new().with_common_words(["and", "spoke", "quietly"]);
        let baseline = vec![person_at(text, "Mere", 0.8), person_at(text, "Hana", 0.8)];
        let out = extend_person_names(text, baseline.clone(), &lex);
        assert_eq!(out, baseline);
    }

    #[test]
    fn test_pass3_prepends_midsentence_name_word() {
        let text = "Seen with her friend Grace Hayden at the clinic.";
        let baseline = vec![person_at(text, "Hayden", 0.85)];
        // Pass 1 finds nothing to append ("at" is common), Pass 3 extends
        // backward.
        let lex = SetLexicon::new().with_common_words(["at", "the", "clinic"]);
        let out = extend_person_names(text, baseline, &lex);
        assert_eq!(out[0].text, "Grace Hayden");
        let start = text.find("Grace Hayden").unwrap();
        assert_eq!(out[0].positions, vec![Span::new(start, start + 12)]);
        assert!(out[0].is_anchored_in(text));
    }

    #[test]
    fn test_pass3_refuses_sentence_start() {
        let text = "The whanau visited. Grace Hayden Hooper came along.";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.85)];
        let out = extend_person_names(text, baseline, &lexicon());
        assert_eq!(out[0].text, "Hayden Hooper");
    }

    #[test]
    fn test_pass3_refuses_document_start() {
        let text = "Grace Hayden Hooper came along.";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.85)];
        let out = extend_person_names(text, baseline, &lexicon());
        assert_eq!(out[0].text, "Hayden Hooper");
    }

    #[test]
    fn test_pass3_refuses_list_item_start() {
        let text = "Contacts:\n- Grace Hayden Hooper\n- Mere Ngata";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.85)];
        let out = extend_person_names(text, baseline, &lexicon());
        assert_eq!(out[0].text, "Hayden Hooper");
    }

    #[test]
    fn test_pass3_requires_source_capitalization() {
        let text = "saving grace Hayden Hooper mentioned";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.85)];
        let out = extend_person_names(text, baseline, &lexicon());
        assert_eq!(out[0].text, "Hayden Hooper");
    }

    #[test]
    fn test_pass3_ignores_words_outside_name_word_set() {
        let text = "her lawyer Priscilla Hayden Hooper called";
        let baseline = vec![person_at(text, "Hayden Hooper", 0.85)];
        let out = extend_person_names(text, baseline, &lexicon());
        assert_eq!(out[0].text, "Hayden Hooper");
    }

    #[test]
    fn test_non_person_entities_untouched() {
        let text = "Otahuhu Clinic saw Hayden Hooper today.";
        let baseline = vec![
            Entity::new("Otahuhu", EntityType::Location, 0, 7, 0.9),
            person_at(text, "Hayden Hooper", 0.85),
        ];
        let out = extend_person_names(text, baseline.clone(), &lexicon());
        assert_eq!(out[0], baseline[0]);
    }

    #[test]
    fn test_engine_is_idempotent() {
        let text = "Hayden was in. Contact Hayden Hooper; his friend Grace Mere \
                    and Anna Winter were told. Mere Winter knows.";
        let lex = SetLexicon::standard().with_common_words(["winter"]);
        let baseline = vec![
            person_at(text, "Hayden", 0.82),
            person_at(text, "Mere", 0.75),
            person_at(text, "Anna Winter", 0.9),
        ];
        let once = extend_person_names(text, baseline, &lex);
        let twice = extend_person_names(text, once.clone(), &lex);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_results_anchored() {
        let text = "Hayden was seen. Contact Hayden Hooper and friend Grace Mere today.";
        let baseline = vec![
            person_at(text, "Hayden", 0.82),
            person_at(text, "Mere", 0.75),
        ];
        let out = extend_person_names(text, baseline, &lexicon());
        for e in &out {
            assert!(e.is_anchored_in(text), "{e:?}");
        }
    }
}
