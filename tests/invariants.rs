//! Property tests for cross-recognizer invariants.
//!
//! Every recognizer, on any input: returns `Ok`, anchors every span
//! (`&text[start..end] == entity.text`), and keeps confidence in [0, 1].
//! The extension engine additionally never changes list length and is
//! idempotent.

use std::sync::Arc;

use clinscan::prelude::*;
use clinscan::{TagCategory, TaggedSpan, TaggerRecognizer};
use proptest::prelude::*;

fn all_recognizers() -> Vec<Box<dyn Recognizer>> {
    let lexicon: Arc<dyn Lexicon> = Arc::new(SetLexicon::standard());
    vec![
        Box::new(RuleBasedRecognizer::numbers()),
        Box::new(RuleBasedRecognizer::dates(true)),
        Box::new(RuleBasedRecognizer::contact()),
        Box::new(RuleBasedRecognizer::addresses()),
        Box::new(RuleBasedRecognizer::identifiers()),
        Box::new(DictionaryNameRecognizer::new()),
        Box::new(TitleNameRecognizer::new(lexicon.clone())),
        Box::new(RelationshipNameRecognizer::new(lexicon.clone())),
        Box::new(UserInclusionRecognizer::new(
            vec![InclusionTerm::new("Kahu", EntityType::Person)],
            lexicon,
        )),
    ]
}

/// Text assembled from tokens the recognizers actually react to, so the
/// properties get exercised on hits as well as misses.
fn clinical_text() -> impl Strategy<Value = String> {
    let token = prop::sample::select(vec![
        "Aroha", "Wiremu", "Hayden", "Hooper", "Mere", "Grace", "Whina", "Kahu", "sister",
        "friend", "mother", "Dr", "Mrs", "Nurse", "the", "was", "seen", "at", "with", "Otahuhu",
        "Auckland", "Middlemore Hospital", "NHI", "ABC1234", "ACC 123456", "12/03/2024",
        "14 March 2024", "021 555 1234", "0800 123 456", "jo@clinic.org.nz",
        "42 Great South Road", "visited.", "called.", "reviewed;", "-", "\n", "\t", "•",
    ]);
    prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn prop_recognizers_return_anchored_entities(text in clinical_text()) {
        for recognizer in all_recognizers() {
            let entities = recognizer.recognize(&text).unwrap();
            for e in &entities {
                prop_assert!(e.is_anchored_in(&text), "{}: {e:?}", recognizer.name());
                prop_assert!((0.0..=1.0).contains(&e.confidence));
                prop_assert!(!e.text.is_empty());
            }
        }
    }

    #[test]
    fn prop_recognizers_tolerate_arbitrary_text(text in ".{0,200}") {
        for recognizer in all_recognizers() {
            let entities = recognizer.recognize(&text).unwrap();
            for e in &entities {
                prop_assert!(e.is_anchored_in(&text), "{}: {e:?}", recognizer.name());
            }
        }
    }

    #[test]
    fn prop_extension_preserves_count_and_anchoring(text in clinical_text()) {
        let lexicon = SetLexicon::standard();
        let mut baseline = Vec::new();
        for recognizer in all_recognizers() {
            baseline.extend(recognizer.recognize(&text).unwrap());
        }
        let extended = extend_person_names(&text, baseline.clone(), &lexicon);
        prop_assert_eq!(extended.len(), baseline.len());
        for (before, after) in baseline.iter().zip(&extended) {
            prop_assert!(after.is_anchored_in(&text), "{after:?}");
            prop_assert_eq!(before.entity_type, after.entity_type);
            prop_assert_eq!(before.confidence, after.confidence);
            if !before.entity_type.is_person() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_extension_is_idempotent(text in clinical_text()) {
        let lexicon = SetLexicon::standard();
        let mut baseline = Vec::new();
        for recognizer in all_recognizers() {
            baseline.extend(recognizer.recognize(&text).unwrap());
        }
        let once = extend_person_names(&text, baseline, &lexicon);
        let twice = extend_person_names(&text, once.clone(), &lexicon);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_tagger_wrapper_tolerates_arbitrary_spans(
        text in ".{0,80}",
        raw in prop::collection::vec(
            (0usize..120, 0usize..120, 0.0f64..=1.0),
            0..10,
        ),
    ) {
        let spans = raw
            .into_iter()
            .map(|(start, end, confidence)| {
                TaggedSpan::new(start, end, TagCategory::PersonalName, confidence)
            })
            .collect();
        let ner = TaggerRecognizer::new(
            Box::new(MockTagger::new().with_spans(spans)),
            Arc::new(SetLexicon::standard()),
        );
        let entities = ner.recognize(&text).unwrap();
        for e in &entities {
            prop_assert!(e.is_anchored_in(&text), "{e:?}");
        }
    }
}
