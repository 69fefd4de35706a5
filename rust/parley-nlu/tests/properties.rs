use std::collections::HashSet;

use parley_nlu::{Confidence, IntentLabel, PredictionResult, Predictor};
use proptest::prelude::*;

fn check_result(text: &str, result: &PredictionResult) -> Result<(), TestCaseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut seen = HashSet::new();

    prop_assert!((0.0..=1.0).contains(&result.confidence.value()));

    for entity in &result.entities {
        prop_assert!(entity.start < entity.end, "empty span {entity}");
        prop_assert!(entity.end <= chars.len(), "span {entity} past end of {text:?}");

        let slice: String = chars[entity.start..entity.end].iter().collect();
        prop_assert_eq!(&slice, &entity.text);
        prop_assert!(seen.insert(entity.offsets()), "duplicate span {entity}");
    }

    Ok(())
}

/// Mixes words from every lexicon and pattern with arbitrary noise so the
/// extractors actually fire.
fn utterance() -> impl Strategy<Value = String> {
    let fixed = prop::sample::select(vec![
        "book flight",
        "Paris",
        "NEW YORK",
        "tomorrow",
        "March 3, 2024",
        "12/5/99",
        "7:45pm",
        "two Tickets",
        "John Smith",
        "\"Acme Corp\"",
        "'Blue Note'",
        "Grand Central Terminal",
        "sushi",
        "Ünïcödé",
        "日本",
    ])
    .prop_map(str::to_string);
    let word = prop_oneof![3 => fixed, 1 => "\\PC{0,12}"];

    prop::collection::vec(word, 0..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn arbitrary_text_yields_valid_spans(text in "\\PC*") {
        let predictor = Predictor::new().unwrap();
        let result = predictor.predict(&text);
        check_result(&text, &result)?;
    }

    #[test]
    fn composed_utterances_yield_valid_spans(text in utterance()) {
        let predictor = Predictor::new().unwrap();
        let result = predictor.predict(&text);
        check_result(&text, &result)?;
    }

    #[test]
    fn prediction_is_idempotent(text in utterance()) {
        let predictor = Predictor::new().unwrap();
        let first = serde_json::to_string(&predictor.predict(&text)).unwrap();
        let second = serde_json::to_string(&predictor.predict(&text)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn punctuation_and_whitespace_fall_back(text in "[ \\t\\n.,;:!?-]*") {
        let predictor = Predictor::new().unwrap();
        prop_assert_eq!(predictor.predict(&text), PredictionResult::fallback());
    }
}

#[test]
fn separate_predictors_agree() {
    let text = "Cancel my 3 rooms in Boston on Monday 4, 2025 with \"Hilton Hotels\"";
    let a = Predictor::new().unwrap().predict(text);
    let b = Predictor::new().unwrap().predict(text);
    assert_eq!(a, b);
    assert_eq!(a.intent, IntentLabel::CancelBooking);
    assert_eq!(a.confidence, Confidence::MATCHED);
}
