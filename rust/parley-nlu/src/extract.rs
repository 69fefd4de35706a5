//! Entity extractors.
//!
//! Each extractor is an independent, pure function from utterance text to
//! candidate spans of one [`EntityKind`]. Two flavours exist:
//!
//! - [`LexiconExtractor`]: a fixed list of literal phrases, each reported at
//!   its first case-insensitive occurrence.
//! - [`PatternExtractor`]: one regular expression, reported at every
//!   non-overlapping match.
//!
//! Extractors never look at each other's output. Duplicate and same-offset
//! suppression happens afterwards in [`crate::reconcile`], which relies on the
//! declared order of [`default_extractors`] to decide which candidate wins.

mod lexicon;
pub use lexicon::*;

mod pattern;
pub use pattern::*;

use std::fmt::Debug;

use crate::entity::{EntityKind, EntitySpan};
use crate::error::Result;

/// Something that finds candidate spans of a single kind in an utterance.
pub trait Extractor: Debug + Send + Sync {
    /// The kind every emitted span carries.
    fn kind(&self) -> EntityKind;

    /// Find candidate spans in `text`, reported against `text` itself.
    fn extract(&self, text: &str) -> Vec<EntitySpan>;
}

/// Place names and generic location terms.
pub const LOCATIONS: &[&str] = &[
    "new york",
    "london",
    "paris",
    "tokyo",
    "delhi",
    "mumbai",
    "bangalore",
    "chennai",
    "downtown",
    "mt",
    "montana",
    "california",
    "texas",
    "florida",
    "boston",
    "chicago",
    "seattle",
    "san francisco",
    "los angeles",
    "miami",
    "atlanta",
];

/// Cuisine and food terms.
pub const PRODUCTS: &[&str] = &[
    "churrascaria",
    "pizza",
    "burger",
    "sushi",
    "italian",
    "chinese",
    "mexican",
    "thai",
];

/// Relative days, weekdays and month names (full and abbreviated) optionally
/// followed by a day number and year, slash-delimited numeric dates, or bare
/// four-digit years.
pub const DATE_PATTERN: &str = concat!(
    r"(?i)\b(?:",
    r"(?:today|tomorrow|yesterday",
    r"|monday|tuesday|wednesday|thursday|friday|saturday|sunday",
    r"|january|february|march|april|may|june|july|august|september|october|november|december",
    r"|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)",
    r"(?:\s+\d{1,2}(?:,?\s+\d{2,4})?)?\b",
    r"|\d{1,2}/\d{1,2}/\d{2,4}\b",
    r"|\d{4}\b",
    r")"
);

/// `H:MM` with an optional meridiem, or a bare hour with one.
pub const TIME_PATTERN: &str =
    r"(?i)\b(?:\d{1,2}:\d{2}(?:\s?(?:am|pm))?|\d{1,2}\s?(?:am|pm))\b";

/// A cardinal (digits or one..ten) immediately followed by a unit word.
pub const QUANTITY_PATTERN: &str = concat!(
    r"(?i)\b(?:one|two|three|four|five|six|seven|eight|nine|ten|\d+)",
    r"\s+(?:people|person|tickets?|rooms?|nights?|days?|guests?)\b"
);

/// Two consecutive capitalized words.
pub const PERSON_PATTERN: &str = r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b";

/// A double-quoted phrase, a single-quoted phrase, or three or more
/// consecutive capitalized words. Quoted phrases keep their quotes, so a
/// person named inside them starts one character later and both survive.
pub const ORGANIZATION_PATTERN: &str =
    r#""[^"]+"|'[^']+'|\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){2,}\b"#;

/// Build the built-in extractors in their declared order: location, date,
/// time, quantity, person, organization, product.
pub fn default_extractors() -> Result<Vec<Box<dyn Extractor>>> {
    Ok(vec![
        Box::new(LexiconExtractor::new(EntityKind::Location, LOCATIONS)),
        Box::new(PatternExtractor::new(EntityKind::Date, DATE_PATTERN)?),
        Box::new(PatternExtractor::new(EntityKind::Time, TIME_PATTERN)?),
        Box::new(PatternExtractor::new(EntityKind::Quantity, QUANTITY_PATTERN)?),
        Box::new(PatternExtractor::new(EntityKind::Person, PERSON_PATTERN)?),
        Box::new(PatternExtractor::new(EntityKind::Organization, ORGANIZATION_PATTERN)?),
        Box::new(LexiconExtractor::new(EntityKind::Product, PRODUCTS)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(kind: EntityKind, text: &str) -> Vec<EntitySpan> {
        default_extractors()
            .unwrap()
            .into_iter()
            .find(|e| e.kind() == kind)
            .unwrap()
            .extract(text)
    }

    fn texts(spans: &[EntitySpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn declared_order_is_fixed() {
        let kinds: Vec<_> = default_extractors()
            .unwrap()
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Location,
                EntityKind::Date,
                EntityKind::Time,
                EntityKind::Quantity,
                EntityKind::Person,
                EntityKind::Organization,
                EntityKind::Product,
            ]
        );
    }

    #[test]
    fn dates_cover_names_numbers_and_years() {
        let spans = extract(
            EntityKind::Date,
            "Leaving tomorrow, back on March 5, 2025 or 12/24/25 or sometime in 2026",
        );
        assert_eq!(
            texts(&spans),
            vec!["tomorrow", "March 5, 2025", "12/24/25", "2026"]
        );
    }

    #[test]
    fn date_names_need_a_word_boundary() {
        assert!(extract(EntityKind::Date, "the mayor marched on").is_empty());
    }

    #[test]
    fn times_with_and_without_minutes() {
        let spans = extract(EntityKind::Time, "Dinner at 7pm or 8:30 PM, not 9:15 later");
        assert_eq!(texts(&spans), vec!["7pm", "8:30 PM", "9:15"]);
    }

    #[test]
    fn quantities_take_digits_and_words() {
        let spans = extract(EntityKind::Quantity, "Two rooms for 3 nights and ten Guests");
        assert_eq!(texts(&spans), vec!["Two rooms", "3 nights", "ten Guests"]);
    }

    #[test]
    fn persons_are_capitalized_pairs() {
        let spans = extract(EntityKind::Person, "ask John Smith and mary jones");
        assert_eq!(texts(&spans), vec!["John Smith"]);
        assert_eq!(spans[0].offsets(), (4, 14));
    }

    #[test]
    fn organizations_keep_their_quotes() {
        let text = r#"Play "Morning Jazz" by 'Blue Note' at Grand Central Terminal"#;
        let spans = extract(EntityKind::Organization, text);
        assert_eq!(
            texts(&spans),
            vec![r#""Morning Jazz""#, "'Blue Note'", "Grand Central Terminal"]
        );
        assert_eq!(spans[0].offsets(), (5, 19));

        let chars: Vec<char> = text.chars().collect();
        for span in &spans {
            let slice: String = chars[span.start..span.end].iter().collect();
            assert_eq!(slice, span.text);
        }
    }

    #[test]
    fn lexicon_keeps_source_casing() {
        let spans = extract(EntityKind::Location, "Flights from NEW YORK to Paris");
        assert_eq!(texts(&spans), vec!["NEW YORK", "Paris"]);
    }

    #[test]
    fn lexicon_reports_first_occurrence_only() {
        let spans = extract(EntityKind::Product, "pizza then more pizza");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offsets(), (0, 5));
    }
}
