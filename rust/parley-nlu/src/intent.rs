//! Intent scoring by trigger-phrase containment.
//!
//! Every intent except the fallback owns an ordered list of lowercase trigger
//! phrases. The input is lowercased once and each intent scores one point per
//! trigger phrase found anywhere in it, no matter how often the phrase repeats.
//! The intent with the strictly greatest score wins; on a tie the intent
//! declared first in [`TRIGGERS`] keeps the lead. A best score of zero yields
//! [`IntentLabel::AskQuestion`].
//!
//! Matching is plain substring containment with no tokenization, so a trigger
//! such as `"eat"` also fires inside `"heating"`. This is a known precision
//! trade-off of the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NluError;
use crate::score::Confidence;

/// The closed set of intents the predictor can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    BookFlight,
    CheckWeather,
    FindRestaurant,
    OrderFood,
    GetDirections,
    BookHotel,
    CancelBooking,
    CheckStatus,
    /// The fallback when no trigger phrase matches.
    AskQuestion,
    Greeting,
    Farewell,
}

impl IntentLabel {
    /// Every label in declaration order.
    pub const ALL: [IntentLabel; 11] = [
        IntentLabel::BookFlight,
        IntentLabel::CheckWeather,
        IntentLabel::FindRestaurant,
        IntentLabel::OrderFood,
        IntentLabel::GetDirections,
        IntentLabel::BookHotel,
        IntentLabel::CancelBooking,
        IntentLabel::CheckStatus,
        IntentLabel::AskQuestion,
        IntentLabel::Greeting,
        IntentLabel::Farewell,
    ];

    pub const FALLBACK: IntentLabel = IntentLabel::AskQuestion;

    /// The wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::BookFlight => "book_flight",
            IntentLabel::CheckWeather => "check_weather",
            IntentLabel::FindRestaurant => "find_restaurant",
            IntentLabel::OrderFood => "order_food",
            IntentLabel::GetDirections => "get_directions",
            IntentLabel::BookHotel => "book_hotel",
            IntentLabel::CancelBooking => "cancel_booking",
            IntentLabel::CheckStatus => "check_status",
            IntentLabel::AskQuestion => "ask_question",
            IntentLabel::Greeting => "greeting",
            IntentLabel::Farewell => "farewell",
        }
    }

    /// The trigger phrases for this label; empty for the fallback.
    pub fn triggers(&self) -> &'static [&'static str] {
        TRIGGERS
            .iter()
            .find(|(label, _)| label == self)
            .map(|(_, phrases)| *phrases)
            .unwrap_or(&[])
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentLabel {
    type Err = NluError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| NluError::UnknownIntent(s.to_string()))
    }
}

/// Trigger phrases per intent, in tie-breaking order.
pub const TRIGGERS: &[(IntentLabel, &[&str])] = &[
    (
        IntentLabel::BookFlight,
        &[
            "book flight",
            "flight ticket",
            "fly to",
            "airline",
            "plane ticket",
            "book a flight",
        ],
    ),
    (
        IntentLabel::CheckWeather,
        &[
            "weather",
            "temperature",
            "forecast",
            "rain",
            "sunny",
            "climate",
            "snow",
            "will it",
        ],
    ),
    (
        IntentLabel::FindRestaurant,
        &[
            "restaurant",
            "eat",
            "dining",
            "food place",
            "lunch",
            "dinner",
            "cuisine",
            "downtown",
            "close to",
        ],
    ),
    (
        IntentLabel::OrderFood,
        &[
            "order food",
            "delivery",
            "pizza",
            "burger",
            "takeout",
            "churrascaria",
        ],
    ),
    (
        IntentLabel::GetDirections,
        &["directions", "how to get", "navigate", "route", "way to"],
    ),
    (
        IntentLabel::BookHotel,
        &["book hotel", "hotel room", "accommodation", "stay at"],
    ),
    (
        IntentLabel::CancelBooking,
        &["cancel", "cancellation", "refund"],
    ),
    (
        IntentLabel::CheckStatus,
        &["status", "check my", "where is my"],
    ),
    (
        IntentLabel::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening"],
    ),
    (
        IntentLabel::Farewell,
        &["bye", "goodbye", "see you", "take care"],
    ),
];

/// How many trigger phrases of one intent were found in an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntentScore {
    pub intent: IntentLabel,
    pub matches: usize,
}

/// Score every non-fallback intent against `text`, in declaration order.
pub fn score_intents(text: &str) -> Vec<IntentScore> {
    let lowered = text.to_lowercase();

    TRIGGERS
        .iter()
        .map(|(intent, phrases)| IntentScore {
            intent: *intent,
            matches: phrases
                .iter()
                .filter(|phrase| lowered.contains(*phrase))
                .count(),
        })
        .collect()
}

/// Pick the best intent for `text` and band its confidence.
pub fn score_intent(text: &str) -> (IntentLabel, Confidence) {
    let mut best = IntentLabel::FALLBACK;
    let mut best_matches = 0;

    // Strict comparison keeps the earliest intent on ties.
    for score in score_intents(text) {
        if score.matches > best_matches {
            best = score.intent;
            best_matches = score.matches;
        }
    }

    (best, Confidence::from_match_count(best_matches))
}
