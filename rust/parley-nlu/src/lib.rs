//! # Parley NLU: rule-based intent and entity prediction
//!
//! Given an utterance, the predictor assigns one [`IntentLabel`] from a closed
//! set and extracts typed [`EntitySpan`]s (locations, dates, times, people,
//! organizations, products, quantities).
//!
//! ## Architecture
//!
//! ```text
//! Utterance ─┬─> Intent scoring (trigger-phrase counts) ──> intent, confidence
//!            └─> Extractors (lexicons, patterns) ─> Reconcile ─> entities
//! ```
//!
//! - **Intent scoring** counts, for each intent, how many of its trigger
//!   phrases occur in the lowercased text. The highest count wins, earlier
//!   intents win ties, and a zero count falls back to `ask_question`.
//! - **Extractors** are independent and pure. Each reports candidate spans of
//!   one kind against the original text, with code-point offsets.
//! - **Reconciliation** drops exact duplicates and lets organizations and
//!   products yield to any earlier span starting at the same offset.
//!
//! The predictor holds no mutable state: the same text always produces the
//! same [`PredictionResult`].
//!
//! ## Example
//!
//! ```
//! use parley_nlu::{EntityKind, IntentLabel, Predictor};
//!
//! let predictor = Predictor::new().unwrap();
//! let result = predictor.predict("I want to book flight to Paris tomorrow");
//!
//! assert_eq!(result.intent, IntentLabel::BookFlight);
//! assert!(result
//!     .entities
//!     .iter()
//!     .any(|e| e.kind == EntityKind::Location && e.text == "Paris"));
//! ```

pub mod entity;
pub mod error;
pub mod extract;
pub mod intent;
pub mod predict;
pub mod reconcile;
pub mod score;

pub use entity::{EntityKind, EntitySpan};
pub use error::{NluError, Result};
pub use extract::{Extractor, LexiconExtractor, PatternExtractor, default_extractors};
pub use intent::{IntentLabel, IntentScore, score_intent, score_intents};
pub use predict::{PredictionResult, Predictor};
pub use reconcile::reconcile;
pub use score::Confidence;
