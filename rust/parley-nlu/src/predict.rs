//! The predictor, from raw text to an intent and its entities.
//!
//! ```text
//! text ─┬─> score_intent ─────────────────────────> (intent, confidence)
//!       └─> extractors (declared order) ─> reconcile ─> entities
//! ```
//!
//! The two halves never share state. A [`Predictor`] only holds compiled
//! patterns, so one instance can serve any number of threads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::EntitySpan;
use crate::error::Result;
use crate::extract::{Extractor, default_extractors};
use crate::intent::{IntentLabel, score_intent};
use crate::reconcile::reconcile;
use crate::score::Confidence;

/// What the predictor says about one utterance.
///
/// Serializes to `{intent, confidence, entities: [{text, type, start, end}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub intent: IntentLabel,
    pub confidence: Confidence,
    pub entities: Vec<EntitySpan>,
}

impl PredictionResult {
    /// The result reported when nothing can be said about the input.
    pub fn fallback() -> Self {
        PredictionResult {
            intent: IntentLabel::FALLBACK,
            confidence: Confidence::FALLBACK,
            entities: Vec::new(),
        }
    }
}

/// Rule-based intent and entity predictor.
#[derive(Debug)]
pub struct Predictor {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Predictor {
    /// Compile the built-in extractors.
    pub fn new() -> Result<Self> {
        Ok(Predictor {
            extractors: default_extractors()?,
        })
    }

    /// Use a custom extractor set. Order matters: earlier extractors win
    /// exact-duplicate and shared-start conflicts.
    pub fn with_extractors(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Predictor { extractors }
    }

    /// Run every extractor over `text` and return their raw, unreconciled
    /// output in declared order.
    pub fn candidates(&self, text: &str) -> Vec<EntitySpan> {
        self.extractors
            .iter()
            .flat_map(|extractor| extractor.extract(text))
            .collect()
    }

    /// Predict the intent and entities of `text`. Total over all strings.
    pub fn predict(&self, text: &str) -> PredictionResult {
        let (intent, confidence) = score_intent(text);
        let entities = reconcile(self.candidates(text));

        debug!(
            chars = text.chars().count(),
            %intent,
            %confidence,
            entities = entities.len(),
            "predicted utterance"
        );

        PredictionResult {
            intent,
            confidence,
            entities,
        }
    }
}
