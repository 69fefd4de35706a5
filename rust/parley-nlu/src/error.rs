//! Error types for the NLU predictor.

use thiserror::Error;

/// Errors raised while assembling a [`crate::Predictor`].
///
/// Prediction itself never fails; only building the extractor set can, and
/// only if one of its patterns does not compile.
#[derive(Debug, Error)]
pub enum NluError {
    #[error("pattern for {extractor} extractor failed to compile: {source}")]
    InvalidPattern {
        extractor: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown intent label '{0}'")]
    UnknownIntent(String),

    #[error("unknown entity type '{0}'")]
    UnknownEntityKind(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NluError>;
