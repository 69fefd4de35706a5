//! Confidence scores reported alongside an intent.
//!
//! The predictor is a keyword matcher, not a calibrated classifier, so its
//! confidence is banded: a prediction backed by at least one trigger phrase
//! reports [`Confidence::MATCHED`], anything else reports
//! [`Confidence::FALLBACK`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence score in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(pub f64);

impl Confidence {
    /// Reported when the winning intent matched at least one trigger phrase.
    pub const MATCHED: Confidence = Confidence(0.85);

    /// Reported when nothing matched and the fallback intent was chosen.
    pub const FALLBACK: Confidence = Confidence(0.5);

    pub fn new(value: f64) -> Self {
        Confidence(value.clamp(0.0, 1.0))
    }

    /// Band a trigger-phrase match count into a confidence.
    pub fn from_match_count(count: usize) -> Self {
        if count > 0 {
            Self::MATCHED
        } else {
            Self::FALLBACK
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_unit_range() {
        assert_eq!(Confidence::new(1.7), Confidence(1.0));
        assert_eq!(Confidence::new(-0.2), Confidence(0.0));
        assert_eq!(Confidence::new(0.42), Confidence(0.42));
    }

    #[test]
    fn match_count_is_banded() {
        assert_eq!(Confidence::from_match_count(0), Confidence::FALLBACK);
        assert_eq!(Confidence::from_match_count(1), Confidence::MATCHED);
        assert_eq!(Confidence::from_match_count(7), Confidence::MATCHED);
    }
}
