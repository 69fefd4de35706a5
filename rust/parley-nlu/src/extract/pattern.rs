use regex::Regex;

use super::Extractor;
use crate::entity::{EntityKind, EntitySpan};
use crate::error::{NluError, Result};

/// Reports every non-overlapping match of one regular expression.
#[derive(Debug)]
pub struct PatternExtractor {
    kind: EntityKind,
    pattern: Regex,
}

impl PatternExtractor {
    pub fn new(kind: EntityKind, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| NluError::InvalidPattern {
            extractor: kind.to_string(),
            source,
        })?;

        Ok(PatternExtractor { kind, pattern })
    }
}

impl Extractor for PatternExtractor {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn extract(&self, text: &str) -> Vec<EntitySpan> {
        self.pattern
            .find_iter(text)
            .filter(|found| !found.is_empty())
            .map(|found| EntitySpan::from_bytes(text, found.range(), self.kind))
            .collect()
    }
}
