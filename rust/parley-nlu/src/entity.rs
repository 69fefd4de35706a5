//! Entity kinds and the spans extractors report.
//!
//! Offsets are code-point indices into the utterance, zero-based and
//! half-open, so `text == utterance.chars().skip(start).take(end - start)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::NluError;

/// The closed set of entity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Location,
    Date,
    Time,
    Person,
    Organization,
    Product,
    Quantity,
    /// Accepted on the wire but never produced by the built-in extractors.
    Price,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Location,
        EntityKind::Date,
        EntityKind::Time,
        EntityKind::Person,
        EntityKind::Organization,
        EntityKind::Product,
        EntityKind::Quantity,
        EntityKind::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::Date => "date",
            EntityKind::Time => "time",
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
            EntityKind::Product => "product",
            EntityKind::Quantity => "quantity",
            EntityKind::Price => "price",
        }
    }

    /// Whether a span of this kind is dropped when an earlier span already
    /// starts at the same offset, even if it ends elsewhere.
    pub fn yields_at_shared_start(&self) -> bool {
        matches!(self, EntityKind::Organization | EntityKind::Product)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = NluError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NluError::UnknownEntityKind(s.to_string()))
    }
}

/// A typed substring of the utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The covered substring, in its original casing.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Code-point offset of the first character.
    pub start: usize,
    /// Code-point offset one past the last character.
    pub end: usize,
}

impl EntitySpan {
    /// Build a span from a byte range of `utterance`.
    ///
    /// `bytes` must lie on character boundaries, which holds for any range
    /// reported by a `regex` match.
    pub fn from_bytes(utterance: &str, bytes: Range<usize>, kind: EntityKind) -> Self {
        let start = utterance[..bytes.start].chars().count();
        let text = utterance[bytes].to_string();
        let end = start + text.chars().count();

        EntitySpan {
            text,
            kind,
            start,
            end,
        }
    }

    /// The `(start, end)` pair used to detect duplicates.
    pub fn offsets(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for EntitySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}..{}] \"{}\"",
            self.kind, self.start, self.end, self.text
        )
    }
}
