use std::ops::Range;

use super::Extractor;
use crate::entity::{EntityKind, EntitySpan};

/// Reports each lexicon entry at its first case-insensitive occurrence.
///
/// Entries are plain substrings: there are no word boundaries, so a short
/// entry such as `"mt"` also fires inside a longer word. Case-insensitive
/// means [`char::to_lowercase`], the same mapping intent scoring applies.
#[derive(Debug)]
pub struct LexiconExtractor {
    kind: EntityKind,
    entries: Vec<String>,
}

impl LexiconExtractor {
    pub fn new(kind: EntityKind, entries: &[&str]) -> Self {
        LexiconExtractor {
            kind,
            entries: entries
                .iter()
                .filter(|entry| !entry.is_empty())
                .map(|entry| entry.to_lowercase())
                .collect(),
        }
    }
}

impl Extractor for LexiconExtractor {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn extract(&self, text: &str) -> Vec<EntitySpan> {
        let lowered = Lowered::new(text);

        self.entries
            .iter()
            .filter_map(|entry| lowered.find(entry))
            .map(|bytes| EntitySpan::from_bytes(text, bytes, self.kind))
            .collect()
    }
}

/// A lowercased copy of some text that remembers, for every byte, the byte
/// range of the source character it was produced from.
struct Lowered {
    text: String,
    origin: Vec<(usize, usize)>,
}

impl Lowered {
    fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());

        for (at, ch) in source.char_indices() {
            let from = (at, at + ch.len_utf8());
            for lower in ch.to_lowercase() {
                text.push(lower);
                origin.extend(std::iter::repeat_n(from, lower.len_utf8()));
            }
        }

        Lowered { text, origin }
    }

    /// Source byte range covering the first occurrence of `needle`, widened
    /// to whole source characters.
    fn find(&self, needle: &str) -> Option<Range<usize>> {
        let at = self.text.find(needle)?;
        let last = at + needle.len().checked_sub(1)?;
        Some(self.origin[at].0..self.origin[last].1)
    }
}
