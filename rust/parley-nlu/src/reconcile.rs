//! Span reconciliation: the single pass that turns raw extractor output into
//! the final entity list.
//!
//! Candidates arrive in extractor-declared order. Walking them once:
//!
//! 1. A candidate whose `(start, end)` pair was already kept is dropped,
//!    whatever its kind.
//! 2. A candidate whose kind yields at a shared start (organization, product)
//!    is dropped when any kept span already starts at the same offset.
//!
//! Spans that merely overlap are all retained; nested or crossing entities
//! are part of the output contract.
//!
//! The result is ordered by ascending `start`. Spans sharing a start keep the
//! order in which they were discovered, so the output is a pure function of
//! the candidate list.

use std::collections::HashSet;

use crate::entity::EntitySpan;

/// Deduplicate `candidates` and order them by start offset.
pub fn reconcile(candidates: Vec<EntitySpan>) -> Vec<EntitySpan> {
    let mut spans = HashSet::new();
    let mut starts = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if spans.contains(&candidate.offsets()) {
            continue;
        }
        if candidate.kind.yields_at_shared_start() && starts.contains(&candidate.start) {
            continue;
        }

        spans.insert(candidate.offsets());
        starts.insert(candidate.start);
        kept.push(candidate);
    }

    // Stable, so ties keep discovery order.
    kept.sort_by_key(|span| span.start);
    kept
}
