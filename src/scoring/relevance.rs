// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate scoring against posting statistics.
//!
//! ```text
//! lookup(term, mask)
//!   ├─ no posting list         → Absent            (score 0)
//!   ├─ postings, none in mask  → Excluded          (dropped)
//!   └─ postings in mask
//!        ├─ FullScoreInfo      → doc_freq
//!        └─ Normalized         → doc_freq / (doc_table_size - 1)
//! ```
//!
//! `doc_table_size` counts the reserved sentinel slot, hence the `- 1`. A
//! table with no real documents scores 0 instead of dividing by zero.

use crate::types::{FieldMask, ScoreMode, TermScore};

/// What the index knows about one term under a field filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermLookup {
    /// No posting list exists for the term
    Absent,
    /// Postings exist, but none survives the field mask
    Filtered,
    /// At least one posting survives; `doc_freq` is unfiltered
    Matched { doc_freq: u64 },
}

/// Read-only access to posting statistics.
///
/// One lookup per candidate: open the posting list, read the first posting
/// that passes the mask. Implementations must not mutate index state.
pub trait RelevanceOracle {
    fn lookup(&self, term: &str, mask: FieldMask) -> TermLookup;

    /// Document table size, reserved slot included.
    fn doc_table_size(&self) -> u64;
}

/// Documents the corpus really holds (`doc_table_size - 1`, floored at 0).
#[inline]
pub fn indexed_docs(doc_table_size: u64) -> u64 {
    doc_table_size.saturating_sub(1)
}

/// Score a candidate term for a query token with field mask `mask`.
pub fn score_candidate(
    oracle: &dyn RelevanceOracle,
    term: &str,
    mask: FieldMask,
    mode: ScoreMode,
) -> TermScore {
    match oracle.lookup(term, mask) {
        TermLookup::Absent => TermScore::Absent,
        TermLookup::Filtered => TermScore::Excluded,
        TermLookup::Matched { doc_freq } => TermScore::Scored(match mode {
            ScoreMode::FullScoreInfo => doc_freq as f64,
            ScoreMode::Normalized => normalized_score(doc_freq, oracle.doc_table_size()),
        }),
    }
}

/// `doc_freq / (doc_table_size - 1)`, or 0 when there are no real documents.
#[inline]
pub fn normalized_score(doc_freq: u64, doc_table_size: u64) -> f64 {
    match indexed_docs(doc_table_size) {
        0 => 0.0,
        docs => doc_freq as f64 / docs as f64,
    }
}
