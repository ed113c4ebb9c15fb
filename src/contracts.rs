// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for spell-check results.
//!
//! Debug-mode assertions over the properties every report must satisfy. They
//! compile to nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                      |
//! |------------------------------|-----------------------------------------------|
//! | `check_suggestions_sorted`   | scores non-decreasing within one entry        |
//! | `check_suggestions_unique`   | no two suggestions share a term               |
//! | `check_posting_list`         | postings sorted by doc id, `doc_freq` matches |
//!
//! # Usage
//!
//! ```ignore
//! use termcheck::contracts::*;
//!
//! // Panics in debug builds if the list is out of order
//! check_suggestions_sorted(&suggestions);
//! ```

use crate::types::{PostingList, Suggestion};
use std::collections::HashSet;

// ============================================================================
// SUGGESTION CONTRACTS
// ============================================================================

/// Check that suggestions are in ascending score order.
///
/// # Panics (debug builds only)
/// Panics if any score is greater than the one after it.
#[inline]
pub fn check_suggestions_sorted(suggestions: &[Suggestion]) {
    for (i, pair) in suggestions.windows(2).enumerate() {
        debug_assert!(
            pair[0].score <= pair[1].score || pair[0].score.is_nan() || pair[1].score.is_nan(),
            "Contract violation: suggestions unsorted at {}: {} ({}) > {} ({})",
            i,
            pair[0].term,
            pair[0].score,
            pair[1].term,
            pair[1].score
        );
    }
}

/// Check that every suggestion term appears once.
///
/// # Panics (debug builds only)
/// Panics on the first repeated term.
#[inline]
pub fn check_suggestions_unique(suggestions: &[Suggestion]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(suggestions.len());
        for s in suggestions {
            debug_assert!(
                seen.insert(s.term.as_str()),
                "Contract violation: duplicate suggestion '{}'",
                s.term
            );
        }
    }
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that a posting list is strictly ordered by doc id and that its cached
/// `doc_freq` matches.
#[inline]
pub fn check_posting_list(term: &str, list: &PostingList) {
    debug_assert_eq!(
        list.doc_freq,
        list.postings.len(),
        "Contract violation: doc_freq mismatch for '{}'",
        term
    );
    debug_assert!(
        list.postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id),
        "Contract violation: postings for '{}' not sorted by doc_id",
        term
    );
}
