// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deduplicated, score-ordered suggestions for one query term.
//!
//! The same correction can come out of the primary dictionary, several include
//! dictionaries, and even twice from one fuzzy iterator. `SuggestionSet` keeps
//! the first scored occurrence and reports what happened to every other one.
//!
//! **Invariant**: no two suggestions share identical term bytes.
//!
//! Only successfully scored candidates enter the dedup index. An excluded
//! candidate leaves no trace, so a later source may still offer it.
//!
//! Ownership: `offer` takes the candidate by value. It ends up inside a
//! `Suggestion` or is dropped before `offer` returns, exactly once either way.

use crate::types::{Suggestion, TermScore};
use std::collections::HashSet;

/// What `SuggestionSet::offer` did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    Duplicate,
    Excluded,
}

/// Running counts of admission outcomes.
///
/// `offered == accepted + duplicates + excluded` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatherStats {
    pub offered: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub excluded: usize,
}

impl GatherStats {
    pub fn record(&mut self, admission: Admission) {
        self.offered += 1;
        match admission {
            Admission::Accepted => self.accepted += 1,
            Admission::Duplicate => self.duplicates += 1,
            Admission::Excluded => self.excluded += 1,
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.offered == self.accepted + self.duplicates + self.excluded
    }
}

#[derive(Debug, Default)]
pub struct SuggestionSet {
    seen: HashSet<String>,
    items: Vec<Suggestion>,
    stats: GatherStats,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has `term` already been accepted?
    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    /// Offer a candidate whose score is computed lazily.
    ///
    /// `score` runs only for terms not yet accepted, so duplicates cost no
    /// index lookup.
    pub fn offer_with<F>(&mut self, term: String, score: F) -> Admission
    where
        F: FnOnce(&str) -> TermScore,
    {
        let admission = if self.seen.contains(&term) {
            Admission::Duplicate
        } else {
            match score(&term).value() {
                None => Admission::Excluded,
                Some(value) => {
                    self.seen.insert(term.clone());
                    self.items.push(Suggestion::new(term, value));
                    Admission::Accepted
                }
            }
        };
        self.stats.record(admission);
        admission
    }

    /// Offer a candidate with a precomputed score.
    pub fn offer(&mut self, term: String, score: TermScore) -> Admission {
        self.offer_with(term, |_| score)
    }

    /// Stable sort by ascending score; ties keep insertion order and NaN sorts last.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    /// Sort and hand over the suggestions.
    pub fn into_sorted(mut self) -> Vec<Suggestion> {
        self.sort();
        self.items
    }

    pub fn stats(&self) -> GatherStats {
        self.stats
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
