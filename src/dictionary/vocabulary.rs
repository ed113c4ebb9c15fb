// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted term set with fuzzy lookup.
//!
//! A plain sorted `Vec<String>`: binary search for exact membership, a linear
//! scan with bounded Levenshtein for fuzzy lookup. The length filter inside
//! `bounded_distance` rejects most of the vocabulary before any DP runs.
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `contains`   | O(log n)   |
//! | `insert`     | O(n)       |
//! | `fuzzy`      | O(n) with early exits |

use super::{FuzzyMatch, TermSource};
use crate::fuzzy::bounded_distance;
use crate::util::normalize;
use serde::{Deserialize, Serialize};

/// Sorted, duplicate-free set of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary terms; sorts and dedupes.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort();
        terms.dedup();
        Self { terms }
    }

    /// Parse a word list: one term per line, `#` starts a comment line.
    ///
    /// Terms are normalized the same way index terms are.
    pub fn from_word_list(text: &str) -> Self {
        Self::from_terms(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(normalize),
        )
    }

    /// Insert a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        match self.terms.binary_search(&term) {
            Ok(_) => false,
            Err(pos) => {
                self.terms.insert(pos, term);
                true
            }
        }
    }

    /// Remove a term. Returns `false` if it was not present.
    pub fn remove(&mut self, term: &str) -> bool {
        match self.terms.binary_search_by(|t| t.as_str().cmp(term)) {
            Ok(pos) => {
                self.terms.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl TermSource for Vocabulary {
    fn contains(&self, term: &str) -> bool {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .is_ok()
    }

    fn fuzzy<'a>(
        &'a self,
        term: &str,
        max_distance: u8,
    ) -> Box<dyn Iterator<Item = FuzzyMatch> + 'a> {
        let query: Vec<char> = term.chars().collect();
        let max = usize::from(max_distance);
        Box::new(self.terms.iter().filter_map(move |candidate| {
            bounded_distance(&query, candidate, max).map(|distance| FuzzyMatch {
                term: candidate.clone(),
                distance: distance as u8,
            })
        }))
    }

    fn len(&self) -> usize {
        self.terms.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
