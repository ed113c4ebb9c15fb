// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term dictionaries: where candidate corrections come from.
//!
//! Two seams live here. `TermSource` is anything that can answer "is this term
//! present?" and "which terms are within d edits?". `DictionaryResolver` maps a
//! dictionary name to a `TermSource`. The index's own vocabulary and the
//! auxiliary include/exclude lists both sit behind the first; the registry of
//! named lists sits behind the second.

mod registry;
mod vocabulary;

pub use registry::*;
pub use vocabulary::*;

/// A candidate produced by fuzzy iteration.
///
/// The term is owned: it moves into a `Suggestion` or is dropped on the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub term: String,
    pub distance: u8,
}

/// Exact and bounded-edit-distance lookup over a set of terms.
///
/// `fuzzy` yields every term within `max_distance` of `term`. The sequence is
/// finite and single-use; no order is promised and duplicates are allowed, so
/// callers must dedupe.
pub trait TermSource {
    fn contains(&self, term: &str) -> bool;

    fn fuzzy<'a>(
        &'a self,
        term: &str,
        max_distance: u8,
    ) -> Box<dyn Iterator<Item = FuzzyMatch> + 'a>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves dictionary names for include/exclude lists.
///
/// The returned borrow is the scope of the "open" dictionary: callers resolve
/// right before use and let it go before moving on to the next term.
pub trait DictionaryResolver {
    fn resolve(&self, name: &str) -> Option<&dyn TermSource>;
}

/// A resolver with no dictionaries at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionaries;

impl DictionaryResolver for NoDictionaries {
    fn resolve(&self, _name: &str) -> Option<&dyn TermSource> {
        None
    }
}
