// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spell-check orchestration.
//!
//! ```text
//! validate config, resolve every include/exclude dictionary   (abort on first miss)
//! for each Token in the query:
//!     in primary dictionary?      → skip (term is spelled right)
//!     in any exclude dictionary?  → skip (term is allowed)
//!     otherwise                   → gather candidates from primary + includes,
//!                                   score, dedupe, sort ascending, emit entry
//! ```
//!
//! Skipped terms produce no entry. A processed term always produces one, even
//! when no correction was found. Nothing is emitted if the request aborts.

mod report;

pub use report::*;

use crate::config::SpellCheckConfig;
use crate::contracts::{check_suggestions_sorted, check_suggestions_unique};
use crate::dictionary::{DictionaryResolver, TermSource};
use crate::error::{Result, SpellCheckError};
use crate::query::{QueryNode, QueryTerm, QueryTerms};
use crate::scoring::{indexed_docs, score_candidate, RelevanceOracle};
use crate::suggest::{GatherStats, SuggestionSet};
use crate::types::{FieldMask, ScoreMode};
use tracing::{debug, instrument, trace};

/// Why a query term produced no report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Present in the primary term dictionary
    Known,
    /// Present in the named exclude dictionary
    Excluded(String),
}

/// One spell-check request bound to its index, dictionaries, and settings.
pub struct SpellChecker<'a> {
    primary: &'a dyn TermSource,
    oracle: &'a dyn RelevanceOracle,
    dictionaries: &'a dyn DictionaryResolver,
    config: &'a SpellCheckConfig,
}

impl<'a> SpellChecker<'a> {
    pub fn new(
        primary: &'a dyn TermSource,
        oracle: &'a dyn RelevanceOracle,
        dictionaries: &'a dyn DictionaryResolver,
        config: &'a SpellCheckConfig,
    ) -> Self {
        Self {
            primary,
            oracle,
            dictionaries,
            config,
        }
    }

    /// Run the request over `query`.
    #[instrument(
        name = "termcheck::spellcheck",
        skip_all,
        fields(
            distance = self.config.distance,
            full_score_info = self.config.full_score_info,
            include = self.config.include.len(),
            exclude = self.config.exclude.len(),
        )
    )]
    pub fn check(&self, query: &QueryNode) -> Result<SpellCheckReport> {
        self.config.validate()?;
        self.check_dictionaries()?;

        let total_docs = match self.config.score_mode() {
            ScoreMode::FullScoreInfo => Some(indexed_docs(self.oracle.doc_table_size())),
            ScoreMode::Normalized => None,
        };

        let mut entries = Vec::new();
        for query_term in QueryTerms::new(query) {
            if let Some(reason) = self.skip_reason(query_term.term)? {
                debug!(term = query_term.term, ?reason, "term skipped");
                continue;
            }
            entries.push(self.suggest(query_term)?);
        }

        debug!(processed = entries.len(), "spellcheck complete");
        Ok(SpellCheckReport {
            total_docs,
            entries,
        })
    }

    /// Every configured dictionary must exist before any term is looked at.
    pub fn check_dictionaries(&self) -> Result<()> {
        for name in self.config.dictionaries() {
            if self.dictionaries.resolve(name).is_none() {
                return Err(SpellCheckError::dictionary_not_found(name));
            }
        }
        Ok(())
    }

    /// `Some` when `term` needs no correction.
    pub fn skip_reason(&self, term: &str) -> Result<Option<SkipReason>> {
        if self.primary.contains(term) {
            return Ok(Some(SkipReason::Known));
        }
        for name in &self.config.exclude {
            let dict = self.open(name)?;
            if dict.contains(term) {
                return Ok(Some(SkipReason::Excluded(name.clone())));
            }
        }
        Ok(None)
    }

    /// Gather, score, dedupe, and sort corrections for one processed term.
    pub fn suggest(&self, query_term: QueryTerm<'_>) -> Result<TermSuggestions> {
        let mut set = SuggestionSet::new();

        self.gather(self.primary, query_term, &mut set);
        for name in &self.config.include {
            let dict = self.open(name)?;
            self.gather(dict, query_term, &mut set);
        }

        let stats: GatherStats = set.stats();
        debug_assert!(stats.is_balanced());
        debug!(
            term = query_term.term,
            offered = stats.offered,
            accepted = stats.accepted,
            duplicates = stats.duplicates,
            excluded = stats.excluded,
            "suggestions gathered"
        );

        let suggestions = set.into_sorted();
        check_suggestions_sorted(&suggestions);
        check_suggestions_unique(&suggestions);

        Ok(TermSuggestions {
            term: query_term.term.to_string(),
            suggestions,
        })
    }

    /// Feed one source's fuzzy candidates into `set`.
    fn gather(&self, source: &dyn TermSource, query_term: QueryTerm<'_>, set: &mut SuggestionSet) {
        let mode = self.config.score_mode();
        let mask: FieldMask = query_term.field_mask;
        for candidate in source.fuzzy(query_term.term, self.config.distance) {
            let distance = candidate.distance;
            let admission = set.offer_with(candidate.term, |term| {
                score_candidate(self.oracle, term, mask, mode)
            });
            trace!(distance, ?admission, "candidate offered");
        }
    }

    fn open(&self, name: &str) -> Result<&'a dyn TermSource> {
        self.dictionaries
            .resolve(name)
            .ok_or_else(|| SpellCheckError::dictionary_not_found(name))
    }
}
