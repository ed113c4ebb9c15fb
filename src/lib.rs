// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling suggestions for query terms, drawn from a search index.
//!
//! Given a parsed query, every plain token that is not in the index vocabulary
//! (and not allow-listed by an exclude dictionary) gets a list of fuzzy
//! corrections. Candidates come from the index's term dictionary and from
//! named include dictionaries, are scored by how many documents contain them
//! under the token's field filter, deduplicated, and sorted ascending.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  query   │───▶│ spellcheck │───▶│   suggest    │───▶│    report    │
//! │ (terms)  │    │ (gating)   │    │ (dedup/sort) │    │ (reply JSON) │
//! └──────────┘    └────────────┘    └──────────────┘    └──────────────┘
//!                   │        │             ▲
//!                   ▼        ▼             │
//!           ┌────────────┐ ┌──────────┐    │
//!           │ dictionary │ │ scoring  │────┘
//!           │ (fuzzy)    │ │ (oracle) │
//!           └────────────┘ └──────────┘
//!                   ▲        ▲
//!                   └─ index ┘
//! ```
//!
//! # Usage
//!
//! ```
//! use termcheck::{Corpus, CorpusDoc, DictionaryRegistry, QueryNode, SearchIndex, SpellCheckConfig};
//!
//! let index = SearchIndex::build(Corpus {
//!     fields: vec!["body".into()],
//!     docs: vec![CorpusDoc::new([("body", "hello help")])],
//! })
//! .unwrap();
//!
//! let config = SpellCheckConfig::default();
//! let dicts = DictionaryRegistry::new();
//! let report = index
//!     .spell_checker(&dicts, &config)
//!     .check(&QueryNode::from_text("helo", Default::default()))
//!     .unwrap();
//!
//! assert_eq!(report.entries[0].term, "helo");
//! assert_eq!(report.entries[0].suggestions.len(), 2);
//! ```

pub mod config;
pub mod contracts;
pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod scoring;
pub mod spellcheck;
pub mod suggest;
pub mod types;
pub mod util;

pub mod testing;

// Re-exports for public API
pub use config::{SpellCheckConfig, DEFAULT_DISTANCE, MAX_DISTANCE};
pub use dictionary::{
    DictionaryRegistry, DictionaryResolver, FuzzyMatch, NoDictionaries, TermSource, Vocabulary,
};
pub use error::{Result, SpellCheckError};
pub use fuzzy::{bounded_distance, levenshtein_within};
pub use index::{Corpus, CorpusDoc, InvertedIndex, Schema, SearchIndex, MAX_FIELDS};
pub use query::{extract_terms, QueryNode, QueryTerm, QueryTerms};
pub use scoring::{indexed_docs, score_candidate, RelevanceOracle, TermLookup};
pub use spellcheck::{SkipReason, SpellCheckReport, SpellChecker, TermSuggestions, NO_SUGGESTIONS};
pub use suggest::{Admission, GatherStats, SuggestionSet};
pub use types::{FieldMask, Posting, PostingList, ScoreMode, Suggestion, TermScore};
pub use util::{normalize, tokenize};
