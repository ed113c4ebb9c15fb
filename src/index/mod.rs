// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index spell-checking runs against.
//!
//! Three pieces: a `Schema` telling field names from mask bits, the sorted
//! vocabulary of every indexed term (the primary `TermSource`), and the
//! inverted index that scoring consults for document counts.
//!
//! # Doc table size
//!
//! Document ids start at 1. Slot 0 is a reserved sentinel that every
//! document table carries, so `doc_table_size() == num_docs() + 1`. Scoring
//! subtracts it back out.

mod corpus;
mod inverted;
mod schema;

pub use corpus::*;
pub use inverted::*;
pub use schema::*;

use crate::config::SpellCheckConfig;
use crate::dictionary::{DictionaryResolver, TermSource, Vocabulary};
use crate::error::Result;
use crate::scoring::{RelevanceOracle, TermLookup};
use crate::spellcheck::SpellChecker;
use crate::types::FieldMask;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    schema: Schema,
    vocabulary: Vocabulary,
    inverted: InvertedIndex,
    keys: Vec<Option<String>>,
}

impl SearchIndex {
    pub fn build(corpus: Corpus) -> Result<Self> {
        let schema = Schema::new(corpus.fields)?;
        let inverted = InvertedIndex::build(&schema, &corpus.docs)?;
        let vocabulary = Vocabulary::from_terms(inverted.terms().map(str::to_owned));
        let keys = corpus.docs.into_iter().map(|doc| doc.key).collect();

        let index = Self {
            schema,
            vocabulary,
            inverted,
            keys,
        };
        info!(
            docs = index.num_docs(),
            terms = index.vocabulary.len(),
            fields = index.schema.len(),
            "index built"
        );
        Ok(index)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(Corpus::from_file(path)?)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every indexed term; the primary dictionary for spell-checking.
    pub fn terms(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    /// Documents actually indexed.
    pub fn num_docs(&self) -> usize {
        self.keys.len()
    }

    /// Document table size, reserved slot included.
    pub fn doc_table_size(&self) -> u64 {
        self.keys.len() as u64 + 1
    }

    /// Key of document `doc_id`, if it was given one.
    pub fn doc_key(&self, doc_id: u32) -> Option<&str> {
        let idx = (doc_id as usize).checked_sub(1)?;
        self.keys.get(idx)?.as_deref()
    }

    /// Spell checker over this index's vocabulary and postings.
    pub fn spell_checker<'a>(
        &'a self,
        dictionaries: &'a dyn DictionaryResolver,
        config: &'a SpellCheckConfig,
    ) -> SpellChecker<'a> {
        SpellChecker::new(&self.vocabulary, self, dictionaries, config)
    }
}

impl RelevanceOracle for SearchIndex {
    fn lookup(&self, term: &str, mask: FieldMask) -> TermLookup {
        match self.inverted.get(term) {
            None => TermLookup::Absent,
            Some(list) => match list.first_matching(mask) {
                Some(_) => TermLookup::Matched {
                    doc_freq: list.doc_freq as u64,
                },
                None => TermLookup::Filtered,
            },
        }
    }

    fn doc_table_size(&self) -> u64 {
        SearchIndex::doc_table_size(self)
    }
}
