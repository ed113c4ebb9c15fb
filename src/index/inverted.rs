// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # Invariants
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by `doc_id`
//! 2. **ONE_POSTING_PER_DOC**: a document appears at most once per term, its
//!    `field_mask` the union of every field the term occurs in
//! 3. **DOC_FREQ_CORRECT**: `doc_freq == postings.len()`
//! 4. **NON_EMPTY**: every indexed term has at least one posting

use super::corpus::CorpusDoc;
use super::schema::Schema;
#[cfg(debug_assertions)]
use crate::contracts::check_posting_list;
use crate::error::{Result, SpellCheckError};
use crate::types::{FieldMask, Posting, PostingList};
use crate::util::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Term → posting list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingList>,
}

/// Per-document term statistics: field union and occurrence count.
type DocTerms = HashMap<String, (FieldMask, u32)>;

fn tokenize_doc(schema: &Schema, doc: &CorpusDoc) -> Result<DocTerms> {
    let mut terms: DocTerms = HashMap::new();
    for (field, text) in &doc.fields {
        let bit = schema
            .field_bit(field)
            .ok_or_else(|| SpellCheckError::UnknownField {
                name: field.clone(),
            })?;
        let mask = FieldMask::field(bit);
        for word in tokenize(text) {
            let entry = terms.entry(word).or_insert((FieldMask::NONE, 0));
            entry.0 |= mask;
            entry.1 += 1;
        }
    }
    Ok(terms)
}

impl InvertedIndex {
    /// Build from documents. Document `i` gets id `i + 1`; id 0 is reserved.
    ///
    /// With the `parallel` feature, tokenization runs one rayon task per
    /// document and the per-document maps are merged afterwards.
    pub fn build(schema: &Schema, docs: &[CorpusDoc]) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let per_doc: Vec<DocTerms> = docs
            .par_iter()
            .map(|doc| tokenize_doc(schema, doc))
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let per_doc: Vec<DocTerms> = docs
            .iter()
            .map(|doc| tokenize_doc(schema, doc))
            .collect::<Result<_>>()?;

        let mut terms: HashMap<String, PostingList> = HashMap::new();
        for (idx, doc_terms) in per_doc.into_iter().enumerate() {
            let doc_id = idx as u32 + 1;
            for (term, (field_mask, freq)) in doc_terms {
                let list = terms.entry(term).or_default();
                // Documents arrive in id order, so pushing keeps lists sorted.
                list.postings.push(Posting {
                    doc_id,
                    field_mask,
                    freq,
                });
                list.doc_freq += 1;
            }
        }

        #[cfg(debug_assertions)]
        for (term, list) in &terms {
            check_posting_list(term, list);
        }

        Ok(Self { terms })
    }

    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
