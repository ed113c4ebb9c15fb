// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::dictionary::DictionaryRegistry;
use crate::index::{Corpus, CorpusDoc, SearchIndex};

/// Single-field corpus with one document per text.
pub fn make_corpus(texts: &[&str]) -> Corpus {
    Corpus {
        fields: vec!["body".to_string()],
        docs: texts
            .iter()
            .map(|text| CorpusDoc::new([("body", *text)]))
            .collect(),
    }
}

/// Two-field corpus of `(title, body)` pairs.
pub fn make_titled_corpus(docs: &[(&str, &str)]) -> Corpus {
    Corpus {
        fields: vec!["title".to_string(), "body".to_string()],
        docs: docs
            .iter()
            .map(|(title, body)| CorpusDoc::new([("title", *title), ("body", *body)]))
            .collect(),
    }
}

/// Index over `texts`, one document each.
///
/// # Panics
/// Never for a single-field corpus; the schema cannot overflow.
pub fn make_index(texts: &[&str]) -> SearchIndex {
    SearchIndex::build(make_corpus(texts)).expect("single-field corpus always builds")
}

/// Small mixed corpus used across the suite.
///
/// | term   | docs |
/// |--------|------|
/// | hello  | 3    |
/// | help   | 2    |
/// | helm   | 1    |
/// | world  | 2    |
/// | word   | 1    |
pub fn sample_index() -> SearchIndex {
    make_index(&[
        "hello world",
        "hello help",
        "hello helm word",
        "help world",
    ])
}

/// Registry holding a single dictionary `name`.
pub fn registry_with(name: &str, terms: &[&str]) -> DictionaryRegistry {
    let mut registry = DictionaryRegistry::new();
    registry.add(name, terms.iter().copied());
    registry
}
