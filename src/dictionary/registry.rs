// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named auxiliary dictionaries.
//!
//! Include lists add candidates the index has never seen (product names,
//! jargon); exclude lists mark terms that are correct even though the index
//! lacks them. A dictionary exists while it has at least one term: removing
//! the last term drops it, so later lookups report it as missing.

use super::{DictionaryResolver, TermSource, Vocabulary};
use crate::error::{Result, SpellCheckError};
use crate::util::normalize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct DictionaryRegistry {
    dictionaries: HashMap<String, Vocabulary>,
}

impl DictionaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add terms to `name`, creating it if needed. Returns how many were new.
    ///
    /// Terms are normalized before storage; blank ones are skipped.
    pub fn add<I, S>(&mut self, name: &str, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dict = self.dictionaries.entry(name.to_string()).or_default();
        let added = terms
            .into_iter()
            .map(|term| {
                let term: String = term.into();
                normalize(term.trim())
            })
            .filter(|term| !term.is_empty())
            .fold(0, |count, term| count + usize::from(dict.insert(term)));
        if dict.is_empty() {
            self.dictionaries.remove(name);
        }
        debug!(dictionary = name, added, "dictionary terms added");
        added
    }

    /// Remove terms from `name`, matched after normalization. Returns how many
    /// were actually present.
    pub fn remove<'t, I>(&mut self, name: &str, terms: I) -> usize
    where
        I: IntoIterator<Item = &'t str>,
    {
        let Some(dict) = self.dictionaries.get_mut(name) else {
            return 0;
        };
        let removed = terms
            .into_iter()
            .fold(0, |count, term| {
                count + usize::from(dict.remove(&normalize(term.trim())))
            });
        if dict.is_empty() {
            self.dictionaries.remove(name);
        }
        debug!(dictionary = name, removed, "dictionary terms removed");
        removed
    }

    /// All terms of `name`, sorted.
    pub fn dump(&self, name: &str) -> Option<Vec<String>> {
        self.dictionaries.get(name).map(|d| d.terms().to_vec())
    }

    /// Register a word-list file under `name`, merging with existing terms.
    pub fn load_word_list(&mut self, name: &str, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path).map_err(|source| SpellCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocab = Vocabulary::from_word_list(&text);
        Ok(self.add(name, vocab.terms().iter().cloned()))
    }

    pub fn get(&self, name: &str) -> Option<&Vocabulary> {
        self.dictionaries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

impl DictionaryResolver for DictionaryRegistry {
    fn resolve(&self, name: &str) -> Option<&dyn TermSource> {
        self.dictionaries.get(name).map(|d| d as &dyn TermSource)
    }
}
