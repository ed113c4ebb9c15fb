// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus input format.
//!
//! ```json
//! {
//!   "fields": ["title", "body"],
//!   "docs": [
//!     { "key": "doc:1", "fields": { "title": "Hello", "body": "World" } }
//!   ]
//! }
//! ```

use crate::error::{Result, SpellCheckError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    /// Schema fields in bit order
    pub fields: Vec<String>,
    #[serde(default)]
    pub docs: Vec<CorpusDoc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusDoc {
    #[serde(default)]
    pub key: Option<String>,
    /// Field name → text
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl CorpusDoc {
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: None,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl Corpus {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(SpellCheckError::Corpus)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SpellCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}
