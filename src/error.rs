// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that abort a spell-check request or an index load.
//!
//! Only request-level problems live here. A candidate with no posting list or
//! one filtered out by the field mask is a `TermScore`, not an error, and never
//! stops the request.

use std::path::PathBuf;

/// Everything that can go wrong before or while building a report.
#[derive(Debug, thiserror::Error)]
pub enum SpellCheckError {
    /// An include or exclude dictionary does not exist.
    #[error("dictionary not found: `{name}`")]
    DictionaryNotFound { name: String },

    /// Edit distance outside the supported range.
    #[error("invalid distance {distance}: must be between 1 and {max}")]
    InvalidDistance { distance: u8, max: u8 },

    /// The schema declares more fields than a field mask can hold.
    #[error("schema declares {count} fields, at most 64 are supported")]
    TooManyFields { count: usize },

    /// A field name referenced by a document or query is not in the schema.
    #[error("unknown field: `{name}`")]
    UnknownField { name: String },

    /// The query AST could not be decoded (unknown node type or bad payload).
    #[error("malformed query: {0}")]
    MalformedQuery(#[source] serde_json::Error),

    /// The corpus file is not valid JSON for its schema.
    #[error("invalid corpus: {0}")]
    Corpus(#[source] serde_json::Error),

    /// The config file is not valid JSON for `SpellCheckConfig`.
    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    /// Reading an input file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpellCheckError {
    pub fn dictionary_not_found(name: impl Into<String>) -> Self {
        SpellCheckError::DictionaryNotFound { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, SpellCheckError>;
