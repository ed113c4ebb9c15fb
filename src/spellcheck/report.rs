// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spell-check results and their reply shape.

use crate::types::Suggestion;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Shown in place of an empty suggestion list.
pub const NO_SUGGESTIONS: &str = "no spelling corrections found";

/// Suggestions for one processed query term, ascending by score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSuggestions {
    pub term: String,
    pub suggestions: Vec<Suggestion>,
}

impl TermSuggestions {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// One entry per processed term, plus the corpus size in full-score mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckReport {
    /// `doc_table_size - 1`, present only with full score info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_docs: Option<u64>,
    pub entries: Vec<TermSuggestions>,
}

impl SpellCheckReport {
    /// Reply length: entries, plus one leading element in full-score mode.
    pub fn len(&self) -> usize {
        self.entries.len() + usize::from(self.total_docs.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry(&self, term: &str) -> Option<&TermSuggestions> {
        self.entries.iter().find(|e| e.term == term)
    }

    /// Reply-shaped rendering.
    ///
    /// ```text
    /// [ total_docs?,
    ///   ["TERM", term, [[score, suggestion], ...] | "no spelling corrections found"],
    ///   ... ]
    /// ```
    pub fn to_reply(&self) -> Value {
        let mut reply: Vec<Value> = Vec::with_capacity(self.len());
        if let Some(total) = self.total_docs {
            reply.push(json!(total));
        }
        for entry in &self.entries {
            let suggestions = if entry.is_empty() {
                json!(NO_SUGGESTIONS)
            } else {
                Value::Array(
                    entry
                        .suggestions
                        .iter()
                        .map(|s| json!([s.score, s.term]))
                        .collect(),
                )
            };
            reply.push(json!(["TERM", entry.term, suggestions]));
        }
        Value::Array(reply)
    }
}
