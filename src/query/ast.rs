// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query AST.
//!
//! Serialized with an internal `type` tag so a query can be supplied as JSON:
//!
//! ```json
//! { "type": "union", "children": [
//!     { "type": "token", "term": "helo" },
//!     { "type": "not", "child": { "type": "token", "term": "wrld", "fieldMask": 2 } }
//! ] }
//! ```
//!
//! An unknown `type` fails to deserialize; there is no catch-all variant.

use crate::error::{Result, SpellCheckError};
use crate::types::FieldMask;
use crate::util::{normalize, tokenize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QueryNode {
    /// Terms that must all match (intersection)
    Phrase {
        children: Vec<QueryNode>,
        #[serde(default)]
        exact: bool,
    },
    /// A literal term
    Token {
        term: String,
        #[serde(default, rename = "fieldMask")]
        field_mask: FieldMask,
    },
    Not {
        child: Box<QueryNode>,
    },
    Optional {
        child: Box<QueryNode>,
    },
    Union {
        children: Vec<QueryNode>,
    },
    /// Tag-field filter; its children are the tag values
    Tag {
        field: String,
        children: Vec<QueryNode>,
    },
    Prefix {
        prefix: String,
    },
    Numeric {
        field: String,
        min: f64,
        max: f64,
    },
    Geo {
        field: String,
        lon: f64,
        lat: f64,
        radius: f64,
    },
    Ids {
        ids: Vec<String>,
    },
    Wildcard {
        pattern: String,
    },
    Fuzzy {
        term: String,
        distance: u8,
    },
}

impl QueryNode {
    pub fn token(term: impl Into<String>) -> Self {
        QueryNode::Token {
            term: term.into(),
            field_mask: FieldMask::ALL,
        }
    }

    pub fn token_in(term: impl Into<String>, field_mask: FieldMask) -> Self {
        QueryNode::Token {
            term: term.into(),
            field_mask,
        }
    }

    pub fn phrase(children: Vec<QueryNode>) -> Self {
        QueryNode::Phrase {
            children,
            exact: false,
        }
    }

    pub fn union(children: Vec<QueryNode>) -> Self {
        QueryNode::Union { children }
    }

    pub fn not(child: QueryNode) -> Self {
        QueryNode::Not {
            child: Box::new(child),
        }
    }

    pub fn optional(child: QueryNode) -> Self {
        QueryNode::Optional {
            child: Box::new(child),
        }
    }

    /// Phrase of normalized tokens from plain text, all sharing `field_mask`.
    ///
    /// A single word yields a bare token rather than a one-child phrase.
    pub fn from_text(text: &str, field_mask: FieldMask) -> Self {
        let mut children: Vec<QueryNode> = tokenize(text)
            .map(|term| QueryNode::token_in(term, field_mask))
            .collect();
        if children.len() == 1 {
            children.remove(0)
        } else {
            QueryNode::phrase(children)
        }
    }

    /// Decode a JSON query. Token terms are normalized like text queries.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut node: QueryNode =
            serde_json::from_str(raw).map_err(SpellCheckError::MalformedQuery)?;
        node.normalize_tokens();
        Ok(node)
    }

    /// Normalize every token term in this subtree in place.
    pub fn normalize_tokens(&mut self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                QueryNode::Token { term, .. } => *term = normalize(term),
                QueryNode::Phrase { children, .. }
                | QueryNode::Union { children }
                | QueryNode::Tag { children, .. } => stack.extend(children.iter_mut()),
                QueryNode::Not { child } | QueryNode::Optional { child } => {
                    stack.push(child.as_mut())
                }
                QueryNode::Prefix { .. }
                | QueryNode::Numeric { .. }
                | QueryNode::Geo { .. }
                | QueryNode::Ids { .. }
                | QueryNode::Wildcard { .. }
                | QueryNode::Fuzzy { .. } => {}
            }
        }
    }

    /// Child nodes of container variants; empty for leaves.
    pub fn children(&self) -> &[QueryNode] {
        match self {
            QueryNode::Phrase { children, .. }
            | QueryNode::Union { children }
            | QueryNode::Tag { children, .. } => children,
            QueryNode::Not { child } | QueryNode::Optional { child } => {
                std::slice::from_ref(child.as_ref())
            }
            QueryNode::Token { .. }
            | QueryNode::Prefix { .. }
            | QueryNode::Numeric { .. }
            | QueryNode::Geo { .. }
            | QueryNode::Ids { .. }
            | QueryNode::Wildcard { .. }
            | QueryNode::Fuzzy { .. } => &[],
        }
    }

    /// Total nodes in this subtree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}
