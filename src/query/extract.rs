// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collecting spell-checkable terms from a query tree.
//!
//! Explicit stack, no recursion, so a pathologically deep tree cannot blow the
//! call stack. Children are pushed in order and popped last-first, which makes
//! the visit order right-to-left. Callers must not depend on it; they do get
//! every reachable `Token` exactly once.

use super::ast::QueryNode;
use crate::types::FieldMask;

/// A query token eligible for spell-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTerm<'a> {
    pub term: &'a str,
    pub field_mask: FieldMask,
}

/// Lazy walk over the `Token` leaves of a query tree.
pub struct QueryTerms<'a> {
    stack: Vec<&'a QueryNode>,
}

impl<'a> QueryTerms<'a> {
    pub fn new(root: &'a QueryNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for QueryTerms<'a> {
    type Item = QueryTerm<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                QueryNode::Token { term, field_mask } => {
                    return Some(QueryTerm {
                        term,
                        field_mask: *field_mask,
                    });
                }
                QueryNode::Phrase { children, .. }
                | QueryNode::Union { children }
                | QueryNode::Tag { children, .. } => self.stack.extend(children.iter()),
                QueryNode::Not { child } | QueryNode::Optional { child } => {
                    self.stack.push(child)
                }
                // Leaves that carry no literal term.
                QueryNode::Prefix { .. }
                | QueryNode::Numeric { .. }
                | QueryNode::Geo { .. }
                | QueryNode::Ids { .. }
                | QueryNode::Wildcard { .. }
                | QueryNode::Fuzzy { .. } => {}
            }
        }
        None
    }
}

/// Every `Token` reachable through phrase, union, tag, not and optional nodes.
pub fn extract_terms(root: &QueryNode) -> Vec<QueryTerm<'_>> {
    QueryTerms::new(root).collect()
}
