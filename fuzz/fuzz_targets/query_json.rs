// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query AST decoding.
//!
//! Arbitrary bytes must either decode into a tree or fail with an error. A
//! decoded tree's extracted tokens never outnumber its nodes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termcheck::{extract_terms, QueryNode};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(query) = QueryNode::from_json(raw) {
        assert!(extract_terms(&query).len() <= query.node_count());
    }
});
