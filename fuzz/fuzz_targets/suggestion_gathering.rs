// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suggestion gathering.
//!
//! Random corpora, dictionaries, and queries. Every report must keep its
//! suggestions sorted and unique, never suggest for known or excluded terms,
//! and account for every offered candidate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use termcheck::{
    Corpus, CorpusDoc, DictionaryRegistry, QueryNode, SearchIndex, SpellCheckConfig, TermSource,
};

#[derive(Debug, Arbitrary)]
struct GatherInput {
    docs: Vec<String>,
    include: Vec<String>,
    exclude: Vec<String>,
    query: Vec<String>,
    distance: u8,
    full_score_info: bool,
}

fuzz_target!(|input: GatherInput| {
    let corpus = Corpus {
        fields: vec!["body".to_string()],
        docs: input
            .docs
            .iter()
            .take(16)
            .map(|text| CorpusDoc::new([("body", text.as_str())]))
            .collect(),
    };
    let Ok(index) = SearchIndex::build(corpus) else {
        return;
    };

    let mut dicts = DictionaryRegistry::new();
    dicts.add("inc", input.include.iter().take(16));
    dicts.add("exc", input.exclude.iter().take(16));

    let mut config = SpellCheckConfig::default()
        .with_distance(input.distance % 4 + 1)
        .with_full_score_info(input.full_score_info);
    if dicts.get("inc").is_some() {
        config = config.include("inc");
    }
    if dicts.get("exc").is_some() {
        config = config.exclude("exc");
    }

    let query = QueryNode::phrase(
        input
            .query
            .iter()
            .take(8)
            .map(|t| QueryNode::token(t.chars().take(24).collect::<String>()))
            .collect(),
    );

    let report = index
        .spell_checker(&dicts, &config)
        .check(&query)
        .expect("every referenced dictionary exists");

    if input.full_score_info {
        assert_eq!(report.total_docs, Some(index.num_docs() as u64));
    } else {
        assert!(report.total_docs.is_none());
    }

    let excluded = dicts.get("exc");
    for entry in &report.entries {
        assert!(!index.terms().contains(&entry.term), "known term processed");
        if let Some(exc) = excluded {
            assert!(!exc.contains(&entry.term), "excluded term processed");
        }

        let mut seen = HashSet::new();
        for pair in entry.suggestions.windows(2) {
            assert!(pair[0].score <= pair[1].score, "unsorted suggestions");
        }
        for s in &entry.suggestions {
            assert!(s.score.is_finite() && s.score >= 0.0, "bad score {}", s.score);
            assert!(seen.insert(s.term.as_str()), "duplicate suggestion {}", s.term);
        }
    }
});
