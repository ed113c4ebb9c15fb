//! Candidate gathering: distance bound, dedup, ordering.

use super::common::{
    assert_sorted, assert_unique, check, check_default, make_index, sample_index, terms_of,
};
use termcheck::{DictionaryRegistry, QueryNode, SpellCheckConfig};

#[test]
fn test_candidates_within_distance_one() {
    let index = sample_index();
    let report = check_default(&index, &QueryNode::token("helo"));
    // helm 1/4, help 2/4, hello 3/4
    assert_eq!(terms_of(&report.entries[0]), vec!["helm", "help", "hello"]);
}

#[test]
fn test_wider_distance_finds_more() {
    let index = sample_index();
    let narrow = check_default(&index, &QueryNode::token("wrd"));
    assert_eq!(terms_of(&narrow.entries[0]), vec!["word"]);

    let config = SpellCheckConfig::default().with_distance(2);
    let wide = check(&index, &DictionaryRegistry::new(), &config, &QueryNode::token("wrd"));
    let terms = terms_of(&wide.entries[0]);
    assert!(terms.contains(&"word"));
    assert!(terms.contains(&"world"));
}

#[test]
fn test_no_matches_yields_empty_entry() {
    let index = sample_index();
    let report = check_default(&index, &QueryNode::token("zzzzzz"));
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].term, "zzzzzz");
    assert!(report.entries[0].is_empty());
}

#[test]
fn test_existing_terms_are_never_suggested_for_themselves() {
    let index = sample_index();
    let report = check_default(&index, &QueryNode::from_text("hello helo", Default::default()));
    for entry in &report.entries {
        assert_ne!(entry.term, "hello");
    }
}

#[test]
fn test_cross_dictionary_duplicates_merge() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("a", ["hello", "help", "helot"]);
    dicts.add("b", ["hello", "helot", "heli"]);
    let config = SpellCheckConfig::default().include("a").include("b");
    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    let entry = &report.entries[0];
    assert_unique(entry);
    assert_sorted(entry);

    let mut terms = terms_of(entry);
    terms.sort_unstable();
    assert_eq!(terms, vec!["heli", "hello", "helm", "helot", "help"]);
}

#[test]
fn test_first_scored_occurrence_wins() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("a", ["hello"]);
    let config = SpellCheckConfig::default().include("a");
    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    let hello: Vec<_> = report.entries[0]
        .suggestions
        .iter()
        .filter(|s| s.term == "hello")
        .collect();
    assert_eq!(hello.len(), 1);
    assert_eq!(hello[0].score, 0.75);
}

#[test]
fn test_sorted_after_all_sources() {
    // Include-only candidates score 0 and must land ahead of indexed ones.
    let index = make_index(&["cart", "cart", "cat"]);
    let mut dicts = DictionaryRegistry::new();
    dicts.add("extra", ["carp"]);
    let config = SpellCheckConfig::default().include("extra");
    let report = check(&index, &dicts, &config, &QueryNode::token("car"));
    let entry = &report.entries[0];
    assert_sorted(entry);
    assert_eq!(terms_of(entry).first(), Some(&"carp"));
}

#[test]
fn test_ties_keep_gathering_order() {
    let index = make_index(&["bat", "cat", "hat"]);
    let report = check_default(&index, &QueryNode::token("xat"));
    // Every candidate scores 1/3; the vocabulary yields them in sorted order.
    assert_eq!(terms_of(&report.entries[0]), vec!["bat", "cat", "hat"]);
}
