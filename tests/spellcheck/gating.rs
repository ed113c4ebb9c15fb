//! Which query terms get spell-checked at all.

use super::common::{check, check_default, processed_terms, sample_index, terms_of};
use termcheck::testing::registry_with;
use termcheck::{DictionaryRegistry, QueryNode, SpellCheckConfig};

#[test]
fn test_known_terms_produce_no_entry() {
    let index = sample_index();
    let query = QueryNode::from_text("hello world helo", Default::default());
    let report = check_default(&index, &query);
    assert_eq!(processed_terms(&report), vec!["helo"]);
}

#[test]
fn test_all_known_query_yields_empty_report() {
    let index = sample_index();
    let report = check_default(&index, &QueryNode::from_text("hello help", Default::default()));
    assert!(report.entries.is_empty());
    assert!(report.is_empty());
}

#[test]
fn test_excluded_term_skipped_despite_fuzzy_matches() {
    let index = sample_index();
    let dicts = registry_with("allow", &["helo"]);
    let config = SpellCheckConfig::default().exclude("allow");
    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    assert!(report.entries.is_empty());
}

#[test]
fn test_any_exclude_dictionary_skips() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("first", ["unrelated"]);
    dicts.add("second", ["wrld"]);
    let config = SpellCheckConfig::default().exclude("first").exclude("second");
    let query = QueryNode::from_text("wrld helo", Default::default());
    let report = check(&index, &dicts, &config, &query);
    assert_eq!(processed_terms(&report), vec!["helo"]);
}

#[test]
fn test_include_dictionaries_do_not_gate() {
    let index = sample_index();
    let dicts = registry_with("extra", &["helo"]);
    let config = SpellCheckConfig::default().include("extra");
    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    let entry = &report.entries[0];
    assert_eq!(entry.term, "helo");
    // The include list offers the term itself; the index has never seen it.
    assert_eq!(terms_of(entry)[0], "helo");
    assert_eq!(entry.suggestions[0].score, 0.0);
}

#[test]
fn test_repeated_token_is_processed_each_time() {
    let index = sample_index();
    let query = QueryNode::from_text("helo helo", Default::default());
    let report = check_default(&index, &query);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0], report.entries[1]);
}
