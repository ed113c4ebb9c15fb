//! Candidate scores under both score modes and field filters.

use super::common::{
    check, check_default, corpus_with_frequency, make_index, make_titled_corpus, sample_index,
    terms_of,
};
use termcheck::{DictionaryRegistry, FieldMask, QueryNode, SearchIndex, SpellCheckConfig};

fn titled_index() -> SearchIndex {
    // "hello" only in titles, "help" only in bodies
    SearchIndex::build(make_titled_corpus(&[
        ("hello", "world"),
        ("intro", "help"),
        ("hello again", "notes"),
    ]))
    .unwrap()
}

const TITLE: FieldMask = FieldMask(0b01);
const BODY: FieldMask = FieldMask(0b10);

#[test]
fn test_eleven_slot_table_scores_three_tenths() {
    let index = corpus_with_frequency("hello", 3, 10);
    assert_eq!(index.doc_table_size(), 11);

    let report = check_default(&index, &QueryNode::token("helo"));
    let entry = &report.entries[0];
    assert_eq!(terms_of(entry), vec!["hello"]);
    assert!((entry.suggestions[0].score - 0.3).abs() < 1e-12);
}

#[test]
fn test_single_document_scores_one() {
    let index = make_index(&["hello"]);
    let report = check_default(&index, &QueryNode::token("helo"));
    assert_eq!(report.entries[0].suggestions[0].score, 1.0);
}

#[test]
fn test_field_mask_excludes_candidates() {
    let index = titled_index();

    let in_title = check_default(&index, &QueryNode::token_in("helo", TITLE));
    assert_eq!(terms_of(&in_title.entries[0]), vec!["hello"]);

    let in_body = check_default(&index, &QueryNode::token_in("helo", BODY));
    assert_eq!(terms_of(&in_body.entries[0]), vec!["help"]);

    let anywhere = check_default(&index, &QueryNode::token("helo"));
    assert_eq!(terms_of(&anywhere.entries[0]), vec!["help", "hello"]);
}

#[test]
fn test_filtered_out_everywhere_leaves_empty_entry() {
    let index = titled_index();
    // "notes" lives only in bodies
    let report = check_default(&index, &QueryNode::token_in("note", TITLE));
    assert_eq!(report.entries.len(), 1);
    assert!(report.entries[0].is_empty());
}

#[test]
fn test_include_candidate_absent_from_index_scores_zero() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("names", ["helga"]);
    let config = SpellCheckConfig::default().include("names").with_distance(2);
    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    let helga = report.entries[0]
        .suggestions
        .iter()
        .find(|s| s.term == "helga")
        .expect("helga suggested");
    assert_eq!(helga.score, 0.0);
}

#[test]
fn test_full_score_info_reports_raw_counts() {
    let index = sample_index();
    let config = SpellCheckConfig::default().with_full_score_info(true);
    let report = check(&index, &DictionaryRegistry::new(), &config, &QueryNode::token("helo"));

    assert_eq!(report.total_docs, Some(4));
    let scores: Vec<(String, f64)> = report.entries[0]
        .suggestions
        .iter()
        .map(|s| (s.term.clone(), s.score))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("helm".to_string(), 1.0),
            ("help".to_string(), 2.0),
            ("hello".to_string(), 3.0)
        ]
    );
}

#[test]
fn test_full_score_info_counts_ignore_field_mask() {
    let index = titled_index();
    let config = SpellCheckConfig::default().with_full_score_info(true);
    let report = check(
        &index,
        &DictionaryRegistry::new(),
        &config,
        &QueryNode::token_in("helo", TITLE),
    );
    // Mask decides eligibility; the count is the term's full document frequency.
    assert_eq!(report.entries[0].suggestions[0].term, "hello");
    assert_eq!(report.entries[0].suggestions[0].score, 2.0);
}
