//! Report shape and its reply rendering.

use super::common::{check, check_default, sample_index};
use serde_json::json;
use termcheck::{DictionaryRegistry, QueryNode, SpellCheckConfig, NO_SUGGESTIONS};

#[test]
fn test_length_counts_processed_terms() {
    let index = sample_index();
    let query = QueryNode::from_text("hello helo zzzzzz wrld", Default::default());
    let report = check_default(&index, &query);
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.len(), 3);
    assert_eq!(report.to_reply().as_array().map(Vec::len), Some(3));
}

#[test]
fn test_full_score_info_adds_leading_element() {
    let index = sample_index();
    let config = SpellCheckConfig::default().with_full_score_info(true);
    let query = QueryNode::from_text("helo zzzzzz", Default::default());
    let report = check(&index, &DictionaryRegistry::new(), &config, &query);
    assert_eq!(report.len(), 3);

    let reply = report.to_reply();
    assert_eq!(reply[0], json!(4));
    assert_eq!(reply.as_array().map(Vec::len), Some(3));
}

#[test]
fn test_reply_entries() {
    let index = sample_index();
    let query = QueryNode::token("wrd");
    let reply = check_default(&index, &query).to_reply();
    assert_eq!(reply, json!([["TERM", "wrd", [[0.25, "word"]]]]));
}

#[test]
fn test_empty_entry_renders_message() {
    let index = sample_index();
    let reply = check_default(&index, &QueryNode::token("zzzzzz")).to_reply();
    assert_eq!(reply, json!([["TERM", "zzzzzz", NO_SUGGESTIONS]]));
}

#[test]
fn test_report_serializes_without_total_by_default() {
    let index = sample_index();
    let report = check_default(&index, &QueryNode::token("wrd"));
    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("totalDocs").is_none());
    assert_eq!(value["entries"][0]["term"], json!("wrd"));
}
