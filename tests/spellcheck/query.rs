//! Queries supplied as JSON trees.

use super::common::{check_default, processed_terms, sample_index};
use termcheck::{QueryNode, SpellCheckError};

#[test]
fn test_union_of_phrases_checks_all_four_tokens() {
    let index = sample_index();
    let query = QueryNode::from_json(
        r#"{"type": "union", "children": [
            {"type": "phrase", "children": [
                {"type": "token", "term": "helo"},
                {"type": "token", "term": "wrld"}]},
            {"type": "phrase", "children": [
                {"type": "token", "term": "wrd"},
                {"type": "token", "term": "zzzz"}]}
        ]}"#,
    )
    .unwrap();
    let report = check_default(&index, &query);
    assert_eq!(processed_terms(&report), vec!["helo", "wrd", "wrld", "zzzz"]);
}

#[test]
fn test_non_token_leaves_contribute_nothing() {
    let index = sample_index();
    let query = QueryNode::from_json(
        r#"{"type": "phrase", "children": [
            {"type": "prefix", "prefix": "hel"},
            {"type": "fuzzy", "term": "helo", "distance": 1},
            {"type": "wildcard", "pattern": "he*o"},
            {"type": "numeric", "field": "n", "min": 0, "max": 10},
            {"type": "geo", "field": "loc", "lon": 1.5, "lat": 2.5, "radius": 10},
            {"type": "ids", "ids": ["a", "b"]},
            {"type": "not", "child": {"type": "token", "term": "wrld"}},
            {"type": "optional", "child": {"type": "token", "term": "hello"}},
            {"type": "tag", "field": "tags", "children": [{"type": "token", "term": "wrd"}]}
        ]}"#,
    )
    .unwrap();
    let report = check_default(&index, &query);
    assert_eq!(processed_terms(&report), vec!["wrd", "wrld"]);
}

#[test]
fn test_token_field_mask_from_json() {
    let query = QueryNode::from_json(r#"{"type": "token", "term": "helo", "fieldMask": 2}"#)
        .unwrap();
    assert_eq!(query, QueryNode::token_in("helo", termcheck::FieldMask(2)));
}

#[test]
fn test_unknown_node_type_is_malformed() {
    let err = QueryNode::from_json(r#"{"type": "lexrange", "min": "a"}"#).unwrap_err();
    assert!(matches!(err, SpellCheckError::MalformedQuery(_)));
    assert!(err.to_string().starts_with("malformed query"));
}

#[test]
fn test_json_tokens_match_index_case_insensitively() {
    let index = sample_index();
    let query = QueryNode::from_json(
        r#"{"type": "phrase", "children": [
            {"type": "token", "term": "Hello"},
            {"type": "token", "term": "HELO"}]}"#,
    )
    .unwrap();
    let report = check_default(&index, &query);
    assert_eq!(processed_terms(&report), vec!["helo"]);
}
