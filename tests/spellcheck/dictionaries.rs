//! Include/exclude dictionary resolution and registry lifecycle.

use super::common::{check, sample_index, terms_of};
use termcheck::{DictionaryRegistry, QueryNode, SpellCheckConfig, SpellCheckError};

#[test]
fn test_missing_include_aborts_whole_request() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("present", ["helot"]);
    let config = SpellCheckConfig::default()
        .include("present")
        .include("absent");
    // "helo" alone would produce suggestions
    let result = index
        .spell_checker(&dicts, &config)
        .check(&QueryNode::from_text("helo wrld", Default::default()));
    match result {
        Err(SpellCheckError::DictionaryNotFound { name }) => assert_eq!(name, "absent"),
        other => panic!("expected DictionaryNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_exclude_aborts_even_for_known_terms() {
    let index = sample_index();
    let dicts = DictionaryRegistry::new();
    let config = SpellCheckConfig::default().exclude("stopwords");
    let err = index
        .spell_checker(&dicts, &config)
        .check(&QueryNode::token("hello"))
        .unwrap_err();
    assert_eq!(err.to_string(), "dictionary not found: `stopwords`");
}

#[test]
fn test_first_missing_dictionary_is_reported() {
    let index = sample_index();
    let dicts = DictionaryRegistry::new();
    let config = SpellCheckConfig::default().exclude("x").include("a").include("b");
    let err = index
        .spell_checker(&dicts, &config)
        .check(&QueryNode::token("helo"))
        .unwrap_err();
    // Includes are checked before excludes.
    assert_eq!(err.to_string(), "dictionary not found: `a`");
}

#[test]
fn test_invalid_distance_aborts() {
    let index = sample_index();
    let dicts = DictionaryRegistry::new();
    let config = SpellCheckConfig::default().with_distance(0);
    let err = index
        .spell_checker(&dicts, &config)
        .check(&QueryNode::token("helo"))
        .unwrap_err();
    assert!(matches!(err, SpellCheckError::InvalidDistance { distance: 0, .. }));
}

#[test]
fn test_emptied_dictionary_no_longer_resolves() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    assert_eq!(dicts.add("extra", ["helot", "helot"]), 1);
    let config = SpellCheckConfig::default().include("extra");

    let report = check(&index, &dicts, &config, &QueryNode::token("helo"));
    assert!(terms_of(&report.entries[0]).contains(&"helot"));

    assert_eq!(dicts.remove("extra", ["helot", "missing"]), 1);
    assert!(dicts.dump("extra").is_none());
    let err = index
        .spell_checker(&dicts, &config)
        .check(&QueryNode::token("helo"))
        .unwrap_err();
    assert!(matches!(err, SpellCheckError::DictionaryNotFound { .. }));
}

#[test]
fn test_dump_is_sorted() {
    let mut dicts = DictionaryRegistry::new();
    dicts.add("names", ["zoe", "alice", "mika"]);
    assert_eq!(
        dicts.dump("names"),
        Some(vec!["alice".to_string(), "mika".to_string(), "zoe".to_string()])
    );
}

#[test]
fn test_exclude_entries_match_regardless_of_case() {
    let index = sample_index();
    let mut dicts = DictionaryRegistry::new();
    dicts.add("allow", ["Helo"]);
    let config = SpellCheckConfig::default().exclude("allow");
    let report = check(
        &index,
        &dicts,
        &config,
        &QueryNode::from_text("Helo wrld", Default::default()),
    );
    let processed: Vec<&str> = report.entries.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(processed, vec!["wrld"]);
}
