//! Term extraction over random query trees.

use proptest::prelude::*;
use termcheck::{extract_terms, QueryNode};

fn leaf_strategy() -> impl Strategy<Value = QueryNode> {
    prop_oneof![
        4 => "[a-z]{1,5}".prop_map(QueryNode::token),
        1 => "[a-z]{1,3}".prop_map(|prefix| QueryNode::Prefix { prefix }),
        1 => "[a-z]{1,3}".prop_map(|term| QueryNode::Fuzzy { term, distance: 1 }),
        1 => Just(QueryNode::Numeric { field: "n".into(), min: 0.0, max: 1.0 }),
    ]
}

fn tree_strategy() -> impl Strategy<Value = QueryNode> {
    leaf_strategy().prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(QueryNode::phrase),
            prop::collection::vec(inner.clone(), 0..4).prop_map(QueryNode::union),
            inner.clone().prop_map(QueryNode::not),
            inner.clone().prop_map(QueryNode::optional),
            prop::collection::vec(inner, 0..3).prop_map(|children| QueryNode::Tag {
                field: "tags".into(),
                children,
            }),
        ]
    })
}

/// Recursive reference walk.
fn tokens_recursive<'a>(node: &'a QueryNode, out: &mut Vec<&'a str>) {
    if let QueryNode::Token { term, .. } = node {
        out.push(term);
    }
    for child in node.children() {
        tokens_recursive(child, out);
    }
}

proptest! {
    /// Property: the stack walk finds exactly the tokens a recursive walk finds.
    #[test]
    fn prop_extraction_is_complete(tree in tree_strategy()) {
        let mut expected = Vec::new();
        tokens_recursive(&tree, &mut expected);
        let mut got: Vec<&str> = extract_terms(&tree).into_iter().map(|t| t.term).collect();
        expected.sort_unstable();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    /// Property: extraction visits no more tokens than the tree has nodes.
    #[test]
    fn prop_extraction_bounded_by_nodes(tree in tree_strategy()) {
        prop_assert!(extract_terms(&tree).len() <= tree.node_count());
    }
}
