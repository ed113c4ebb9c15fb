//! Bounded edit distance against a reference implementation.

use proptest::prelude::*;
use termcheck::bounded_distance;

/// Plain Wagner–Fischer with no early exits.
fn reference_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        prev = curr;
    }
    prev[b.len()]
}

fn short_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé]{0,8}").unwrap()
}

proptest! {
    /// Property: the bounded result agrees with the unbounded distance.
    #[test]
    fn prop_bounded_matches_reference(a in short_string(), b in short_string(), max in 0usize..5) {
        let query: Vec<char> = a.chars().collect();
        let exact = reference_distance(&a, &b);
        let bounded = bounded_distance(&query, &b, max);
        if exact <= max {
            prop_assert_eq!(bounded, Some(exact));
        } else {
            prop_assert_eq!(bounded, None);
        }
    }

    /// Property: distance is symmetric.
    #[test]
    fn prop_symmetric(a in short_string(), b in short_string()) {
        let ab = bounded_distance(&a.chars().collect::<Vec<_>>(), &b, 16);
        let ba = bounded_distance(&b.chars().collect::<Vec<_>>(), &a, 16);
        prop_assert_eq!(ab, ba);
    }

    /// Property: a string is at distance 0 from itself only.
    #[test]
    fn prop_identity(a in short_string(), b in short_string()) {
        let zero = bounded_distance(&a.chars().collect::<Vec<_>>(), &b, 0);
        prop_assert_eq!(zero.is_some(), a == b);
    }
}
