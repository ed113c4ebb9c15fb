// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The early exits must never change the answer: a bounded result is either
//! the exact distance or `None` when the exact distance exceeds the bound.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termcheck::bounded_distance;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    query: String,
    candidate: String,
    max: u8,
}

fn full_distance(a: &[char], b: &[char]) -> usize {
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

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let query: Vec<char> = input.query.chars().take(32).collect();
    let candidate: String = input.candidate.chars().take(32).collect();
    let max = usize::from(input.max % 8);

    let exact = full_distance(&query, &candidate.chars().collect::<Vec<_>>());
    match bounded_distance(&query, &candidate, max) {
        Some(d) => {
            assert_eq!(d, exact, "bounded distance disagrees with full DP");
            assert!(d <= max, "distance {} over bound {}", d, max);
        }
        None => assert!(exact > max, "missed match at distance {} (bound {})", exact, max),
    }
});
