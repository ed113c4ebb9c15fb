// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so pairs whose lengths
//! differ by more than the bound never reach the DP. The DP itself is
//! abandoned as soon as a whole row exceeds the bound.
//!
//! Distances count Unicode scalar values, not bytes: "cafe" → "café" is one edit.

/// Edit distance between `query` and `candidate` if it is at most `max`.
///
/// Insertions, deletions, and substitutions each cost one.
pub fn bounded_distance(query: &[char], candidate: &str, max: usize) -> Option<usize> {
    let term: Vec<char> = candidate.chars().collect();
    let m = query.len();
    let n = term.len();

    if m.abs_diff(n) > max {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row: Vec<usize> = vec![0; n + 1];

    for (i, &qc) in query.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &tc) in term.iter().enumerate() {
            let cost = usize::from(qc != tc);
            curr_row[j + 1] = (prev_row[j] + cost)
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
            min_in_row = min_in_row.min(curr_row[j + 1]);
        }

        if min_in_row > max {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[n];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_chars: Vec<char> = a.chars().collect();
    bounded_distance(&a_chars, b, max).is_some()
}
