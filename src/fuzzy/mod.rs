// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! Dictionaries call into this for every candidate term, so the bound is
//! enforced as early as possible instead of computing full distances.

mod levenshtein;

pub use levenshtein::*;
