// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how fuzzy candidates get their numbers.
//!
//! A candidate's score is its document frequency, either as a fraction of the
//! corpus or raw. The field mask decides whether the candidate is allowed at
//! all: a term that only ever appears outside the queried fields is useless
//! as a correction, however common it is.

mod relevance;

pub use relevance::*;
