// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by corpus indexing, word lists, and query building.

pub mod normalize;

pub use normalize::*;
