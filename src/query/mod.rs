// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query trees and the terms worth spell-checking in them.
//!
//! The parser that produces these trees lives elsewhere; this module only
//! reads them. `extract_terms` walks containers and collects `Token` leaves.

mod ast;
mod extract;

pub use ast::*;
pub use extract::*;
