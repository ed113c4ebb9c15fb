// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a spell-check request.
//!
//! Field masks, postings, and the scored suggestions that end up in a report.
//! Most of these are plain data; the interesting rules live in `scoring` and
//! `suggest`. The one type worth reading twice is `TermScore`: a candidate can
//! be scored, absent from the index, or excluded by the field filter, and the
//! last two must never be confused.
//!
//! # Invariants
//!
//! - **FieldMask**: bit `i` set ⇔ field `i` of the schema participates.
//!   `FieldMask::ALL` matches every field, including ones added later.
//!
//! - **PostingList**: postings sorted by `doc_id` ascending, one posting per
//!   document, `doc_freq = postings.len()`.
//!
//! - **Suggestion**: immutable once created; the term is owned, never shared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

// =============================================================================
// FIELD MASK
// =============================================================================

/// Bitmask identifying which indexed fields a term match must belong to.
///
/// Passed through unchanged from the query token to the posting filter.
/// Bit positions come from `Schema`, which caps the width at 64 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct FieldMask(pub u64);

impl FieldMask {
    /// Matches every field.
    pub const ALL: FieldMask = FieldMask(u64::MAX);

    /// Matches nothing.
    pub const NONE: FieldMask = FieldMask(0);

    /// Mask with only field `bit` set.
    #[inline]
    pub fn field(bit: u32) -> Self {
        debug_assert!(bit < 64, "field bit {} out of range", bit);
        FieldMask(1u64 << bit)
    }

    /// Do these masks share at least one field?
    #[inline]
    pub fn intersects(self, other: FieldMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for FieldMask {
    fn default() -> Self {
        FieldMask::ALL
    }
}

impl BitOr for FieldMask {
    type Output = FieldMask;

    fn bitor(self, rhs: FieldMask) -> FieldMask {
        FieldMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for FieldMask {
    fn bitor_assign(&mut self, rhs: FieldMask) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FieldMask {
    type Output = FieldMask;

    fn bitand(self, rhs: FieldMask) -> FieldMask {
        FieldMask(self.0 & rhs.0)
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == FieldMask::ALL {
            write!(f, "*")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

// =============================================================================
// POSTINGS
// =============================================================================

/// One document containing a term.
///
/// `field_mask` is the union of every field the term occurs in within this
/// document, so a single intersection test answers "does this document match
/// under the query's field filter?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Document id (1-based; 0 is the reserved sentinel slot)
    pub doc_id: u32,
    /// Fields of this document the term occurs in
    pub field_mask: FieldMask,
    /// Occurrences of the term across those fields
    pub freq: u32,
}

/// All documents containing a single term.
///
/// Sorted by `doc_id`. `doc_freq` is cached because scoring reads it for
/// every fuzzy candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of unique documents containing this term
    pub doc_freq: usize,
}

impl PostingList {
    /// Iterate postings that survive the field filter, in doc order.
    pub fn filtered(&self, mask: FieldMask) -> impl Iterator<Item = &Posting> + '_ {
        self.postings
            .iter()
            .filter(move |p| p.field_mask.intersects(mask))
    }

    /// First posting surviving the filter, if any.
    #[inline]
    pub fn first_matching(&self, mask: FieldMask) -> Option<&Posting> {
        self.filtered(mask).next()
    }
}

// =============================================================================
// SCORING VALUES
// =============================================================================

/// How candidate scores are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreMode {
    /// `doc_freq / (doc_table_size - 1)`, a number in `[0, 1]`
    #[default]
    Normalized,
    /// Raw `doc_freq`, so shard-level counts can be summed by the caller
    FullScoreInfo,
}

/// Outcome of scoring one fuzzy candidate.
///
/// Replaces the old "score == -1 means excluded" convention. `Absent` and
/// `Excluded` look similar but behave oppositely: an absent term is still a
/// (worthless) suggestion, an excluded one must be dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TermScore {
    /// At least one posting survived the field filter
    Scored(f64),
    /// The term has no posting list at all; suggested with score 0
    Absent,
    /// Postings exist but the field mask filtered every one of them
    Excluded,
}

impl TermScore {
    /// The score to attach to a suggestion, or `None` when it must be dropped.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            TermScore::Scored(score) => Some(score),
            TermScore::Absent => Some(0.0),
            TermScore::Excluded => None,
        }
    }

    #[inline]
    pub fn is_excluded(self) -> bool {
        matches!(self, TermScore::Excluded)
    }
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// A scored correction for one query term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub score: f64,
}

impl Suggestion {
    pub fn new(term: String, score: f64) -> Self {
        Self { term, score }
    }
}
