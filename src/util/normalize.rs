// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Index terms, dictionary entries, and query tokens all go through `normalize`
//! so that "Café" in a document and "cafe" in a query meet in the middle. If one
//! path skips it, exact-membership checks quietly start failing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a term: lowercase and strip diacritics.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
///
/// Without the `unicode-normalization` feature this only lowercases.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the blocks we care about.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized words.
///
/// Words are maximal alphanumeric runs; everything else separates them.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(normalize)
        .filter(|word| !word.is_empty())
}
