// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field names and their bit positions in a `FieldMask`.

use crate::error::{Result, SpellCheckError};
use crate::types::FieldMask;
use serde::{Deserialize, Serialize};

/// Widest schema a 64-bit mask can describe.
pub const MAX_FIELDS: usize = 64;

/// Ordered list of text fields. Field `i` owns bit `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !names.contains(&field) {
                names.push(field);
            }
        }
        if names.len() > MAX_FIELDS {
            return Err(SpellCheckError::TooManyFields { count: names.len() });
        }
        Ok(Self { fields: names })
    }

    pub fn field_bit(&self, name: &str) -> Option<u32> {
        self.fields
            .iter()
            .position(|f| f == name)
            .map(|pos| pos as u32)
    }

    /// Mask covering the named fields. An empty list means every field.
    pub fn mask_for<'a, I>(&self, names: I) -> Result<FieldMask>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mask = FieldMask::NONE;
        let mut any = false;
        for name in names {
            any = true;
            let bit = self
                .field_bit(name)
                .ok_or_else(|| SpellCheckError::UnknownField {
                    name: name.to_string(),
                })?;
            mask |= FieldMask::field(bit);
        }
        Ok(if any { mask } else { FieldMask::ALL })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
