// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-request spell-check settings.
//!
//! Immutable for the duration of one request. Built either in code with the
//! `with_*` helpers or from a JSON file, then adjusted by CLI flags.

use crate::error::{Result, SpellCheckError};
use crate::types::ScoreMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest edit distance a request may ask for.
pub const MAX_DISTANCE: u8 = 4;

/// Edit distance used when none is given.
pub const DEFAULT_DISTANCE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellCheckConfig {
    /// Maximum edit distance for fuzzy candidates
    pub distance: u8,
    /// Report raw document counts plus the corpus size instead of ratios
    pub full_score_info: bool,
    /// Auxiliary dictionaries that contribute extra candidates
    pub include: Vec<String>,
    /// Dictionaries whose terms are never corrected
    pub exclude: Vec<String>,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            full_score_info: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl SpellCheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SpellCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SpellCheckConfig =
            serde_json::from_str(&raw).map_err(SpellCheckError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_distance(mut self, distance: u8) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_full_score_info(mut self, enabled: bool) -> Self {
        self.full_score_info = enabled;
        self
    }

    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.include.push(name.into());
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    pub fn score_mode(&self) -> ScoreMode {
        if self.full_score_info {
            ScoreMode::FullScoreInfo
        } else {
            ScoreMode::Normalized
        }
    }

    /// Include dictionaries first, then exclude, in configured order.
    pub fn dictionaries(&self) -> impl Iterator<Item = &str> + '_ {
        self.include
            .iter()
            .chain(self.exclude.iter())
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<()> {
        if self.distance == 0 || self.distance > MAX_DISTANCE {
            return Err(SpellCheckError::InvalidDistance {
                distance: self.distance,
                max: MAX_DISTANCE,
            });
        }
        Ok(())
    }
}
