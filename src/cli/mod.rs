// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the termcheck command-line interface.
//!
//! Three subcommands: `check` to spell-check a query against a corpus,
//! `inspect` to summarize the index a corpus builds, and `dict` to show how a
//! word list is normalized before it becomes a dictionary.

pub mod display;

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "termcheck",
    about = "Fuzzy spelling suggestions for search queries",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `TERMCHECK_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest corrections for the misspelled terms of a query
    #[command(group(ArgGroup::new("input").required(true).args(["query", "query_file"])))]
    Check {
        /// Corpus JSON: {"fields": [...], "docs": [{"key": ..., "fields": {...}}]}
        #[arg(short, long)]
        corpus: PathBuf,

        /// Query text; each word becomes a token
        #[arg(short, long)]
        query: Option<String>,

        /// Query AST as JSON
        #[arg(long)]
        query_file: Option<PathBuf>,

        /// Restrict `--query` tokens to these fields (comma separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Maximum edit distance (1-4)
        #[arg(short, long)]
        distance: Option<u8>,

        /// Dictionary whose terms are offered as extra corrections
        #[arg(long)]
        include: Vec<String>,

        /// Dictionary whose terms are never corrected
        #[arg(long)]
        exclude: Vec<String>,

        /// Load a word list as a named dictionary
        #[arg(long, value_name = "NAME=PATH", value_parser = parse_dict_spec)]
        dict: Vec<(String, PathBuf)>,

        /// Report raw document counts and the corpus size
        #[arg(long)]
        full_score_info: bool,

        /// JSON file with default settings; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the reply as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize the index built from a corpus
    Inspect {
        /// Corpus JSON file
        #[arg(short, long)]
        corpus: PathBuf,
    },

    /// Print a word list the way it is stored as a dictionary
    Dict {
        /// Word list, one term per line; `#` starts a comment line
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Parse `NAME=PATH`.
pub fn parse_dict_spec(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got `{}`", raw)),
    }
}
