// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use termcheck::{
    DictionaryRegistry, FieldMask, QueryNode, SearchIndex, SpellCheckConfig, Vocabulary,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

/// Env var holding a tracing filter directive, e.g. `termcheck=trace`.
const LOG_ENV: &str = "TERMCHECK_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "termcheck=debug",
        _ => "termcheck=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check {
            corpus,
            query,
            query_file,
            fields,
            distance,
            include,
            exclude,
            dict,
            full_score_info,
            config,
            json,
        } => {
            let mut settings = match config {
                Some(path) => SpellCheckConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => SpellCheckConfig::default(),
            };
            if let Some(distance) = distance {
                settings.distance = distance;
            }
            settings.full_score_info |= full_score_info;
            settings.include.extend(include);
            settings.exclude.extend(exclude);

            let index = SearchIndex::from_file(&corpus)
                .with_context(|| format!("building index from {}", corpus.display()))?;
            let registry = load_dictionaries(&dict)?;
            let query = load_query(&index, query, query_file, &fields)?;

            let report = index
                .spell_checker(&registry, &settings)
                .check(&query)
                .context("spellcheck failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.to_reply())?);
            } else {
                display::print_report(&report, settings.score_mode());
            }
            Ok(())
        }
        Commands::Inspect { corpus } => {
            let index = SearchIndex::from_file(&corpus)
                .with_context(|| format!("building index from {}", corpus.display()))?;
            display::print_index_summary(&index);
            Ok(())
        }
        Commands::Dict { file } => {
            let text = read(&file)?;
            for term in Vocabulary::from_word_list(&text).iter() {
                println!("{}", term);
            }
            Ok(())
        }
    }
}

fn load_dictionaries(specs: &[(String, PathBuf)]) -> Result<DictionaryRegistry> {
    let mut registry = DictionaryRegistry::new();
    for (name, path) in specs {
        let added = registry
            .load_word_list(name, path)
            .with_context(|| format!("loading dictionary `{}`", name))?;
        debug!(dictionary = name.as_str(), added, "dictionary loaded");
    }
    Ok(registry)
}

fn load_query(
    index: &SearchIndex,
    text: Option<String>,
    file: Option<PathBuf>,
    fields: &[String],
) -> Result<QueryNode> {
    if let Some(path) = file {
        let raw = read(&path)?;
        return QueryNode::from_json(&raw)
            .with_context(|| format!("parsing query {}", path.display()));
    }
    let mask: FieldMask = index.schema().mask_for(fields.iter().map(String::as_str))?;
    let text = text.unwrap_or_default();
    debug!(query = text.as_str(), %mask, "parsed query text");
    Ok(QueryNode::from_text(&text, mask))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
