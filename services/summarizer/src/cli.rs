//! services/summarizer/src/cli.rs
//!
//! Command-line surface for the summarizer: the summary CRUD operations, the
//! summarize pipeline and a raw news search.

use clap::{Parser, Subcommand};
use news_summarizer_core::{SummaryDraft, SummaryParser};
use std::collections::BTreeMap;
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize news with an LLM and manage stored summaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored summaries, optionally filtered by title or description.
    List {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show a single summary.
    Get { id: Uuid },
    /// Store a summary read from a file.
    Create {
        #[command(flatten)]
        input: DraftInput,
    },
    /// Overwrite an existing summary with the contents of a file.
    Update {
        id: Uuid,
        #[command(flatten)]
        input: DraftInput,
    },
    /// Delete a summary; unknown ids are ignored.
    Delete { id: Uuid },
    /// Delete every stored summary.
    DeleteAll,
    /// Fetch recent articles about a topic and summarize them.
    Summarize {
        topic: String,
        /// Store the summary after printing it.
        #[arg(long)]
        save: bool,
    },
    /// Search articles with raw query parameters, e.g. `--param q=rust --param pageSize=5`.
    News {
        #[arg(long = "param", short = 'p', value_parser = parse_key_value, required = true)]
        params: Vec<(String, String)>,
    },
}

/// Where a summary draft is read from.
#[derive(clap::Args, Debug)]
pub struct DraftInput {
    /// A front-matter document, or a JSON draft when `--json` is given.
    #[arg(long, short)]
    pub file: PathBuf,
    #[arg(long)]
    pub json: bool,
}

impl DraftInput {
    pub fn read(&self) -> Result<SummaryDraft, AppError> {
        let text = std::fs::read_to_string(&self.file)?;
        parse_draft(&text, self.json)
    }
}

/// Decodes a draft either as JSON or as a front-matter document.
pub fn parse_draft(text: &str, json: bool) -> Result<SummaryDraft, AppError> {
    if json {
        return Ok(serde_json::from_str(text)?);
    }
    let summary = SummaryParser::new()
        .parse(text)
        .map_err(news_summarizer_core::ServiceError::from)?;
    Ok(summary.to_draft())
}

/// Parses a `key=value` pair; the value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collects repeated `--param` pairs; a later key overrides an earlier one.
pub fn params_to_map(params: &[(String, String)]) -> BTreeMap<String, String> {
    params.iter().cloned().collect()
}
