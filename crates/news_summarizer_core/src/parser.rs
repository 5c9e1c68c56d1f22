//! crates/news_summarizer_core/src/parser.rs
//!
//! Turns the text returned by the completion provider into a [`Summary`].
//!
//! The expected shape is a `---` delimited YAML front matter block followed by
//! a free-form body. Parsing happens in two steps, boundary extraction and
//! then YAML decoding, so a failure always says which of the two went wrong.

use crate::domain::{Source, Summary};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;
use tracing::debug;

fn front_matter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n(.*))?\z")
            .expect("front matter pattern is valid")
    })
}

/// Every way the model output can fail to become a summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse summary: no YAML front matter found")]
    MissingFrontMatter,
    #[error("could not parse summary: invalid YAML front matter: {0}")]
    FrontMatterDecode(String),
    #[error("could not parse summary: malformed `{field}`: {reason}")]
    MalformedField { field: &'static str, reason: String },
}

fn malformed(field: &'static str, reason: impl Into<String>) -> ParseError {
    ParseError::MalformedField {
        field,
        reason: reason.into(),
    }
}

/// Stateless parser for front-matter summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryParser;

impl SummaryParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses model output into a summary without id or timestamps.
    ///
    /// Absent `highlights` and `sources` become empty lists; absent scalar
    /// fields become `None`. The body is trimmed.
    pub fn parse(&self, text: &str) -> Result<Summary, ParseError> {
        let (yaml, body) = split_front_matter(text)?;
        let front_matter = decode_front_matter(yaml)?;

        let summary = Summary {
            title: scalar(&front_matter, "title")?,
            description: scalar(&front_matter, "description")?,
            reading_time: scalar(&front_matter, "readingTime")?,
            highlights: highlights(&front_matter)?,
            sources: sources(&front_matter)?,
            content: body.trim().to_string(),
            ..Default::default()
        };
        debug!(
            highlights = summary.highlights.len(),
            sources = summary.sources.len(),
            "Parsed summary front matter"
        );
        Ok(summary)
    }
}

/// Splits the text into its front matter block and body.
pub fn split_front_matter(text: &str) -> Result<(&str, &str), ParseError> {
    let captures = front_matter_pattern()
        .captures(text.trim_start())
        .ok_or(ParseError::MissingFrontMatter)?;
    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());
    Ok((yaml, body))
}

fn decode_front_matter(yaml: &str) -> Result<Mapping, ParseError> {
    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| ParseError::FrontMatterDecode(e.to_string()))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(ParseError::FrontMatterDecode(format!(
            "expected key/value pairs, found {}",
            kind(&other)
        ))),
    }
}

fn scalar(front_matter: &Mapping, field: &'static str) -> Result<Option<String>, ParseError> {
    match front_matter.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_text(value)
            .map(Some)
            .ok_or_else(|| malformed(field, format!("expected text, found {}", kind(value)))),
    }
}

fn highlights(front_matter: &Mapping) -> Result<Vec<String>, ParseError> {
    const FIELD: &str = "highlights";
    match front_matter.get(FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                scalar_text(item).ok_or_else(|| {
                    malformed(FIELD, format!("entry {} is {}, expected text", i, kind(item)))
                })
            })
            .collect(),
        Some(other) => Err(malformed(FIELD, format!("expected a list, found {}", kind(other)))),
    }
}

fn sources(front_matter: &Mapping) -> Result<Vec<Source>, ParseError> {
    const FIELD: &str = "sources";
    match front_matter.get(FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                serde_yaml::from_value::<Source>(item.clone())
                    .map_err(|e| malformed(FIELD, format!("entry {}: {}", i, e)))
            })
            .collect(),
        Some(other) => Err(malformed(FIELD, format!("expected a list, found {}", kind(other)))),
    }
}

// Numbers and booleans are accepted as text; models write `readingTime: 3` as often as "3 min".
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
