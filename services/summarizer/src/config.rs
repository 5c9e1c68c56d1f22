//! services/summarizer/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use news_summarizer_core::SummarizerSettings;
use std::str::FromStr;
use tracing::Level;

const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

const DEFAULT_INSTRUCTIONS: &str = r#"You are a news editor. Summarize the articles you are given into a single briefing.

Reply with a document of exactly this shape and nothing else:

---
title: <short headline for the briefing>
description: <one sentence describing what the briefing covers>
readingTime: <estimated reading time, e.g. "3 min">
highlights:
  - <key point>
  - <key point>
sources:
  - name: <outlet name>
    url: <article url>
---
<the briefing itself, a few paragraphs of plain prose>

Quote any YAML value that contains a colon. List every article you drew on under sources."#;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_level: Level,
    pub news_api_base_url: String,
    pub news_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_base: Option<String>,
    pub summary_model: String,
    pub instructions: String,
    pub summarizer: SummarizerSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Database ---
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;
        let db_max_connections = parsed_var("DB_MAX_CONNECTIONS", 5)?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- News source ---
        let news_api_base_url = std::env::var("NEWS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_NEWS_API_BASE_URL.to_string());
        let news_api_key = std::env::var("NEWS_API_KEY").ok();

        // --- Completion provider ---
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let openai_api_base = std::env::var("OPENAI_API_BASE").ok();
        let summary_model =
            std::env::var("SUMMARY_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let instructions = std::env::var("SUMMARIZER_INSTRUCTIONS")
            .unwrap_or_else(|_| DEFAULT_INSTRUCTIONS.to_string());

        // --- Default search ---
        let defaults = SummarizerSettings::default();
        let summarizer = SummarizerSettings {
            page_size: parsed_var("SUMMARIZER_PAGE_SIZE", defaults.page_size)?,
            lookback_days: parsed_var("SUMMARIZER_LOOKBACK_DAYS", defaults.lookback_days)?,
        };

        Ok(Self {
            database_url,
            db_max_connections,
            log_level,
            news_api_base_url,
            news_api_key,
            openai_api_key,
            openai_api_base,
            summary_model,
            instructions,
            summarizer,
        })
    }
}

fn parsed_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
