//! services/summarizer/src/error.rs
//!
//! Defines the primary error type for the summarizer service.

use crate::config::ConfigError;
use news_summarizer_core::{PortError, ServiceError};

/// The primary error type for the `summarizer` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the core services.
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a standard Input/Output error (e.g., reading an input file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Represents a failure to render or read JSON on the command line.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
