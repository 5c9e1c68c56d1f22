//! crates/news_summarizer_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the database, the news HTTP API and the LLM provider.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewsResponse, SaveOperation, Summary};
use crate::query::QueryParams;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Could not decode stored or received data: {0}")]
    Decode(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Every stored summary, oldest first.
    async fn find_all(&self) -> PortResult<Vec<Summary>>;

    /// Summaries whose title or description contains `text`, ignoring case.
    async fn find_matching(&self, text: &str) -> PortResult<Vec<Summary>>;

    async fn find_by_id(&self, id: Uuid) -> PortResult<Option<Summary>>;

    /// Performs a single insert or update and returns the resulting row.
    ///
    /// `Replace` on an id with no row fails with `PortError::NotFound`.
    async fn execute(&self, operation: SaveOperation) -> PortResult<Summary>;

    /// Inserts when the summary has no id, updates otherwise.
    async fn save(&self, summary: &Summary) -> PortResult<Summary> {
        self.execute(SaveOperation::for_summary(summary)).await
    }

    /// Removes the row if present; an unknown id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> PortResult<()>;

    async fn delete_all(&self) -> PortResult<()>;
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Full-text search over all indexed articles.
    async fn everything(&self, params: &QueryParams) -> PortResult<NewsResponse>;
}

#[async_trait]
pub trait TextCompletionService: Send + Sync {
    /// Sends the prompt and returns the model's raw text reply.
    async fn complete(&self, prompt: &str) -> PortResult<String>;
}
