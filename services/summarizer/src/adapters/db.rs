//! services/summarizer/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `SummaryRepository` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.
//!
//! `highlights` and `sources` live in JSONB columns and are encoded and decoded
//! through `sqlx::types::Json`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use news_summarizer_core::domain::{SaveOperation, Source, Summary, SummaryDraft};
use news_summarizer_core::ports::{PortError, PortResult, SummaryRepository};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

//=========================================================================================
// SQL
//=========================================================================================

const SELECT_ALL_SQL: &str = "SELECT id, title, description, reading_time, highlights, sources, content, created_at, updated_at \
     FROM summaries ORDER BY created_at ASC";

const SELECT_MATCHING_SQL: &str = "SELECT id, title, description, reading_time, highlights, sources, content, created_at, updated_at \
     FROM summaries \
     WHERE title ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%' \
     ORDER BY created_at ASC";

const SELECT_BY_ID_SQL: &str = "SELECT id, title, description, reading_time, highlights, sources, content, created_at, updated_at \
     FROM summaries WHERE id = $1";

const INSERT_SQL: &str = "INSERT INTO summaries (id, title, description, reading_time, highlights, sources, content) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) \
     RETURNING id, title, description, reading_time, highlights, sources, content, created_at, updated_at";

const UPDATE_SQL: &str = "UPDATE summaries SET \
     title = $2, description = $3, reading_time = $4, highlights = $5, sources = $6, content = $7, \
     updated_at = NOW() \
     WHERE id = $1 \
     RETURNING id, title, description, reading_time, highlights, sources, content, created_at, updated_at";

const DELETE_SQL: &str = "DELETE FROM summaries WHERE id = $1";

const DELETE_ALL_SQL: &str = "DELETE FROM summaries";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `SummaryRepository` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct SummaryRecord {
    id: Uuid,
    title: Option<String>,
    description: Option<String>,
    reading_time: Option<String>,
    highlights: Json<Vec<String>>,
    sources: Json<Vec<Source>>,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SummaryRecord {
    fn to_domain(self) -> Summary {
        Summary {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            reading_time: self.reading_time,
            highlights: self.highlights.0,
            sources: self.sources.0,
            content: self.content,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

/// Maps a driver error, keeping JSONB decode failures distinguishable.
fn db_error(e: sqlx::Error) -> PortError {
    match e {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => PortError::Decode(e.to_string()),
        _ => PortError::Unexpected(e.to_string()),
    }
}

/// Escapes `LIKE` wildcards so the search text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl DbAdapter {
    async fn insert(&self, draft: &SummaryDraft) -> PortResult<Summary> {
        let record = sqlx::query_as::<_, SummaryRecord>(INSERT_SQL)
            .bind(Uuid::new_v4())
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.reading_time)
            .bind(Json(&draft.highlights))
            .bind(Json(&draft.sources))
            .bind(&draft.content)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(record.to_domain())
    }

    async fn update(&self, id: Uuid, draft: &SummaryDraft) -> PortResult<Summary> {
        let record = sqlx::query_as::<_, SummaryRecord>(UPDATE_SQL)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.reading_time)
            .bind(Json(&draft.highlights))
            .bind(Json(&draft.sources))
            .bind(&draft.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(|| PortError::NotFound(format!("Summary {} not found", id)))?;
        Ok(record.to_domain())
    }
}

//=========================================================================================
// `SummaryRepository` Trait Implementation
//=========================================================================================

#[async_trait]
impl SummaryRepository for DbAdapter {
    async fn find_all(&self) -> PortResult<Vec<Summary>> {
        let records = sqlx::query_as::<_, SummaryRecord>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        let summaries = records.into_iter().map(|r| r.to_domain()).collect();
        Ok(summaries)
    }

    async fn find_matching(&self, text: &str) -> PortResult<Vec<Summary>> {
        let records = sqlx::query_as::<_, SummaryRecord>(SELECT_MATCHING_SQL)
            .bind(escape_like(text))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        let summaries = records.into_iter().map(|r| r.to_domain()).collect();
        Ok(summaries)
    }

    async fn find_by_id(&self, id: Uuid) -> PortResult<Option<Summary>> {
        let record = sqlx::query_as::<_, SummaryRecord>(SELECT_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(record.map(SummaryRecord::to_domain))
    }

    async fn execute(&self, operation: SaveOperation) -> PortResult<Summary> {
        match operation {
            SaveOperation::Create(draft) => {
                debug!("Inserting summary");
                self.insert(&draft).await
            }
            SaveOperation::Replace(id, draft) => {
                debug!(%id, "Updating summary");
                self.update(id, &draft).await
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> PortResult<()> {
        sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn delete_all(&self) -> PortResult<()> {
        sqlx::query(DELETE_ALL_SQL)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}
