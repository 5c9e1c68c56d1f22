//! crates/news_summarizer_core/src/memory.rs
//!
//! An in-process `SummaryRepository` for tests and for wiring the services
//! without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{SaveOperation, Summary};
use crate::ports::{PortError, PortResult, SummaryRepository};

/// Keeps summaries in insertion order behind an async lock.
#[derive(Default)]
pub struct InMemorySummaryRepository {
    rows: RwLock<Vec<Summary>>,
}

impl InMemorySummaryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn find_all(&self) -> PortResult<Vec<Summary>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_matching(&self, text: &str) -> PortResult<Vec<Summary>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|s| s.matches(text)).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> PortResult<Option<Summary>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|s| s.id == Some(id)).cloned())
    }

    async fn execute(&self, operation: SaveOperation) -> PortResult<Summary> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        match operation {
            SaveOperation::Create(draft) => {
                let mut summary = Summary::from(draft);
                summary.id = Some(Uuid::new_v4());
                summary.created_at = Some(now);
                summary.updated_at = Some(now);
                rows.push(summary.clone());
                Ok(summary)
            }
            SaveOperation::Replace(id, draft) => {
                let row = rows
                    .iter_mut()
                    .find(|s| s.id == Some(id))
                    .ok_or_else(|| PortError::NotFound(format!("Summary {} not found", id)))?;
                row.apply(draft);
                row.updated_at = Some(now);
                Ok(row.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> PortResult<()> {
        self.rows.write().await.retain(|s| s.id != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> PortResult<()> {
        self.rows.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Source, SummaryDraft};

    fn draft(title: &str) -> Summary {
        Summary::from(SummaryDraft {
            title: Some(title.to_string()),
            highlights: vec!["b".into(), "a".into(), "b".into()],
            sources: vec![Source::new("Outlet", "https://example.com")],
            content: "body".into(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn insert_then_update_preserves_created_at() {
        let repo = InMemorySummaryRepository::new();

        let inserted = repo.save(&draft("first")).await.unwrap();
        let id = inserted.id.expect("insert assigns an id");
        let created_at = inserted.created_at.expect("insert sets created_at");
        assert_eq!(inserted.updated_at, Some(created_at));

        let mut changed = inserted.clone();
        changed.title = Some("second".into());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.created_at, Some(created_at));
        assert!(updated.updated_at.unwrap() > created_at);
        assert_eq!(updated.title.as_deref(), Some("second"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lists_keep_order_and_duplicates() {
        let repo = InMemorySummaryRepository::new();
        let saved = repo.save(&draft("t")).await.unwrap();
        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.highlights, vec!["b", "a", "b"]);
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_not_found() {
        let repo = InMemorySummaryRepository::new();
        let err = repo
            .execute(SaveOperation::Replace(Uuid::new_v4(), SummaryDraft::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_no_op() {
        let repo = InMemorySummaryRepository::new();
        repo.save(&draft("keep")).await.unwrap();
        repo.delete_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
