//! crates/news_summarizer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or HTTP client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Summaries
//=========================================================================================

/// An attribution entry listed in a summary's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A structured news summary.
///
/// Summaries produced by the parser carry no `id` and no timestamps; those are
/// assigned by the repository on first save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reading_time: Option<String>,
    pub highlights: Vec<String>,
    pub sources: Vec<Source>,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Summary {
    /// Strips the persistence-assigned fields, leaving only what a save writes.
    pub fn to_draft(&self) -> SummaryDraft {
        SummaryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            reading_time: self.reading_time.clone(),
            highlights: self.highlights.clone(),
            sources: self.sources.clone(),
            content: self.content.clone(),
        }
    }

    /// Overwrites every mutable field with the draft's values.
    pub fn apply(&mut self, draft: SummaryDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.reading_time = draft.reading_time;
        self.highlights = draft.highlights;
        self.sources = draft.sources;
        self.content = draft.content;
    }

    /// Case-insensitive substring match against title or description.
    pub fn matches(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        [&self.title, &self.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The mutable part of a summary, used for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reading_time: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub content: String,
}

impl From<SummaryDraft> for Summary {
    fn from(draft: SummaryDraft) -> Self {
        let mut summary = Summary::default();
        summary.apply(draft);
        summary
    }
}

/// The write a repository must perform for a save.
///
/// The branch is decided once, from the presence of an id, instead of through
/// nullability checks inside each store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOperation {
    /// Insert a new row; the store assigns the id and both timestamps.
    Create(SummaryDraft),
    /// Overwrite an existing row; the store refreshes `updated_at` only.
    Replace(Uuid, SummaryDraft),
}

impl SaveOperation {
    pub fn for_summary(summary: &Summary) -> Self {
        match summary.id {
            Some(id) => SaveOperation::Replace(id, summary.to_draft()),
            None => SaveOperation::Create(summary.to_draft()),
        }
    }
}

//=========================================================================================
// News articles
//=========================================================================================

/// The outlet an article was published by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// A single article returned by the news source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub content: Option<String>,
    pub published_at: Option<String>,
}

/// The envelope returned by a full-text article search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: Option<&str>, description: Option<&str>) -> Summary {
        Summary {
            title: title.map(String::from),
            description: description.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn matches_title_or_description_ignoring_case() {
        assert!(summary(Some("Weekly AI Roundup"), None).matches("ai"));
        assert!(summary(None, Some("Chips and tRAINing runs")).matches("AI"));
        assert!(!summary(Some("Sports"), Some("Football")).matches("ai"));
        assert!(!summary(None, None).matches("ai"));
    }

    #[test]
    fn save_operation_branches_on_id() {
        let mut s = summary(Some("t"), None);
        assert!(matches!(SaveOperation::for_summary(&s), SaveOperation::Create(_)));

        let id = Uuid::new_v4();
        s.id = Some(id);
        match SaveOperation::for_summary(&s) {
            SaveOperation::Replace(got, draft) => {
                assert_eq!(got, id);
                assert_eq!(draft.title.as_deref(), Some("t"));
            }
            other => panic!("expected Replace, got {:?}", other),
        }
    }

    #[test]
    fn summary_serializes_camel_case() {
        let s = Summary {
            reading_time: Some("3 min".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["readingTime"], "3 min");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn news_response_reads_wire_names() {
        let raw = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Outlet"},
                "author": null,
                "title": "Headline",
                "description": "Desc",
                "url": "https://example.com/a",
                "content": "Body",
                "publishedAt": "2025-01-01T00:00:00Z"
            }]
        }"#;
        let response: NewsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.total_results, 1);
        assert_eq!(response.articles[0].source.name, "Outlet");
        assert_eq!(
            response.articles[0].published_at.as_deref(),
            Some("2025-01-01T00:00:00Z")
        );
    }
}
