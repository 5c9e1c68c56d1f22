//! crates/news_summarizer_core/src/service.rs
//!
//! Application services built on top of the ports: the summary CRUD surface
//! and the fetch → complete → parse pipeline.

use chrono::{Days, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{SaveOperation, Summary, SummaryDraft};
use crate::parser::{ParseError, SummaryParser};
use crate::ports::{NewsSource, PortError, SummaryRepository, TextCompletionService};
use crate::query::{QueryError, QueryParams, SearchIn, SortBy};

/// Errors surfaced by the application services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Port(#[from] PortError),
    #[error("failed to encode articles for the prompt: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Port(PortError::NotFound(_)))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::Port(PortError::NotFound(format!("Summary {} not found", id)))
}

//=========================================================================================
// SummaryService
//=========================================================================================

/// List, get, create, update and delete operations over stored summaries.
#[derive(Clone)]
pub struct SummaryService {
    repository: Arc<dyn SummaryRepository>,
}

impl SummaryService {
    pub fn new(repository: Arc<dyn SummaryRepository>) -> Self {
        Self { repository }
    }

    /// Lists every summary, or only those matching `query` when it is not blank.
    pub async fn list(&self, query: Option<&str>) -> ServiceResult<Vec<Summary>> {
        let summaries = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.repository.find_matching(q).await?,
            None => self.repository.find_all().await?,
        };
        Ok(summaries)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Summary> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, draft: SummaryDraft) -> ServiceResult<Summary> {
        let saved = self.repository.execute(SaveOperation::Create(draft)).await?;
        info!(id = ?saved.id, "Created summary");
        Ok(saved)
    }

    /// Overwrites every mutable field of an existing summary.
    pub async fn update(&self, id: Uuid, draft: SummaryDraft) -> ServiceResult<Summary> {
        let mut summary = self.get(id).await?;
        summary.apply(draft);
        let saved = self.repository.save(&summary).await?;
        info!(%id, "Updated summary");
        Ok(saved)
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn delete_all(&self) -> ServiceResult<()> {
        self.repository.delete_all().await?;
        warn!("Deleted all summaries");
        Ok(())
    }
}

//=========================================================================================
// NewsSummarizer
//=========================================================================================

const PROMPT_PREFIX: &str = "Here are the articles to summarize:\n";

/// Tunables for the default article search.
#[derive(Debug, Clone, Copy)]
pub struct SummarizerSettings {
    pub page_size: u32,
    pub lookback_days: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            lookback_days: 3,
        }
    }
}

/// Fetches articles for a topic and turns the model's reply into a summary.
#[derive(Clone)]
pub struct NewsSummarizer {
    news: Arc<dyn NewsSource>,
    completion: Arc<dyn TextCompletionService>,
    parser: SummaryParser,
    settings: SummarizerSettings,
}

impl NewsSummarizer {
    pub fn new(
        news: Arc<dyn NewsSource>,
        completion: Arc<dyn TextCompletionService>,
        settings: SummarizerSettings,
    ) -> Self {
        Self {
            news,
            completion,
            parser: SummaryParser::new(),
            settings,
        }
    }

    /// The search issued for `topic`: title and description matches over the
    /// lookback window ending `today`, most popular first.
    pub fn query_for(&self, topic: &str, today: NaiveDate) -> ServiceResult<QueryParams> {
        let from = today
            .checked_sub_days(Days::new(self.settings.lookback_days))
            .unwrap_or(NaiveDate::MIN);
        let params = QueryParams::builder(topic)
            .search_in([SearchIn::Title, SearchIn::Description])
            .from(from)
            .to(today)
            .sort_by(SortBy::Popularity)
            .page_size(self.settings.page_size)
            .build_at(today)?;
        Ok(params)
    }

    /// Produces an unsaved summary of recent news about `topic`.
    pub async fn summarize(&self, topic: &str) -> ServiceResult<Summary> {
        let params = self.query_for(topic, Utc::now().date_naive())?;
        let response = self.news.everything(&params).await?;
        info!(
            "Fetched {}/{} articles",
            response.articles.len(),
            response.total_results
        );

        let prompt = format!("{}{}", PROMPT_PREFIX, serde_json::to_string(&response.articles)?);
        let reply = self.completion.complete(&prompt).await?;
        info!(chars = reply.len(), "Received completion");

        Ok(self.parser.parse(&reply)?)
    }

    /// Summarizes `topic` and stores the result as a new row.
    pub async fn summarize_and_save(
        &self,
        topic: &str,
        repository: &dyn SummaryRepository,
    ) -> ServiceResult<Summary> {
        let summary = self.summarize(topic).await?;
        let saved = repository.save(&summary).await?;
        info!(id = ?saved.id, "Saved summary");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, ArticleSource, NewsResponse};
    use crate::memory::InMemorySummaryRepository;
    use crate::ports::PortResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeNews {
        seen: Mutex<Vec<QueryParams>>,
    }

    #[async_trait]
    impl NewsSource for FakeNews {
        async fn everything(&self, params: &QueryParams) -> PortResult<NewsResponse> {
            self.seen.lock().unwrap().push(params.clone());
            Ok(NewsResponse {
                status: "ok".into(),
                total_results: 42,
                articles: vec![Article {
                    source: ArticleSource {
                        id: None,
                        name: "Outlet".into(),
                    },
                    author: None,
                    title: "Chips get faster".into(),
                    description: None,
                    url: "https://example.com/chips".into(),
                    content: None,
                    published_at: None,
                }],
            })
        }
    }

    struct FakeCompletion {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextCompletionService for FakeCompletion {
        async fn complete(&self, prompt: &str) -> PortResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn summarizer(reply: &str) -> (NewsSummarizer, Arc<FakeNews>, Arc<FakeCompletion>) {
        let news = Arc::new(FakeNews {
            seen: Mutex::new(Vec::new()),
        });
        let completion = Arc::new(FakeCompletion {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let summarizer = NewsSummarizer::new(
            news.clone(),
            completion.clone(),
            SummarizerSettings::default(),
        );
        (summarizer, news, completion)
    }

    #[test]
    fn default_query_covers_the_lookback_window() {
        let (summarizer, _, _) = summarizer("");
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let params = summarizer.query_for("AI", today).unwrap();
        assert_eq!(params.q(), "AI");
        assert_eq!(params.from(), NaiveDate::from_ymd_opt(2025, 2, 27));
        assert_eq!(params.to(), Some(today));
        assert_eq!(params.sort_by(), Some(SortBy::Popularity));
        assert_eq!(params.page_size(), Some(10));
        assert_eq!(params.search_in(), &[SearchIn::Title, SearchIn::Description]);
    }

    #[test]
    fn blank_topic_is_a_query_error() {
        let (summarizer, _, _) = summarizer("");
        let err = summarizer.query_for(" ", Utc::now().date_naive()).unwrap_err();
        assert!(matches!(err, ServiceError::Query(QueryError::Validation { .. })));
    }

    #[tokio::test]
    async fn summarize_runs_the_pipeline() {
        let reply = "---\ntitle: Chip news\nhighlights:\n  - Faster\n---\nChips are faster.";
        let (summarizer, news, completion) = summarizer(reply);
        let repo = InMemorySummaryRepository::new();

        let saved = summarizer.summarize_and_save("chips", &repo).await.unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.title.as_deref(), Some("Chip news"));
        assert_eq!(saved.content, "Chips are faster.");
        assert_eq!(news.seen.lock().unwrap()[0].q(), "chips");

        let prompts = completion.prompts.lock().unwrap();
        assert!(prompts[0].starts_with(PROMPT_PREFIX));
        assert!(prompts[0].contains("\"title\":\"Chips get faster\""));
    }

    #[tokio::test]
    async fn unparseable_reply_is_a_parse_error() {
        let (summarizer, _, _) = summarizer("Sorry, I cannot help with that.");
        let err = summarizer.summarize("chips").await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(ParseError::MissingFrontMatter)));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let service = SummaryService::new(Arc::new(InMemorySummaryRepository::new()));
        let err = service
            .update(Uuid::new_v4(), SummaryDraft::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.get(Uuid::new_v4()).await.unwrap_err().is_not_found());
    }
}
