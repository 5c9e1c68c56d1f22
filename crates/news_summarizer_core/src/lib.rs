pub mod domain;
pub mod memory;
pub mod parser;
pub mod ports;
pub mod query;
pub mod service;

pub use domain::{Article, ArticleSource, NewsResponse, SaveOperation, Source, Summary, SummaryDraft};
pub use memory::InMemorySummaryRepository;
pub use parser::{ParseError, SummaryParser};
pub use ports::{NewsSource, PortError, PortResult, SummaryRepository, TextCompletionService};
pub use query::{QueryError, QueryParams, QueryParamsBuilder, SearchIn, SortBy};
pub use service::{NewsSummarizer, ServiceError, ServiceResult, SummarizerSettings, SummaryService};
