pub mod db;
pub mod news_api;
pub mod summary_llm;

pub use db::DbAdapter;
pub use news_api::NewsApiAdapter;
pub use summary_llm::OpenAiSummaryAdapter;
