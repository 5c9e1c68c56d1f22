//! services/summarizer/src/bin/summarizer.rs

use async_openai::{config::OpenAIConfig, Client};
use clap::Parser;
use news_summarizer_core::{
    NewsSource, NewsSummarizer, QueryParams, ServiceError, SummaryRepository, SummaryService,
};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use summarizer_lib::{
    adapters::{DbAdapter, NewsApiAdapter, OpenAiSummaryAdapter},
    cli::{params_to_map, Cli, Command},
    config::Config,
    error::AppError,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded.");

    // --- 2. Dispatch ---
    match cli.command {
        Command::List { query } => {
            let service = summary_service(&config).await?;
            print_json(&service.list(query.as_deref()).await?)
        }
        Command::Get { id } => {
            let service = summary_service(&config).await?;
            print_json(&service.get(id).await?)
        }
        Command::Create { input } => {
            let draft = input.read()?;
            let service = summary_service(&config).await?;
            print_json(&service.create(draft).await?)
        }
        Command::Update { id, input } => {
            let draft = input.read()?;
            let service = summary_service(&config).await?;
            print_json(&service.update(id, draft).await?)
        }
        Command::Delete { id } => {
            let service = summary_service(&config).await?;
            service.delete(id).await?;
            info!(%id, "Deleted summary");
            Ok(())
        }
        Command::DeleteAll => {
            let service = summary_service(&config).await?;
            service.delete_all().await?;
            Ok(())
        }
        Command::Summarize { topic, save } => {
            let summarizer = news_summarizer(&config)?;
            if save {
                let repository = connect_repository(&config).await?;
                print_json(&summarizer.summarize_and_save(&topic, repository.as_ref()).await?)
            } else {
                print_json(&summarizer.summarize(&topic).await?)
            }
        }
        Command::News { params } => {
            let query = QueryParams::from_map(&params_to_map(&params)).map_err(ServiceError::from)?;
            let news = news_source(&config)?;
            print_json(&news.everything(&query).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//=========================================================================================
// Adapter Wiring
//=========================================================================================

async fn connect_repository(config: &Config) -> Result<Arc<dyn SummaryRepository>, AppError> {
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;
    let db_adapter = DbAdapter::new(db_pool);
    info!("Running database migrations...");
    db_adapter.run_migrations().await?;
    info!("Database migrations complete.");
    Ok(Arc::new(db_adapter))
}

async fn summary_service(config: &Config) -> Result<SummaryService, AppError> {
    Ok(SummaryService::new(connect_repository(config).await?))
}

fn news_source(config: &Config) -> Result<Arc<dyn NewsSource>, AppError> {
    let api_key = config
        .news_api_key
        .as_ref()
        .ok_or_else(|| AppError::Internal("NEWS_API_KEY is required".to_string()))?;
    Ok(Arc::new(NewsApiAdapter::new(
        config.news_api_base_url.clone(),
        api_key.clone(),
    )?))
}

fn news_summarizer(config: &Config) -> Result<NewsSummarizer, AppError> {
    let mut openai_config = OpenAIConfig::new().with_api_key(
        config
            .openai_api_key
            .as_ref()
            .ok_or_else(|| AppError::Internal("OPENAI_API_KEY is required".to_string()))?,
    );
    if let Some(api_base) = &config.openai_api_base {
        openai_config = openai_config.with_api_base(api_base);
    }
    let openai_client = Client::with_config(openai_config);

    let completion = Arc::new(OpenAiSummaryAdapter::new(
        openai_client,
        config.summary_model.clone(),
        config.instructions.clone(),
    ));

    Ok(NewsSummarizer::new(
        news_source(config)?,
        completion,
        config.summarizer,
    ))
}
