//! services/summarizer/src/adapters/news_api.rs
//!
//! This module contains the adapter for the News API `/everything` endpoint.
//! It implements the `NewsSource` port from the `core` crate.

use async_trait::async_trait;
use news_summarizer_core::{
    domain::NewsResponse,
    ports::{NewsSource, PortError, PortResult},
    query::QueryParams,
};
use std::time::Duration;
use tracing::{debug, error};

/// Header carrying the News API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `NewsSource` over HTTP.
#[derive(Clone)]
pub struct NewsApiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiAdapter {
    /// Creates a new `NewsApiAdapter`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> PortResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn everything_url(&self) -> String {
        format!("{}/everything", self.base_url.trim_end_matches('/'))
    }
}

//=========================================================================================
// `NewsSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl NewsSource for NewsApiAdapter {
    async fn everything(&self, params: &QueryParams) -> PortResult<NewsResponse> {
        let query = params.to_map();
        debug!(?query, "Requesting articles");

        let response = self
            .client
            .get(self.everything_url())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "News API request failed: {}", body);
            return Err(PortError::Unexpected(format!(
                "News API returned {}: {}",
                status, body
            )));
        }

        response
            .json::<NewsResponse>()
            .await
            .map_err(|e| PortError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_url_ignores_trailing_slash() {
        let adapter = NewsApiAdapter::new("https://newsapi.org/v2/", "key").unwrap();
        assert_eq!(adapter.everything_url(), "https://newsapi.org/v2/everything");
        let adapter = NewsApiAdapter::new("http://localhost:8080", "key").unwrap();
        assert_eq!(adapter.everything_url(), "http://localhost:8080/everything");
    }
}
