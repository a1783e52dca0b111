//! Wikimedia REST API client

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::article::{ArticleSummary, PageSummary, TopPageviews};
use crate::config::ServerConfig;
use crate::error::WikiError;

/// Client for the pageviews and page-summary endpoints
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
    pageviews_base: String,
    wikipedia_base: String,
}

impl WikiClient {
    /// Create a client from the server config
    pub fn new(config: &ServerConfig) -> Result<Self, WikiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            pageviews_base: config.pageviews_api.trim_end_matches('/').to_string(),
            wikipedia_base: config.wikipedia_api.trim_end_matches('/').to_string(),
        })
    }

    /// Monthly top-articles URL for a language edition
    pub fn top_url(&self, lang: &str, year: i32, month: u32) -> String {
        format!(
            "{}/metrics/pageviews/top/{}.wikipedia/all-access/{}/{:02}/all-days",
            self.pageviews_base, lang, year, month
        )
    }

    /// Page-summary URL; `None` asks upstream for a random article
    pub fn summary_url(&self, lang: &str, article: Option<&str>) -> String {
        let base = self.wikipedia_base.replace("{lang}", lang);
        match article {
            Some(article) => format!("{}/api/rest_v1/page/summary/{}?redirect=true", base, article),
            None => format!("{}/api/rest_v1/page/random/summary", base),
        }
    }

    /// Fetch the raw ranked article names behind a top-articles URL
    pub async fn fetch_top_articles(&self, url: &str) -> Result<Vec<String>, WikiError> {
        tracing::info!("Fetching top articles: {}", url);
        let body: TopPageviews = self.get_json(url).await?;

        let item = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| WikiError::NoTopList { url: url.to_string() })?;

        Ok(item.articles.into_iter().map(|a| a.article).collect())
    }

    /// Fetch and clean an article summary
    pub async fn fetch_summary(&self, lang: &str, article: Option<&str>) -> Result<ArticleSummary, WikiError> {
        let url = self.summary_url(lang, article);
        tracing::debug!("Fetching summary: {}", url);
        let page: PageSummary = self.get_json(&url).await?;
        Ok(ArticleSummary::from_page(page))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WikiError> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(WikiError::UpstreamStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
