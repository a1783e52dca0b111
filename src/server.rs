//! HTTP surface: the `/apiv1` random-article endpoint

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tower_http::cors::{Any, CorsLayer};

use crate::article::ArticleSummary;
use crate::cache::TopArticlesCache;
use crate::client::WikiClient;
use crate::config::ServerConfig;
use crate::error::WikiError;
use crate::selector::{parse_top, select};
use crate::top_articles::top_articles;

/// Wikipedia edition codes: en, fi, simple, zh-yue, be-tarask ...
static LANG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]{0,31}$").unwrap());

/// Application state shared across handlers
pub struct AppState {
    client: WikiClient,
    /// Top lists fetched so far, one per language and month
    cache: TopArticlesCache,
    default_language: String,
    request_timeout: Duration,
    clock: fn() -> DateTime<Utc>,
}

type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, WikiError> {
        Ok(Self {
            client: WikiClient::new(config)?,
            cache: TopArticlesCache::new(),
            default_language: config.default_language.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            clock: Utc::now,
        })
    }

    /// Replace the wall clock used to work out "last month"
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Summary of a random article among last month's `top` most viewed.
    ///
    /// Falls back to a fully random article when the filtered list is empty.
    pub async fn biased_summary(&self, lang: &str, top: usize) -> Result<ArticleSummary, WikiError> {
        let articles = top_articles(&self.client, &self.cache, lang, (self.clock)()).await?;
        let picked = {
            let mut rng = rand::rng();
            select(&articles, top, &mut rng).map(str::to_owned)
        };

        match picked {
            Some(article) => {
                tracing::debug!("Picked {} from top {} ({})", article, top, lang);
                self.client.fetch_summary(lang, Some(article.as_str())).await
            }
            None => {
                tracing::warn!("Top list for {} is empty after filtering, using a random article", lang);
                self.random_summary(lang).await
            }
        }
    }

    /// Summary of an article picked by upstream across the whole wiki
    pub async fn random_summary(&self, lang: &str) -> Result<ArticleSummary, WikiError> {
        self.client.fetch_summary(lang, None).await
    }
}

/// Query parameters for `/apiv1`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RandomQuery {
    pub lang: Option<String>,
    pub top: Option<String>,
}

impl RandomQuery {
    /// Collect `lang` and `top` from decoded query pairs.
    ///
    /// Repeated keys keep their first value and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lang" => &mut query.lang,
                "top" => &mut query.top,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let shared_state: SharedState = Arc::new(state);

    Router::new()
        .route("/apiv1", get(api_random))
        .with_state(shared_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn api_random(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    State(state): State<SharedState>,
) -> Result<Json<ArticleSummary>, WikiError> {
    let Query(pairs) = query?;
    let params = RandomQuery::from_pairs(pairs);

    let lang = params
        .lang
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| state.default_language.clone());

    if !LANG_RE.is_match(&lang) {
        return Err(WikiError::InvalidLanguage(lang));
    }

    let work = async {
        match params.top.as_deref().and_then(parse_top) {
            Some(top) => state.biased_summary(&lang, top).await,
            None => state.random_summary(&lang).await,
        }
    };

    // Deadline for the whole request, biased mode makes two upstream calls
    let summary = tokio::time::timeout(state.request_timeout, work)
        .await
        .map_err(|_| WikiError::Timeout(state.request_timeout))??;

    Ok(Json(summary))
}
