//! Wikiroulette Config

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Host to bind to
    pub host: String,
    /// Base of the Wikimedia REST API serving pageviews
    pub pageviews_api: String,
    /// Base of each Wikipedia edition; `{lang}` is replaced by the language code
    pub wikipedia_api: String,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
    /// User-Agent sent to Wikimedia
    pub user_agent: String,
    /// Language used when a request has no `lang`
    pub default_language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            pageviews_api: "https://wikimedia.org/api/rest_v1".to_string(),
            wikipedia_api: "https://{lang}.wikipedia.org".to_string(),
            request_timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            default_language: "en".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_pageviews_api(mut self, base: impl Into<String>) -> Self {
        self.pageviews_api = base.into();
        self
    }

    pub fn with_wikipedia_api(mut self, base: impl Into<String>) -> Self {
        self.wikipedia_api = base.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_default_language(mut self, lang: impl Into<String>) -> Self {
        self.default_language = lang.into();
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load config from a JSON file; missing fields keep their defaults
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
