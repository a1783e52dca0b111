//! Wikiroulette Web Server
//!
//! Serve random Wikipedia summaries, optionally biased toward last month's
//! most-viewed articles.
//!
//! # Examples
//!
//! Serve with default settings (port from `$PORT`, else 3000):
//! ```bash
//! wikiroulette-serve
//! ```
//!
//! Specify port and verbose logging:
//! ```bash
//! wikiroulette-serve --port 8080 --verbose
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wikiroulette::{router, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "wikiroulette-serve")]
#[command(author, version, about = "Serve random Wikipedia article summaries")]
#[command(long_about = r#"
Serve random Wikipedia article summaries over a single JSON endpoint:

  GET /apiv1?lang={code}&top={n}

Without `top` the article is random across the whole wiki. With `top=N`
it is picked among last month's N most-viewed articles.

EXAMPLES:
  Start server with defaults:
    wikiroulette-serve

  Use custom port:
    PORT=8080 wikiroulette-serve

  Load settings from a JSON file:
    wikiroulette-serve --config wikiroulette.json
"#)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the Wikimedia pageviews REST API
    #[arg(long)]
    pageviews_api: Option<String>,

    /// Base URL of each Wikipedia edition, with `{lang}` as placeholder
    #[arg(long)]
    wikipedia_api: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Language used when a request has no `lang`
    #[arg(long)]
    default_lang: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// CLI > Config file > Default
    fn server_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(host) = &self.host {
            config = config.with_host(host);
        }
        if let Some(base) = &self.pageviews_api {
            config = config.with_pageviews_api(base);
        }
        if let Some(base) = &self.wikipedia_api {
            config = config.with_wikipedia_api(base);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(secs);
        }
        if let Some(lang) = &self.default_lang {
            config = config.with_default_language(lang);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("wikiroulette=debug,wikiroulette_serve=debug,tower_http=debug,info")
    } else {
        EnvFilter::new("wikiroulette=info,wikiroulette_serve=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = cli.server_config()?;
    let state = AppState::new(&config)?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Started server on http://{}", addr);
    tracing::info!("Pageviews API: {}", config.pageviews_api);
    tracing::info!("Wikipedia API: {}", config.wikipedia_api);

    axum::serve(listener, app).await?;

    Ok(())
}
