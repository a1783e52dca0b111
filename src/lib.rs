//! # Wikiroulette
//!
//! Serve a random Wikipedia article's title and summary over HTTP.
//!
//! This crate provides tools to:
//! - Fetch last month's most-viewed articles from the Wikimedia pageviews API
//! - Filter out namespace pages, list pages and the main page
//! - Cache the filtered lists per language and month
//! - Pick a random article, optionally from the top N, and relay its summary
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on the port from $PORT (default 3000)
//! wikiroulette-serve
//!
//! # Ask for one of the 50 most-read Finnish articles
//! curl 'http://localhost:3000/apiv1?lang=fi&top=50'
//! ```

pub mod article;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod selector;
pub mod server;
pub mod top_articles;

pub use article::ArticleSummary;
pub use cache::TopArticlesCache;
pub use client::WikiClient;
pub use config::ServerConfig;
pub use error::WikiError;
pub use server::{router, AppState};
