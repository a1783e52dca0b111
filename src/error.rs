use std::error::Error;
use std::time::Duration;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Body sent to clients for every failure
pub const ERROR_MESSAGE: &str = "Server error :(";

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Error requesting upstream API")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("No top list in pageviews response from {url}")]
    NoTopList { url: String },

    #[error("Upstream did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Invalid language code: {0:?}")]
    InvalidLanguage(String),

    #[error("Invalid query string")]
    Query(#[from] QueryRejection),
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = match self {
            WikiError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
            WikiError::Query(_) => StatusCode::BAD_REQUEST,
            WikiError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WikiError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WikiError::UpstreamStatus { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            WikiError::NoTopList { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(json!({"error": ERROR_MESSAGE}));

        (status, payload).into_response()
    }
}
