use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain a product page. Skips the URL for the current cycle.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error {status} for url: {url}")]
    Http { url: String, status: StatusCode },
}

/// A structured-data block that could not be read. Always recovered locally.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid Telegram endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("failed to reach Telegram: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Telegram rejected message: {status} {body}")]
    Rejected { status: StatusCode, body: String },
}
