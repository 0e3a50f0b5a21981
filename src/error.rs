//! Error taxonomy for the portfolio client.
//!
//! Every operation propagates failures to its caller. Nothing here retries
//! or recovers; the variants only say what went wrong and where.

use crate::url_validator::UrlValidationError;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} answered with status {status}")]
    Status { path: String, status: StatusCode },

    #[error("Unexpected response shape from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected at least {expected} entries, got {got}")]
    ShortResponse { expected: usize, got: usize },

    #[error("Page element not found: {0}")]
    MissingElement(&'static str),

    #[error("Comment limit is not a non-negative integer: {0:?}")]
    InvalidLimit(String),

    #[error("Comment text is empty")]
    EmptyComment,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] UrlValidationError),

    #[error("Configuration error: {0}")]
    Config(String),
}
