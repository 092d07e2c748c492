//! Errors raised while talking to the prediction service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}
