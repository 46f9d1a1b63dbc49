//! Error types for the fetch layer

use thiserror::Error;

/// Errors raised while talking to the content service
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("refusing to fetch URL outside the configured API: {0}")]
    ForeignUrl(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Create a status error
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a foreign URL error
    pub fn foreign_url(url: impl Into<String>) -> Self {
        Self::ForeignUrl(url.into())
    }
}

/// Result type alias for the fetch layer
pub type Result<T> = std::result::Result<T, FetchError>;
