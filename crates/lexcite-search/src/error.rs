//! Error types for search execution

use thiserror::Error;

/// Errors from the opinion-search provider
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Non-success HTTP status from the service
    #[error("Service returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service rejected the request for rate-limit reasons
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Failure injected by a test double
    #[error("Search failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            if status.as_u16() == 429 {
                return SearchError::RateLimitExceeded;
            }
            return SearchError::Status(status.as_u16());
        }
        SearchError::Communication(e.to_string())
    }
}

/// Errors from the checkpoint store
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// Filesystem failure
    #[error("Checkpoint I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Checkpoint record could not be encoded or decoded
    #[error("Checkpoint serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
