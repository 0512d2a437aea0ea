//! Error types used throughout the application
//!
//! The gateway maps every failure into one `ApiError` variant at its
//! boundary; loosely-typed JSON never escapes past that layer. Consumers
//! use the variant to decide user messaging and whether a manual retry
//! makes sense.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the request gateway.
///
/// `Unauthorized` means "re-authenticate", never "retry": the gateway has
/// already evicted the stored credential by the time this is returned.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Credential store error: {0}")]
    Store(String),
}

impl ApiError {
    /// Whether the caller must re-authenticate before trying again.
    #[must_use]
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Whether a manual retry by the user is a sensible affordance.
    ///
    /// The gateway itself never retries; this only informs UI messaging.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited(_) | Self::ServerError(_) | Self::NetworkFailure(_)
        )
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Errors from a credential store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type alias for credential store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
