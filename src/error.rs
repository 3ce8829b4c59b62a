//! Unified widget error types.

use thiserror::Error;

pub use crate::shared::scaling::ScalingError;

/// Top-level widget error.
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed payload in `{field}`: {reason}")]
    MalformedPayload { field: &'static str, reason: String },
}

/// Key/value store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}
