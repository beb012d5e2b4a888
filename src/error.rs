//! Error types shared across the catalog, search and persistence layers.

use thiserror::Error;

use crate::types::MovieId;

/// Errors raised while encoding or decoding persisted movie records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field is missing or has the wrong type.
    #[error("malformed movie record: {0}")]
    Malformed(String),

    /// The catalog could not be serialized.
    #[error("failed to encode movie records: {0}")]
    Encode(String),
}

/// Errors returned by the remote search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query cannot be carried in a URL.
    #[error("invalid search query: {0}")]
    InvalidQuery(String),

    /// The assembled request or image URL does not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS, connection, timeout or any other network-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something other than 200 OK.
    #[error("server error: {status}")]
    Http { status: u16 },

    /// The body is not the expected `{ results: [...] }` envelope.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors from the local key-value namespace.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors from catalog mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no movie with id {0}")]
    NotFound(MovieId),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}
