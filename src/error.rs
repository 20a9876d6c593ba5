//! Error handling for the blog generation service
//!
//! This module provides idiomatic Rust error types using thiserror,
//! split by the two failure surfaces of the system: the artifact store
//! (read/write path) and the workflow engine boundary.

use thiserror::Error;

/// Errors from the artifact store.
///
/// The API layer maps these onto HTTP statuses: `InvalidFilename` -> 400,
/// `NotFound` -> 404, `Io` -> 500.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Blog not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from workflow engine invocation.
///
/// Never propagated as a transport-level error: the generate endpoint
/// captures the message verbatim into its `error` response field.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Engine response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Engine failure: {0}")]
    Engine(String),
}
