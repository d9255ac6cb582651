//! Unified library error type.
//!
//! Store, service and collaborator layers return [`AppError`]. Commands wrap
//! it into `anyhow::Error` at the edge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The local store could not be opened or migrated. Fatal for the session.
    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Content generation or authentication collaborator failed.
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
