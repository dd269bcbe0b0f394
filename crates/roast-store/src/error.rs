//! Roast storage errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store lock poisoned: {0}")]
    Poisoned(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Returned when a label is not one of the four categories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown roast category: {0}")]
pub struct UnknownCategory(pub String);
