//! Persistence layer.
//!
//! The history store is passed explicitly to handlers as app data.

pub mod history;

pub use history::HistoryStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("History store lock poisoned")]
    LockPoisoned,

    #[error("Invalid timestamp in history row: {0}")]
    InvalidTimestamp(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
