//! Persistence boundary for polls.
//!
//! Handlers only see [`PollStore`]; the backend behind it is picked at
//! startup. Every call made from a request is wrapped in [`with_deadline`]
//! so a slow or unreachable store fails the request instead of hanging it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Poll;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("store failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Document-store operations consumed by the request handlers.
///
/// The poll id is the primary key of each record.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Short tag used in log lines.
    fn backend_tag(&self) -> &'static str;

    async fn insert_one(&self, poll: &Poll) -> Result<(), StoreError>;

    /// Returns [`StoreError::NotFound`] when no record has this id.
    async fn find_one(&self, id: &str) -> Result<Poll, StoreError>;

    /// All records, oldest first.
    async fn find_many(&self) -> Result<Vec<Poll>, StoreError>;

    /// Removes every record and returns how many were removed.
    async fn delete_many(&self) -> Result<u64, StoreError>;
}

/// Runs a store operation, failing with [`StoreError::Timeout`] once
/// `deadline` has passed. The operation is dropped on timeout.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(deadline, operation)
        .await
        .map_err(|_| StoreError::Timeout(deadline))?
}
