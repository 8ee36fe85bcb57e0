//! Postgres-backed document store.
//!
//! Each poll is kept whole as a JSONB document keyed by its id, so the
//! record shape always mirrors [`Poll`].

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{PollStore, StoreError};
use crate::models::Poll;

pub const CREATE_POLLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS polls (
    id TEXT PRIMARY KEY,
    document JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the `polls` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_POLLS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl PollStore for PgStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn insert_one(&self, poll: &Poll) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO polls (id, document, created_at) VALUES ($1, $2, $3)")
            .bind(&poll.id)
            .bind(Json(poll))
            .bind(poll.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Poll, StoreError> {
        let row: Option<(Json<Poll>,)> =
            sqlx::query_as("SELECT document FROM polls WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(Json(poll),)| poll).ok_or(StoreError::NotFound)
    }

    async fn find_many(&self) -> Result<Vec<Poll>, StoreError> {
        let rows: Vec<(Json<Poll>,)> =
            sqlx::query_as("SELECT document FROM polls ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(Json(poll),)| poll).collect())
    }

    async fn delete_many(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM polls").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
