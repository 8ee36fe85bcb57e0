use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PollStore, StoreError};
use crate::models::Poll;

/// In-process store, used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryStore {
    polls: RwLock<Vec<Poll>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.polls.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.polls.read().await.is_empty()
    }
}

#[async_trait]
impl PollStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn insert_one(&self, poll: &Poll) -> Result<(), StoreError> {
        let mut polls = self.polls.write().await;
        if polls.iter().any(|existing| existing.id == poll.id) {
            return Err(StoreError::Backend(format!("duplicate key: {}", poll.id)));
        }
        polls.push(poll.clone());
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Poll, StoreError> {
        self.polls
            .read()
            .await
            .iter()
            .find(|poll| poll.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_many(&self) -> Result<Vec<Poll>, StoreError> {
        Ok(self.polls.read().await.clone())
    }

    async fn delete_many(&self) -> Result<u64, StoreError> {
        let mut polls = self.polls.write().await;
        let removed = polls.len() as u64;
        polls.clear();
        Ok(removed)
    }
}
