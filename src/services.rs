// services.rs
use tracing::{error, info, warn};

use crate::config::StoreTimeouts;
use crate::error::ApiError;
use crate::models::{Poll, PollDraft};
use crate::poll::{prepare_for_creation, validate};
use crate::store::{with_deadline, PollStore, StoreError};

/// Create/get/list as plain functions over the store, independent of axum.
pub struct PollService<'a> {
    store: &'a dyn PollStore,
    timeouts: StoreTimeouts,
}

impl<'a> PollService<'a> {
    pub fn new(store: &'a dyn PollStore, timeouts: StoreTimeouts) -> Self {
        Self { store, timeouts }
    }

    /// Prepares and validates the draft, then persists it.
    /// Invalid drafts never reach the store.
    pub async fn create(&self, draft: PollDraft) -> Result<Poll, ApiError> {
        let poll = prepare_for_creation(draft);

        if let Err(e) = validate(&poll) {
            warn!(title = %poll.title, "Validation failed for poll: {e}");
            return Err(e.into());
        }

        with_deadline(self.timeouts.create, self.store.insert_one(&poll))
            .await
            .map_err(|e| {
                error!(
                    poll_id = %poll.id,
                    backend = self.store.backend_tag(),
                    "Error inserting poll: {e}"
                );
                ApiError::Internal("Failed to create poll")
            })?;

        info!(poll_id = %poll.id, options = poll.options.len(), "Created poll");
        Ok(poll)
    }

    pub async fn get(&self, id: &str) -> Result<Poll, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::MissingId);
        }

        match with_deadline(self.timeouts.get, self.store.find_one(id)).await {
            Ok(poll) => Ok(poll),
            Err(StoreError::NotFound) => {
                info!(poll_id = %id, "Poll not found");
                Err(ApiError::NotFound)
            }
            Err(e) => {
                error!(
                    poll_id = %id,
                    backend = self.store.backend_tag(),
                    "Error retrieving poll: {e}"
                );
                Err(ApiError::Internal("Failed to retrieve poll"))
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Poll>, ApiError> {
        with_deadline(self.timeouts.list, self.store.find_many())
            .await
            .map_err(|e| {
                error!(backend = self.store.backend_tag(), "Error listing polls: {e}");
                ApiError::Internal("Failed to retrieve polls")
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::OptionDraft;
    use crate::store::MemoryStore;

    /// Counts calls and fails every one of them.
    #[derive(Default)]
    struct BrokenStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PollStore for BrokenStore {
        fn backend_tag(&self) -> &'static str {
            "broken"
        }

        async fn insert_one(&self, _poll: &Poll) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Backend("connection refused".into()))
        }

        async fn find_one(&self, _id: &str) -> Result<Poll, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Backend("connection refused".into()))
        }

        async fn find_many(&self) -> Result<Vec<Poll>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Backend("connection refused".into()))
        }

        async fn delete_many(&self) -> Result<u64, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Backend("connection refused".into()))
        }
    }

    /// Never answers within any reasonable deadline.
    struct StalledStore;

    #[async_trait]
    impl PollStore for StalledStore {
        fn backend_tag(&self) -> &'static str {
            "stalled"
        }

        async fn insert_one(&self, _poll: &Poll) -> Result<(), StoreError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }

        async fn find_one(&self, _id: &str) -> Result<Poll, StoreError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(StoreError::NotFound)
        }

        async fn find_many(&self) -> Result<Vec<Poll>, StoreError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }

        async fn delete_many(&self) -> Result<u64, StoreError> {
            Ok(0)
        }
    }

    fn draft(title: &str, options: &[&str]) -> PollDraft {
        PollDraft {
            title: title.to_string(),
            options: options.iter().map(|text| OptionDraft::new(*text)).collect(),
            ..PollDraft::default()
        }
    }

    fn short_timeouts() -> StoreTimeouts {
        StoreTimeouts {
            create: Duration::from_millis(20),
            get: Duration::from_millis(20),
            list: Duration::from_millis(20),
        }
    }

    #[tokio::test]
    async fn create_persists_the_returned_poll() {
        let store = MemoryStore::new();
        let service = PollService::new(&store, StoreTimeouts::default());

        let poll = service.create(draft("Favorite Color?", &["Red", "Blue"])).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_one(&poll.id).await.unwrap(), poll);
    }

    #[tokio::test]
    async fn rejected_create_leaves_store_untouched() {
        let store = BrokenStore::default();
        let service = PollService::new(&store, StoreTimeouts::default());

        let err = service.create(draft("T", &["only one"])).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn store_failures_become_generic_server_faults() {
        let store = BrokenStore::default();
        let service = PollService::new(&store, StoreTimeouts::default());

        let err = service.create(draft("T", &["a", "b"])).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create poll");

        let err = service.get("some-id").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve poll");

        let err = service.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve polls");
    }

    #[tokio::test]
    async fn empty_id_is_rejected_without_a_store_call() {
        let store = BrokenStore::default();
        let service = PollService::new(&store, StoreTimeouts::default());

        assert!(matches!(service.get("").await, Err(ApiError::MissingId)));
        assert!(matches!(service.get("   ").await, Err(ApiError::MissingId)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let store = MemoryStore::new();
        let service = PollService::new(&store, StoreTimeouts::default());

        let missing = uuid::Uuid::new_v4().to_string();
        assert!(matches!(service.get(&missing).await, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn slow_store_fails_instead_of_hanging() {
        let store = StalledStore;
        let service = PollService::new(&store, short_timeouts());

        assert!(matches!(
            service.create(draft("T", &["a", "b"])).await,
            Err(ApiError::Internal(_))
        ));
        assert!(matches!(service.get("x").await, Err(ApiError::Internal(_))));
        assert!(matches!(service.list().await, Err(ApiError::Internal(_))));
    }
}
