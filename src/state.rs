use std::sync::Arc;

use crate::{config::StoreTimeouts, store::PollStore};

/// Shared by every request; the store handle is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PollStore>,
    pub timeouts: StoreTimeouts,
}

impl AppState {
    pub fn new(store: Arc<dyn PollStore>, timeouts: StoreTimeouts) -> Self {
        Self { store, timeouts }
    }
}
