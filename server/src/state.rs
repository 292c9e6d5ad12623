use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::ServiceConfig;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Admits at most `max_concurrent_searches` searches at a time; a
    /// request that can't acquire a permit is rejected rather than
    /// queued, so a burst of requests can't pile up unbounded worker
    /// threads behind the scenes.
    pub search_admission: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            search_admission: Arc::new(Semaphore::new(config.max_concurrent_searches)),
        }
    }
}
