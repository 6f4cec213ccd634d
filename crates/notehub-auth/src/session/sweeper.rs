//! Periodic idle session eviction.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::store::SessionStore;

/// Runs a background loop that evicts idle viewer sessions.
///
/// Unlock state lives only inside the session entry, so eviction is the
/// single point where a viewer's unlocked shares are forgotten.
#[derive(Debug, Clone)]
pub struct SessionSweeper {
    /// The session store to sweep.
    store: Arc<SessionStore>,
    /// How often a sweep cycle runs.
    interval: Duration,
}

impl SessionSweeper {
    /// Creates a new sweeper over the given store.
    pub fn new(store: Arc<SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Runs the sweep loop forever. Intended to be spawned as a task.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let evicted = self.store.sweep();
            if evicted > 0 {
                info!(evicted, live = self.store.len(), "Evicted idle viewer sessions");
            } else {
                debug!(live = self.store.len(), "Session sweep found nothing to evict");
            }
        }
    }
}
