//! Snapshot cache for the rendered index page
//!
//! The index is regenerated at most once per validity window. The first
//! request after the window elapses refetches and re-renders; when that
//! refresh fails while an older snapshot exists, the old snapshot keeps
//! being served.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::content::PostPagination;

/// A captured render of the index page
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Rendered index HTML
    pub html: String,
    /// The pagination state the page was rendered from
    pub pagination: PostPagination,
    taken_at: Instant,
}

impl Snapshot {
    /// Capture a snapshot taken now
    pub fn new(html: String, pagination: PostPagination) -> Self {
        Self {
            html,
            pagination,
            taken_at: Instant::now(),
        }
    }
}

/// Cache holding the current index snapshot for a fixed validity window
pub struct PageCache {
    ttl: Duration,
    current: RwLock<Option<Snapshot>>,
}

impl PageCache {
    /// Create an empty cache with the given validity window in seconds
    pub fn new(revalidate_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(revalidate_secs),
            current: RwLock::new(None),
        }
    }

    /// Get the current snapshot, regenerating through `refresh` when needed
    ///
    /// `refresh` runs while the write half of the slot is held, so
    /// concurrent requests wait for one regeneration instead of stampeding
    /// the content service. A failed refresh falls back to the previous
    /// snapshot when one exists; with an empty cache the error propagates.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> anyhow::Result<Snapshot>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Snapshot>>,
    {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        let mut slot = self.current.write().await;

        // Another request may have finished the refresh while this one
        // waited for the write half.
        if let Some(snapshot) = slot.as_ref().filter(|s| s.taken_at.elapsed() < self.ttl) {
            return Ok(snapshot.clone());
        }

        match refresh().await {
            Ok(snapshot) => {
                *slot = Some(snapshot.clone());
                tracing::debug!("Refreshed index snapshot");
                Ok(snapshot)
            }
            Err(e) => match slot.as_ref() {
                Some(stale) => {
                    tracing::warn!("Refresh failed, serving previous snapshot: {}", e);
                    Ok(stale.clone())
                }
                None => Err(e),
            },
        }
    }

    async fn fresh_snapshot(&self) -> Option<Snapshot> {
        let slot = self.current.read().await;
        slot.as_ref()
            .filter(|s| s.taken_at.elapsed() < self.ttl)
            .cloned()
    }
}
