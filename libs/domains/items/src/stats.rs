//! Cached catalog statistics.
//!
//! The cache is keyed on the store's [`Revision`]: every request compares the
//! current revision with the cached one and recomputes on mismatch. An
//! optional watcher task polls the revision and refreshes eagerly, but the
//! request-time check alone keeps results correct.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Revision, Stats};
use crate::store::ItemStore;

pub struct StatsCache<S: ItemStore> {
    store: Arc<S>,
    cached: Mutex<Option<(Revision, Stats)>>,
}

impl<S: ItemStore> StatsCache<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            cached: Mutex::new(None),
        }
    }

    /// Current stats, recomputed if the document changed since the last
    /// computation.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> ItemResult<Stats> {
        let revision = self.store.revision().await?;

        if let Some(stats) = self.lookup(revision) {
            return Ok(stats);
        }

        self.compute(revision).await
    }

    /// Recompute unconditionally and store the result.
    pub async fn refresh(&self) -> ItemResult<Stats> {
        let revision = self.store.revision().await?;
        self.compute(revision).await
    }

    /// Drop the cached value; the next request recomputes.
    pub fn invalidate(&self) {
        if let Ok(mut cached) = self.cached.lock() {
            *cached = None;
        }
    }

    fn lookup(&self, revision: Revision) -> Option<Stats> {
        let cached = self.cached.lock().ok()?;
        cached
            .as_ref()
            .filter(|(seen, _)| *seen == revision)
            .map(|(_, stats)| *stats)
    }

    fn cached_revision(&self) -> Option<Revision> {
        let cached = self.cached.lock().ok()?;
        cached.as_ref().map(|(seen, _)| *seen)
    }

    async fn compute(&self, revision: Revision) -> ItemResult<Stats> {
        let items = self.store.load_all().await?;
        let stats = Stats::from_items(&items);

        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some((revision, stats));
        }

        tracing::debug!(total = stats.total, "Stats recomputed");
        Ok(stats)
    }
}

impl<S: ItemStore + 'static> StatsCache<S> {
    /// Polls the store revision every `interval` and refreshes the cache when
    /// it moves. Abort the returned handle to stop watching.
    pub fn spawn_watcher(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let current = match cache.store.revision().await {
                    Ok(revision) => revision,
                    Err(e) => {
                        tracing::warn!(error = %e, "Stats watcher could not read revision");
                        continue;
                    }
                };

                if cache.cached_revision() == Some(current) {
                    continue;
                }

                tracing::info!("Catalog data changed, refreshing stats cache");
                if let Err(e) = cache.compute(current).await {
                    tracing::warn!(error = %e, "Stats refresh failed");
                }
            }
        })
    }
}
