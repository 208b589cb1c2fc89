use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::types::{Article, CacheSnapshot, CacheStatus};

/// Default freshness window (10 minutes)
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Shared holder of the most recent article set.
///
/// Readers get an `Arc` to an immutable [`CacheSnapshot`]. Writers build the
/// replacement snapshot completely before taking the write lock, so the lock
/// only ever guards a pointer swap and no reader can observe a half-written
/// article list.
///
/// Data older than the freshness window is no longer served as current, but
/// stays in place as a fallback until the next successful replace.
#[derive(Debug)]
pub struct ArticleCache {
    snapshot: RwLock<Arc<CacheSnapshot>>,
    freshness_window: Duration,
}

impl Default for ArticleCache {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS_WINDOW)
    }
}

impl ArticleCache {
    pub fn new(freshness_window: Duration) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(CacheSnapshot::default())),
            freshness_window,
        }
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn get(&self) -> Arc<CacheSnapshot> {
        // The guarded value is a plain Arc, so a poisoned lock is still consistent
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// True when the cache was populated less than one freshness window before `now`.
    ///
    /// A `last_update` in the future (clock moved backwards) counts as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        let Some(last_update) = self.get().last_update else {
            return false;
        };
        match (now - last_update).to_std() {
            Ok(age) => age < self.freshness_window,
            Err(_) => true,
        }
    }

    pub fn has_data(&self) -> bool {
        self.get().has_data()
    }

    /// Swap in a new article set stamped with `now`.
    ///
    /// Returns the snapshot that was installed.
    pub fn replace(&self, articles: Vec<Article>, now: DateTime<Utc>) -> Arc<CacheSnapshot> {
        let fresh = Arc::new(CacheSnapshot {
            articles,
            last_update: Some(now),
        });
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        fresh
    }

    pub fn status(&self) -> CacheStatus {
        let snapshot = self.get();
        CacheStatus {
            has_data: snapshot.has_data(),
            last_update: snapshot.last_update,
            count: snapshot.count(),
        }
    }
}
