use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::feed::{FeedFetcher, FeedParser, FetchError, ParseError, ProbeReport};
use crate::storage::{Article, ArticleCache, CacheSnapshot, CacheStatus};

/// Failure of a refresh attempt when no cached data can stand in.
///
/// The message is the underlying fetch or parse error, unchanged.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Where the articles in a [`NewsOutcome`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServedFrom {
    /// Fresh cache hit, no fetch
    Cache,
    /// Fetched and parsed during this call
    Fresh,
    /// Refresh failed; previous snapshot served instead
    StaleCache,
}

impl ServedFrom {
    pub fn as_str(self) -> &'static str {
        match self {
            ServedFrom::Cache => "cache",
            ServedFrom::Fresh => "fresh",
            ServedFrom::StaleCache => "stale-cache",
        }
    }
}

/// Articles plus how they were obtained.
#[derive(Debug, Clone)]
pub struct NewsOutcome {
    pub snapshot: Arc<CacheSnapshot>,
    pub served_from: ServedFrom,
    /// Cause of the failed refresh, set only for stale fallbacks
    pub warning: Option<String>,
}

impl NewsOutcome {
    /// True unless the articles were fetched by this call.
    pub fn cached(&self) -> bool {
        self.served_from != ServedFrom::Fresh
    }

    pub fn stale(&self) -> bool {
        self.served_from == ServedFrom::StaleCache
    }

    pub fn articles(&self) -> &[Article] {
        &self.snapshot.articles
    }
}

/// Serves the feed's articles from cache, refreshing when needed.
///
/// One instance is shared by every request handler and the background
/// refresher. Cache reads never wait on the network; refreshes are
/// serialized so two fetches never race to replace the cache.
#[derive(Debug)]
pub struct NewsService {
    fetcher: FeedFetcher,
    parser: FeedParser,
    cache: ArticleCache,
    refresh_lock: Mutex<()>,
}

impl NewsService {
    pub fn new(fetcher: FeedFetcher, parser: FeedParser, cache: ArticleCache) -> Self {
        Self {
            fetcher,
            parser,
            cache,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(
            FeedFetcher::new(config)?,
            FeedParser::new(config.source_label.as_str()),
            ArticleCache::new(config.cache_ttl()),
        ))
    }

    pub fn feed_url(&self) -> &str {
        self.fetcher.url()
    }

    pub fn cache(&self) -> &ArticleCache {
        &self.cache
    }

    /// Returns the current articles.
    ///
    /// - Fresh cache and no `force_refresh` → cached snapshot, no network
    /// - Otherwise one fetch + parse; success replaces the cache
    /// - On failure with cached data → the old snapshot, flagged stale
    ///
    /// # Errors
    ///
    /// Returns [`NewsError`] only when the refresh failed and the cache holds
    /// no articles to fall back on.
    pub async fn get_articles(&self, force_refresh: bool) -> Result<NewsOutcome, NewsError> {
        if !force_refresh {
            if let Some(hit) = self.fresh_hit() {
                return Ok(hit);
            }
        }

        let _guard = self.refresh_lock.lock().await;

        // Another request may have refreshed while we waited for the lock
        if !force_refresh {
            if let Some(hit) = self.fresh_hit() {
                return Ok(hit);
            }
        }

        match self.fetch_and_parse().await {
            Ok(articles) => {
                let snapshot = self.cache.replace(articles, Utc::now());
                tracing::info!(
                    count = snapshot.count(),
                    forced = force_refresh,
                    "Cache updated from feed"
                );
                Ok(NewsOutcome {
                    snapshot,
                    served_from: ServedFrom::Fresh,
                    warning: None,
                })
            }
            Err(e) => {
                let snapshot = self.cache.get();
                if snapshot.has_data() {
                    tracing::warn!(
                        error = %e,
                        count = snapshot.count(),
                        last_update = ?snapshot.last_update,
                        "Feed refresh failed, serving stale cache"
                    );
                    Ok(NewsOutcome {
                        snapshot,
                        served_from: ServedFrom::StaleCache,
                        warning: Some(format!("Using cached data due to feed error: {}", e)),
                    })
                } else {
                    tracing::error!(error = %e, "Feed refresh failed and no cached data is available");
                    Err(e)
                }
            }
        }
    }

    /// Forced refresh. Shared by the refresh endpoint and the background task.
    pub async fn refresh(&self) -> Result<NewsOutcome, NewsError> {
        self.get_articles(true).await
    }

    /// Cache summary. Never triggers a fetch.
    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }

    pub async fn probe_feed(&self) -> Result<ProbeReport, FetchError> {
        self.fetcher.probe().await
    }

    fn fresh_hit(&self) -> Option<NewsOutcome> {
        if !self.cache.is_fresh(Utc::now()) {
            return None;
        }
        let snapshot = self.cache.get();
        tracing::debug!(count = snapshot.count(), "Serving articles from cache");
        Some(NewsOutcome {
            snapshot,
            served_from: ServedFrom::Cache,
            warning: None,
        })
    }

    async fn fetch_and_parse(&self) -> Result<Vec<Article>, NewsError> {
        let raw = self.fetcher.fetch().await?;
        let result = self.parser.parse_at(&raw, Utc::now())?;

        if result.skipped > 0 {
            tracing::warn!(
                feed = %self.fetcher.url(),
                skipped = result.skipped,
                "Feed entries skipped during parsing"
            );
        }
        tracing::debug!(
            feed = %self.fetcher.url(),
            dialect = %result.dialect,
            count = result.articles.len(),
            "Feed parsed"
        );

        Ok(result.articles)
    }
}
