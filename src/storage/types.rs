use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

// ============================================================================
// Article
// ============================================================================

/// A feed entry normalized into the shape the API serves.
///
/// Produced by the feed parser from either an RSS `item` or an Atom `entry`.
/// Text fields are plain text: markup is stripped and common entities decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Position of the entry in the fetched document. Not stable across refreshes.
    pub id: usize,
    pub title: String,
    /// Plain-text excerpt, at most 200 characters plus "..."
    pub summary: String,
    /// Full plain-text body
    pub content: String,
    /// Publisher label from configuration
    pub source: String,
    /// Canonical link, "#" when the entry has none
    pub source_url: String,
    /// Feed date, or the fetch time when missing or unparsable
    pub published_at: DateTime<Utc>,
    /// RSS category, empty for Atom entries
    pub category: String,
    pub word_count: usize,
    /// Estimated reading time in minutes, serialized as "N min"
    #[serde(serialize_with = "serialize_read_time")]
    pub read_time: usize,
}

fn serialize_read_time<S: Serializer>(minutes: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{} min", minutes))
}

// ============================================================================
// Cache Types
// ============================================================================

/// Immutable view of the cache at one point in time.
///
/// Replaced wholesale on every successful fetch; never mutated in place.
#[derive(Debug, Default)]
pub struct CacheSnapshot {
    /// Sorted by `published_at`, newest first
    pub articles: Vec<Article>,
    /// When the articles were fetched, `None` until the first success
    pub last_update: Option<DateTime<Utc>>,
}

impl CacheSnapshot {
    pub fn has_data(&self) -> bool {
        !self.articles.is_empty()
    }

    pub fn count(&self) -> usize {
        self.articles.len()
    }
}

/// Cache summary reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    pub has_data: bool,
    pub last_update: Option<DateTime<Utc>>,
    pub count: usize,
}
