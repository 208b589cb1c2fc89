//! In-memory article storage.
//!
//! Holds the normalized article model and the single shared cache the news
//! service serves from. Nothing here survives a restart.

mod cache;
mod types;

pub use cache::ArticleCache;
pub use types::{Article, CacheSnapshot, CacheStatus};
