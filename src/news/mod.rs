//! Cache-first news retrieval.
//!
//! [`NewsService`] decides per request whether to serve the cache, refresh
//! it, or fall back to stale data. [`spawn_refresher`] drives the same
//! refresh path on a timer.

mod refresher;
mod service;

pub use refresher::spawn_refresher;
pub use service::{NewsError, NewsOutcome, NewsService, ServedFrom};
