//! Feed retrieval and normalization.
//!
//! This module provides the two leaf stages of the news pipeline:
//!
//! - **Fetching**: one bounded-timeout HTTP exchange against the configured feed
//! - **Parsing**: RSS 2.0 / Atom documents normalized into [`Article`](crate::storage::Article)s
//!
//! # Architecture
//!
//! - [`fetcher`] - HTTP GET/HEAD with size limits and typed errors
//! - [`markup`] - minimal element tree over `quick-xml`
//! - [`parser`] - dialect detection, field mapping and ordering
//!
//! # Example
//!
//! ```ignore
//! use infomercado::feed::{FeedFetcher, FeedParser};
//!
//! let raw = fetcher.fetch().await?;
//! let result = FeedParser::new("Página 12").parse(&raw)?;
//! ```

pub mod fetcher;
pub mod markup;
pub mod parser;

pub use fetcher::{FeedFetcher, FetchError, ProbeReport};
pub use markup::MarkupError;
pub use parser::{Dialect, EntryError, FeedParser, ParseError, ParseResult};
