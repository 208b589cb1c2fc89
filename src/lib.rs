//! InfoMercado: a cache-first JSON API over a single RSS/Atom news feed.

pub mod config;
pub mod feed;
pub mod news;
pub mod server;
pub mod storage;
pub mod util;
