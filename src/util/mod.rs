//! Utility functions for common operations.
//!
//! This module provides reusable text utilities used when normalizing feed
//! entries:
//!
//! - **Markup stripping**: permissive tag removal and entity decoding
//! - **Truncation**: character-aware summary truncation with an ellipsis
//! - **Reading metrics**: word counts and read time estimates
//!
//! # Examples
//!
//! ```
//! use infomercado::util::{to_plain_text, truncate_chars, word_count};
//!
//! let text = to_plain_text("<p>Suben las tasas &amp; el dólar</p>");
//! assert_eq!(text, "Suben las tasas & el dólar");
//! assert_eq!(word_count(&text), 6);
//! assert_eq!(truncate_chars(&text, 5), "Suben...");
//! ```

mod text;

pub use text::{
    decode_entities, read_time_minutes, strip_tags, to_plain_text, truncate_chars, word_count,
};
