use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use super::markup::{self, Element, MarkupError};
use crate::storage::Article;
use crate::util::{read_time_minutes, to_plain_text, truncate_chars, word_count};

/// Title used when an entry has none
pub const UNTITLED: &str = "Sin título";
/// Link used when an entry has none
pub const MISSING_LINK: &str = "#";

const SUMMARY_MAX_CHARS: usize = 200;
/// Entries carrying more text than this are skipped rather than served
const MAX_ENTRY_TEXT_BYTES: usize = 1024 * 1024; // 1MB

/// Naive formats some feeds use instead of RFC 2822 / RFC 3339, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Whole-document parse failures.
///
/// Either of these means the fetch produced nothing servable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed document: {0}")]
    Malformed(#[from] MarkupError),
    /// Zero RSS items and zero Atom entries. Treated as an error because an
    /// empty feed is indistinguishable from a broken one.
    #[error("no entries found")]
    NoEntries,
}

/// Failure extracting a single entry. Never escapes the parser.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry text is {len} bytes (max {max})")]
    TooLarge { len: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Rss,
    Atom,
}

impl Dialect {
    fn entry_tag(self) -> &'static str {
        match self {
            Dialect::Rss => "item",
            Dialect::Atom => "entry",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Rss => f.write_str("rss"),
            Dialect::Atom => f.write_str("atom"),
        }
    }
}

/// Result of parsing a feed with best-effort recovery.
#[derive(Debug)]
pub struct ParseResult {
    /// Normalized articles, newest first
    pub articles: Vec<Article>,
    /// Entries dropped because their extraction failed
    pub skipped: usize,
    pub dialect: Dialect,
}

/// Entry fields as found in the document, before normalization.
#[derive(Debug, Default)]
struct RawEntry {
    title: Option<String>,
    body: Option<String>,
    link: Option<String>,
    date: Option<String>,
    category: Option<String>,
}

/// Turns RSS 2.0 or Atom documents into [`Article`]s.
#[derive(Debug, Clone)]
pub struct FeedParser {
    source_label: String,
}

impl FeedParser {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
        }
    }

    /// Parse a feed, using the current time for entries without a usable date.
    pub fn parse(&self, raw: &str) -> Result<ParseResult, ParseError> {
        self.parse_at(raw, Utc::now())
    }

    /// Parse a feed fetched at `fetched_at`.
    ///
    /// RSS `item` elements win when present; otherwise Atom `entry` elements
    /// are used. Entries that fail extraction are logged and skipped. The
    /// output is stable-sorted by publish date, newest first.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Malformed`] if the text is not a well-formed document
    /// - [`ParseError::NoEntries`] if neither dialect yields any entry
    pub fn parse_at(
        &self,
        raw: &str,
        fetched_at: DateTime<Utc>,
    ) -> Result<ParseResult, ParseError> {
        let document = markup::parse_document(raw)?;

        let (dialect, entries) = [Dialect::Rss, Dialect::Atom]
            .into_iter()
            .map(|d| (d, collect_entries(&document, d)))
            .find(|(_, entries)| !entries.is_empty())
            .ok_or(ParseError::NoEntries)?;

        let mut skipped = 0;
        let mut articles = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let extracted = match dialect {
                Dialect::Rss => extract_rss(entry),
                Dialect::Atom => extract_atom(entry),
            };
            match extracted {
                Ok(raw_entry) => {
                    articles.push(self.normalize(index, raw_entry, fetched_at));
                }
                Err(e) => {
                    tracing::warn!(
                        index = index,
                        dialect = %dialect,
                        error = %e,
                        "Skipping malformed feed entry"
                    );
                    skipped += 1;
                }
            }
        }

        // Vec::sort_by is stable: equal dates keep feed order
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        tracing::debug!(
            dialect = %dialect,
            articles = articles.len(),
            skipped = skipped,
            "Parsed feed"
        );

        Ok(ParseResult {
            articles,
            skipped,
            dialect,
        })
    }

    fn normalize(&self, id: usize, raw: RawEntry, fetched_at: DateTime<Utc>) -> Article {
        let content = raw.body.as_deref().map(to_plain_text).unwrap_or_default();
        let summary = truncate_chars(&content, SUMMARY_MAX_CHARS).into_owned();
        let words = word_count(&content);

        Article {
            id,
            title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
            summary,
            source: self.source_label.clone(),
            source_url: raw.link.unwrap_or_else(|| MISSING_LINK.to_string()),
            published_at: raw
                .date
                .as_deref()
                .and_then(parse_date)
                .unwrap_or(fetched_at),
            category: raw.category.unwrap_or_default(),
            word_count: words,
            read_time: read_time_minutes(words),
            content,
        }
    }
}

fn collect_entries(document: &Element, dialect: Dialect) -> Vec<&Element> {
    // The document element itself can be an entry (a bare Atom entry document)
    let tag = dialect.entry_tag();
    if document.name() == tag {
        return vec![document];
    }
    document.descendants_named(tag)
}

fn check_size(entry: &Element) -> Result<(), EntryError> {
    let len = entry.text_len();
    if len > MAX_ENTRY_TEXT_BYTES {
        return Err(EntryError::TooLarge {
            len,
            max: MAX_ENTRY_TEXT_BYTES,
        });
    }
    Ok(())
}

/// Trimmed text of the first descendant named `name`, `None` if missing or blank.
fn trimmed_text(entry: &Element, name: &str) -> Option<String> {
    entry
        .first_named(name)
        .map(|el| el.text_content().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Untrimmed text of the first descendant named `name`, `None` if missing or blank.
fn raw_text(entry: &Element, name: &str) -> Option<String> {
    entry
        .first_named(name)
        .map(Element::text_content)
        .filter(|s| !s.trim().is_empty())
}

fn extract_rss(item: &Element) -> Result<RawEntry, EntryError> {
    check_size(item)?;

    Ok(RawEntry {
        title: trimmed_text(item, "title"),
        body: raw_text(item, "description"),
        link: trimmed_text(item, "link"),
        date: trimmed_text(item, "pubDate"),
        category: trimmed_text(item, "category"),
    })
}

fn extract_atom(entry: &Element) -> Result<RawEntry, EntryError> {
    check_size(entry)?;

    Ok(RawEntry {
        title: trimmed_text(entry, "title"),
        body: raw_text(entry, "summary").or_else(|| raw_text(entry, "content")),
        link: atom_link(entry),
        date: trimmed_text(entry, "updated").or_else(|| trimmed_text(entry, "published")),
        category: None,
    })
}

/// Picks the entry's alternate link, falling back to the first link with an href.
fn atom_link(entry: &Element) -> Option<String> {
    let links = entry.descendants_named("link");
    let href = |el: &&Element| {
        el.attribute("href")
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
    };

    links
        .iter()
        .filter(|el| matches!(el.attribute("rel"), None | Some("alternate")))
        .find_map(href)
        .or_else(|| links.iter().find_map(href))
}

/// Parses the date formats seen in RSS and Atom feeds.
///
/// Tries RFC 2822 (RSS `pubDate`), RFC 3339 (Atom), then a few naive
/// variants interpreted as UTC. Returns `None` when nothing matches.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parser() -> FeedParser {
        FeedParser::new("Página 12")
    }

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap()
    }

    const RSS_THREE_ITEMS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
  <title>Economía</title>
  <item>
    <title> Sube el dólar </title>
    <link>https://example.com/dolar</link>
    <description><![CDATA[<p>El dólar&nbsp;blue <b>sube</b> &amp; baja.</p>]]></description>
    <pubDate>Mon, 20 May 2024 10:00:00 -0300</pubDate>
    <category>Economía</category>
  </item>
  <item>
    <title>Sin fecha</title>
    <link>https://example.com/sin-fecha</link>
    <description>Nota sin fecha</description>
  </item>
  <item>
    <title>Inflación</title>
    <link>https://example.com/inflacion</link>
    <description>Dato mensual</description>
    <pubDate>Tue, 21 May 2024 09:00:00 GMT</pubDate>
  </item>
</channel></rss>"#;

    #[test]
    fn test_rss_missing_date_defaults_to_fetch_time() {
        let result = parser().parse_at(RSS_THREE_ITEMS, fetched_at()).unwrap();
        assert_eq!(result.dialect, Dialect::Rss);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.articles.len(), 3);

        let titles: Vec<_> = result.articles.iter().map(|a| a.title.as_str()).collect();
        // 21 May 09:00Z > 20 May 15:00Z (fetch time) > 20 May 13:00Z
        assert_eq!(titles, vec!["Inflación", "Sin fecha", "Sube el dólar"]);

        let undated = &result.articles[1];
        assert_eq!(undated.published_at, fetched_at());
        assert_eq!(undated.id, 1);
    }

    #[test]
    fn test_rss_fields_are_normalized() {
        let result = parser().parse_at(RSS_THREE_ITEMS, fetched_at()).unwrap();
        let article = result
            .articles
            .iter()
            .find(|a| a.id == 0)
            .expect("first item present");

        assert_eq!(article.title, "Sube el dólar");
        assert_eq!(article.content, "El dólar blue sube & baja.");
        assert_eq!(article.summary, article.content);
        assert_eq!(article.source, "Página 12");
        assert_eq!(article.source_url, "https://example.com/dolar");
        assert_eq!(article.category, "Economía");
        assert_eq!(
            article.published_at,
            Utc.with_ymd_and_hms(2024, 5, 20, 13, 0, 0).unwrap()
        );
        assert_eq!(article.word_count, 6);
        assert_eq!(article.read_time, 1);
    }

    #[test]
    fn test_rss_placeholders_for_missing_fields() {
        let xml = r#"<rss><channel><item><description>   </description></item></channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        let article = &result.articles[0];

        assert_eq!(article.title, UNTITLED);
        assert_eq!(article.title, "Sin título");
        assert_eq!(article.source_url, MISSING_LINK);
        assert_eq!(article.summary, "");
        assert_eq!(article.content, "");
        assert_eq!(article.category, "");
        assert_eq!(article.word_count, 0);
        assert_eq!(article.read_time, 1);
        assert_eq!(article.published_at, fetched_at());
    }

    #[test]
    fn test_escaped_html_description() {
        let xml = r#"<rss><channel><item>
            <title>T</title>
            <description>&lt;p&gt;Hola &amp;amp; chau&lt;/p&gt;</description>
        </item></channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        assert_eq!(result.articles[0].content, "Hola & chau");
    }

    #[test]
    fn test_entities_decoded_around_nbsp() {
        let xml = r#"<rss><channel>
            <item>
                <title>Uno</title>
                <description>&lt;p&gt;Hola&nbsp;mundo&lt;/p&gt;</description>
            </item>
            <item>
                <title>Dos</title>
                <description>Econom&#237;a&nbsp;hoy</description>
            </item>
        </channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        let content_of = |id| {
            result
                .articles
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.content.as_str())
                .unwrap()
        };
        assert_eq!(content_of(0), "Hola mundo");
        assert_eq!(content_of(1), "Economía hoy");
        assert_eq!(result.articles[0].summary, "Hola mundo");
    }

    #[test]
    fn test_long_description_truncated() {
        let body = "palabra ".repeat(100);
        let xml = format!(
            "<rss><channel><item><title>Larga</title><description>{}</description></item></channel></rss>",
            body
        );
        let result = parser().parse_at(&xml, fetched_at()).unwrap();
        let article = &result.articles[0];

        assert_eq!(article.summary.chars().count(), 203);
        assert!(article.summary.ends_with("..."));
        assert_eq!(article.content, body.trim());
        assert_eq!(article.word_count, 100);
    }

    #[test]
    fn test_unparsable_date_falls_back_to_fetch_time() {
        let xml = r#"<rss><channel><item><title>X</title><pubDate>ayer a la tarde</pubDate></item></channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        assert_eq!(result.articles[0].published_at, fetched_at());
    }

    #[test]
    fn test_equal_dates_keep_feed_order() {
        let xml = r#"<rss><channel>
            <item><title>a</title><pubDate>Mon, 20 May 2024 10:00:00 GMT</pubDate></item>
            <item><title>b</title><pubDate>Mon, 20 May 2024 10:00:00 GMT</pubDate></item>
            <item><title>c</title><pubDate>Mon, 20 May 2024 11:00:00 GMT</pubDate></item>
            <item><title>d</title><pubDate>Mon, 20 May 2024 10:00:00 GMT</pubDate></item>
        </channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        let titles: Vec<_> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b", "d"]);
    }

    const ATOM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example</title>
  <link href="https://example.com/"/>
  <entry>
    <title>Primera</title>
    <link rel="self" href="https://example.com/self/1"/>
    <link rel="alternate" href="https://example.com/1"/>
    <summary type="html">&lt;p&gt;Resumen &lt;em&gt;uno&lt;/em&gt;&lt;/p&gt;</summary>
    <updated>2024-05-19T08:00:00Z</updated>
    <category term="ignored"/>
  </entry>
  <entry>
    <title>Segunda</title>
    <link href="https://example.com/2"/>
    <content type="html">Cuerpo dos</content>
    <published>2024-05-20T08:00:00+02:00</published>
  </entry>
  <entry>
    <title>Tercera</title>
    <summary></summary>
    <content>Cuerpo tres</content>
  </entry>
</feed>"#;

    #[test]
    fn test_atom_entries() {
        let result = parser().parse_at(ATOM_FEED, fetched_at()).unwrap();
        assert_eq!(result.dialect, Dialect::Atom);
        assert_eq!(result.articles.len(), 3);

        let titles: Vec<_> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Tercera", "Segunda", "Primera"]);

        let first = result.articles.iter().find(|a| a.id == 0).unwrap();
        assert_eq!(first.source_url, "https://example.com/1");
        assert_eq!(first.content, "Resumen uno");
        assert_eq!(first.category, "");

        let second = result.articles.iter().find(|a| a.id == 1).unwrap();
        assert_eq!(second.content, "Cuerpo dos");
        assert_eq!(
            second.published_at,
            Utc.with_ymd_and_hms(2024, 5, 20, 6, 0, 0).unwrap()
        );

        // Empty summary falls through to content; no link, no date
        let third = result.articles.iter().find(|a| a.id == 2).unwrap();
        assert_eq!(third.content, "Cuerpo tres");
        assert_eq!(third.source_url, MISSING_LINK);
        assert_eq!(third.published_at, fetched_at());
    }

    #[test]
    fn test_atom_falls_back_to_first_link_with_href() {
        let xml = r#"<feed><entry><title>x</title><link rel="enclosure" href="https://cdn/x.mp3"/></entry></feed>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        assert_eq!(result.articles[0].source_url, "https://cdn/x.mp3");
    }

    #[test]
    fn test_rss_items_win_over_atom_entries() {
        let xml = r#"<rss><channel>
            <item><title>rss</title></item>
            <entry><title>atom</title></entry>
        </channel></rss>"#;
        let result = parser().parse_at(xml, fetched_at()).unwrap();
        assert_eq!(result.dialect, Dialect::Rss);
        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].title, "rss");
    }

    #[test]
    fn test_empty_channel_is_an_error() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>x</title></channel></rss>"#;
        let err = parser().parse_at(xml, fetched_at()).unwrap_err();
        assert!(matches!(err, ParseError::NoEntries));
        assert_eq!(err.to_string(), "no entries found");
    }

    #[test]
    fn test_empty_atom_feed_is_an_error() {
        let err = parser()
            .parse_at(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#, fetched_at())
            .unwrap_err();
        assert!(matches!(err, ParseError::NoEntries));
    }

    #[test]
    fn test_malformed_document() {
        let err = parser().parse_at("<rss><channel><item>", fetched_at()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed document"));

        let err = parser().parse_at("<html><body>", fetched_at()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_oversized_entry_is_skipped() {
        let huge = "x".repeat(MAX_ENTRY_TEXT_BYTES + 1);
        let xml = format!(
            "<rss><channel><item><title>ok</title></item><item><title>big</title><description>{}</description></item><item><title>ok2</title></item></channel></rss>",
            huge
        );
        let result = parser().parse_at(&xml, fetched_at()).unwrap();
        assert_eq!(result.skipped, 1);
        let ids: Vec<_> = result.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_oversized_atom_entry_is_skipped() {
        let huge = "x".repeat(MAX_ENTRY_TEXT_BYTES + 1);
        let xml = format!(
            r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>uno</title><updated>2024-05-20T10:00:00Z</updated></entry>
  <entry><title>grande</title><content>{}</content></entry>
  <entry><title>tres</title><updated>2024-05-21T10:00:00Z</updated></entry>
</feed>"#,
            huge
        );
        let result = parser().parse_at(&xml, fetched_at()).unwrap();
        assert_eq!(result.dialect, Dialect::Atom);
        assert_eq!(result.skipped, 1);
        let ids: Vec<_> = result.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 0]);
        assert_eq!(result.articles[0].title, "tres");
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 20, 13, 0, 0).unwrap();
        assert_eq!(parse_date("Mon, 20 May 2024 10:00:00 -0300"), Some(expected));
        assert_eq!(parse_date("Mon, 20 May 2024 13:00:00 GMT"), Some(expected));
        assert_eq!(parse_date("2024-05-20T13:00:00Z"), Some(expected));
        assert_eq!(parse_date("2024-05-20T10:00:00-03:00"), Some(expected));
        assert_eq!(parse_date("2024-05-20 13:00:00"), Some(expected));
        assert_eq!(parse_date("2024-05-20T13:00:00"), Some(expected));
        assert_eq!(parse_date("  2024-05-20T13:00:00.000  "), Some(expected));
        assert_eq!(
            parse_date("2024-05-20"),
            Some(Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
    }

    fn rss_with(items: &[(Option<i64>, String)]) -> String {
        let mut xml = String::from("<rss><channel>");
        for (i, (ts, body)) in items.iter().enumerate() {
            xml.push_str(&format!("<item><title>n{}</title>", i));
            if let Some(ts) = ts {
                let date = Utc.timestamp_opt(*ts, 0).unwrap().to_rfc2822();
                xml.push_str(&format!("<pubDate>{}</pubDate>", date));
            }
            xml.push_str(&format!("<description><![CDATA[{}]]></description></item>", body));
        }
        xml.push_str("</channel></rss>");
        xml
    }

    fn atom_with(entries: &[(Option<i64>, String)]) -> String {
        let mut xml = String::from(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        for (i, (ts, body)) in entries.iter().enumerate() {
            xml.push_str(&format!("<entry><title>n{}</title>", i));
            if let Some(ts) = ts {
                let date = Utc.timestamp_opt(*ts, 0).unwrap().to_rfc3339();
                xml.push_str(&format!("<updated>{}</updated>", date));
            }
            xml.push_str(&format!("<summary><![CDATA[{}]]></summary></entry>", body));
        }
        xml.push_str("</feed>");
        xml
    }

    proptest! {
        #[test]
        fn prop_atom_output_sorted_and_bounded(
            entries in prop::collection::vec(
                (prop::option::of(0i64..4_000_000_000), "[a-zA-Z0-9 <>/&;]{0,400}"),
                1..20,
            )
        ) {
            let xml = atom_with(&entries);
            let result = parser().parse_at(&xml, fetched_at()).unwrap();

            prop_assert_eq!(result.dialect, Dialect::Atom);
            prop_assert_eq!(result.articles.len(), entries.len());
            for pair in result.articles.windows(2) {
                prop_assert!(pair[0].published_at >= pair[1].published_at);
                if pair[0].published_at == pair[1].published_at {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
            for article in &result.articles {
                prop_assert!(article.summary.chars().count() <= 203);
                prop_assert!(article.read_time >= 1);
            }
        }

        #[test]
        fn prop_rss_output_sorted_and_bounded(
            items in prop::collection::vec(
                (prop::option::of(0i64..4_000_000_000), "[a-zA-Z0-9 <>/&;]{0,400}"),
                1..20,
            )
        ) {
            let xml = rss_with(&items);
            let result = parser().parse_at(&xml, fetched_at()).unwrap();

            prop_assert_eq!(result.articles.len(), items.len());
            for pair in result.articles.windows(2) {
                prop_assert!(pair[0].published_at >= pair[1].published_at);
            }
            for article in &result.articles {
                prop_assert!(article.summary.chars().count() <= 203);
                prop_assert!(!article.title.is_empty());
                prop_assert!(article.read_time >= 1);
            }
        }
    }
}
