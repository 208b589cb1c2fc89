use std::borrow::Cow;

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";

/// Words per minute used for the read time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Removes anything that looks like a markup tag.
///
/// Permissive by design of the feeds we read: every `<` that has a matching
/// `>` later in the string starts a tag, whatever sits between them. A `<`
/// with no closing `>` is kept as literal text.
///
/// Returns `Cow::Borrowed` when the input contains no `<` (common case for
/// plain-text descriptions).
///
/// # Examples
///
/// ```
/// use infomercado::util::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_tags("a < b"), "a < b");
/// ```
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    if !s.contains('<') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // Unterminated tag, keep the remainder verbatim
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Decodes the handful of HTML entities feeds commonly double-escape.
///
/// Only `&nbsp;`, `&amp;`, `&lt;`, `&gt;` and `&quot;` are handled, in that
/// order. Because `&amp;` is decoded before `&lt;`, a double-escaped
/// `&amp;lt;` ends up as `<`.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let decoded = s
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    Cow::Owned(decoded)
}

/// Turns an HTML fragment into trimmed plain text.
pub fn to_plain_text(s: &str) -> String {
    let stripped = strip_tags(s);
    decode_entities(&stripped).trim().to_string()
}

/// Truncates a string to at most `max_chars` characters, appending "..."
/// when anything was cut.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character. The result is at most `max_chars + 3` characters long.
///
/// # Examples
///
/// ```
/// use infomercado::util::truncate_chars;
///
/// assert_eq!(truncate_chars("Short", 10), "Short");
/// assert_eq!(truncate_chars("Hello World", 5), "Hello...");
/// assert_eq!(truncate_chars("Página", 4), "Pági...");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS)),
        None => Cow::Borrowed(s), // fits
    }
}

/// Number of whitespace-separated words.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Estimated reading time in minutes, never less than one.
pub fn read_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
