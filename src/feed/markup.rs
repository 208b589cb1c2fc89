//! Minimal element tree over `quick-xml`.
//!
//! Feeds only need a small slice of DOM behavior: find descendants by tag
//! name in document order, read an attribute, and collect text content.
//! This module builds just enough of a tree to answer those questions.

use std::borrow::Cow;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// SEC-003: Maximum element nesting depth accepted from a feed.
/// Real feeds are a handful of levels deep; anything beyond this is hostile.
const MAX_DEPTH: usize = 256;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),

    #[error("document has no root element")]
    NoRoot,

    #[error("nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Self {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        let decoder = reader.decoder();

        for attr_result in start.attributes() {
            let attr = match attr_result {
                Ok(attr) => attr,
                Err(e) => {
                    tracing::debug!(element = %name, error = %e, "Skipping malformed attribute");
                    continue;
                }
            };
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            // SEC-002: only the five XML builtins are ever resolved
            let value = match attr.decode_and_unescape_value(decoder) {
                Ok(v) => v.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            attributes.push((key, value));
        }

        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Qualified tag name, prefix included (`atom:link` stays `atom:link`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All descendant elements named `name`, in document order.
    ///
    /// The element itself is not included.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = child_elements(self).rev().collect();

        while let Some(el) = stack.pop() {
            if el.name == name {
                found.push(el);
            }
            stack.extend(child_elements(el).rev());
        }
        found
    }

    /// First descendant named `name` in document order.
    pub fn first_named(&self, name: &str) -> Option<&Element> {
        let mut stack: Vec<&Element> = child_elements(self).rev().collect();

        while let Some(el) = stack.pop() {
            if el.name == name {
                return Some(el);
            }
            stack.extend(child_elements(el).rev());
        }
        None
    }

    /// Concatenated text of every descendant text node, CDATA included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();

        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => stack.extend(el.children.iter().rev()),
            }
        }
        out
    }

    /// Total bytes of text below this element.
    pub fn text_len(&self) -> usize {
        let mut len = 0;
        let mut stack: Vec<&Node> = self.children.iter().collect();

        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) => len += t.len(),
                Node::Element(el) => stack.extend(el.children.iter()),
            }
        }
        len
    }
}

fn child_elements(el: &Element) -> impl DoubleEndedIterator<Item = &Element> {
    el.children.iter().filter_map(|c| match c {
        Node::Element(e) => Some(e),
        Node::Text(_) => None,
    })
}

/// Parses `text` into an element tree rooted at the document element.
///
/// Strict about structure (mismatched or unclosed tags are errors) but
/// lenient about content: text containing entities XML does not define,
/// such as `&nbsp;`, is kept verbatim instead of failing the document.
///
/// # Security
///
/// SEC-002: `quick-xml` (0.37) never expands `<!ENTITY>` declarations, so a
/// DOCTYPE cannot inject content. The DOCTYPE event itself is ignored.
pub fn parse_document(text: &str) -> Result<Element, MarkupError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| MarkupError::Xml {
                position: reader.error_position(),
                message: e.to_string(),
            })?;

        match event {
            Event::Start(start) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(MarkupError::MaxDepthExceeded(MAX_DEPTH));
                }
                stack.push(Element::from_start(&start, &reader));
            }
            Event::Empty(start) => {
                let el = Element::from_start(&start, &reader);
                attach(&mut stack, &mut root, el);
            }
            Event::End(end) => {
                let Some(el) = stack.pop() else {
                    return Err(MarkupError::UnexpectedClose(
                        String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    ));
                };
                attach(&mut stack, &mut root, el);
            }
            Event::Text(t) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&t);
                    push_text(parent, unescape_lenient(&raw));
                }
            }
            Event::CData(c) => {
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, String::from_utf8_lossy(&c));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, DOCTYPE
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(MarkupError::Unclosed(open.name));
    }
    root.ok_or(MarkupError::NoRoot)
}

/// Decodes the predefined XML entities and character references in `raw`.
///
/// Names XML does not define (HTML's `&nbsp;`, DOCTYPE-declared entities)
/// and stray ampersands stay literal, and they never stop the rest of the
/// text from being decoded.
fn unescape_lenient(raw: &str) -> Cow<'_, str> {
    if let Ok(text) = unescape(raw) {
        return text;
    }
    let protected = protect_unknown_references(raw);
    match unescape(&protected) {
        Ok(text) => Cow::Owned(text.into_owned()),
        // Out-of-range character reference such as `&#0;`
        Err(_) => Cow::Borrowed(raw),
    }
}

/// Escapes every `&` that does not start a reference `unescape` understands.
fn protect_unknown_references(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 16);
    for (i, piece) in raw.split('&').enumerate() {
        if i > 0 {
            if starts_with_known_reference(piece) {
                out.push('&');
            } else {
                out.push_str("&amp;");
            }
        }
        out.push_str(piece);
    }
    out
}

fn starts_with_known_reference(after_amp: &str) -> bool {
    let Some(end) = after_amp.find(';') else {
        return false;
    };
    let name = &after_amp[..end];
    match name.strip_prefix('#') {
        Some(number) => match number.strip_prefix('x') {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()),
        },
        None => matches!(name, "lt" | "gt" | "amp" | "apos" | "quot"),
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        // Only the first top-level element counts as the document
        None if root.is_none() => *root = Some(el),
        None => tracing::debug!(element = %el.name, "Ignoring element after document root"),
    }
}

fn push_text(parent: &mut Element, text: Cow<'_, str>) {
    // Merge adjacent text and CDATA so text_content stays contiguous
    if let Some(Node::Text(last)) = parent.children.last_mut() {
        last.push_str(&text);
    } else {
        parent.children.push(Node::Text(text.into_owned()));
    }
}
