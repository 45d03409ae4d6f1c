//! Markup utilities: tag stripping, tokenization and HTML escaping.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern matching HTML/XML tags, including comments and malformed stubs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("valid regex"));

/// Remove markup from a fragment of HTML.
///
/// Tags are removed without inserting replacement whitespace, so words that
/// were only separated by a tag collapse together. Word counting therefore
/// operates on the text as a reader would see it, not on the source markup.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Tokenize text into words by whitespace.
///
/// Runs of whitespace count as a single separator; leading and trailing
/// whitespace produce no tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Escape text for interpolation into HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
