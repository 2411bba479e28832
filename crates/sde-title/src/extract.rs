//! HTML `<title>` extraction.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap());

/// Extract the text of the first `<title>` element.
///
/// Entities are decoded and runs of whitespace collapse to a single space.
/// Returns `None` when there is no title element or it is blank.
///
/// # Example
///
/// ```
/// use sde_title::extract_title;
///
/// let html = "<html><head><title>\n  Example Domain\n</title></head></html>";
/// assert_eq!(extract_title(html).as_deref(), Some("Example Domain"));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str();
    let decoded = html_escape::decode_html_entities(raw);
    let title = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}
